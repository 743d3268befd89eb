use super::*;

#[test]
fn unreserved_characters_pass_through() {
    assert_eq!(encode("Heat-2.0_v~final"), "Heat-2.0_v~final");
}

#[test]
fn reserved_characters_are_escaped() {
    assert_eq!(encode("Fast & Furious"), "Fast%20%26%20Furious");
    assert_eq!(encode("what?"), "what%3F");
    assert_eq!(encode("#1"), "%231");
    assert_eq!(encode("a=b"), "a%3Db");
    assert_eq!(encode("50/50"), "50%2F50");
}

#[test]
fn multibyte_utf8_is_encoded_per_byte() {
    assert_eq!(encode("Am\u{e9}lie"), "Am%C3%A9lie");
}

#[test]
fn empty_input_stays_empty() {
    assert_eq!(encode(""), "");
}
