use super::*;

#[test]
fn details_href_escapes_the_title() {
    assert_eq!(
        details_href(9799, "Fast & Furious"),
        "/movie/9799?name=Fast%20%26%20Furious"
    );
}

#[test]
fn details_href_plain_title_stays_readable() {
    assert_eq!(details_href(603, "Heat"), "/movie/603?name=Heat");
}
