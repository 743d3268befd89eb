use super::*;

#[test]
fn redirect_carries_the_requested_path() {
    assert_eq!(redirect_target("/dashboard"), "/landing?from=%2Fdashboard");
}

#[test]
fn redirect_escapes_reserved_characters_in_the_path() {
    assert_eq!(
        redirect_target("/movie/9799"),
        "/landing?from=%2Fmovie%2F9799"
    );
}
