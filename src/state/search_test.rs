use super::*;

#[test]
fn search_state_defaults_empty() {
    let state = SearchState::default();
    assert!(state.term.is_empty());
    assert!(state.results.is_empty());
}

#[test]
fn clear_results_keeps_the_term() {
    let mut state = SearchState {
        term: "alien".to_owned(),
        results: vec![MovieSearchResult { id: 1, ..MovieSearchResult::default() }],
    };
    state.clear_results();
    assert_eq!(state.term, "alien");
    assert!(state.results.is_empty());
}
