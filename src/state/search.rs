#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::types::MovieSearchResult;

/// Search term and results shared between the dashboard search box and the
/// results page. Provided as a signal context from `App`.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    pub term: String,
    pub results: Vec<MovieSearchResult>,
}

impl SearchState {
    /// Drop previous results before a new query runs.
    pub fn clear_results(&mut self) {
        self.results.clear();
    }
}
