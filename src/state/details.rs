//! Merged view model for the movie details page.
//!
//! The page fans out three independent requests (metadata, watch providers,
//! review summary) and merges whatever came back. Each fragment owns a
//! disjoint slice of the model; an unavailable fragment leaves its slice at
//! the empty default instead of voiding the page.

#[cfg(test)]
#[path = "details_test.rs"]
mod details_test;

use std::collections::BTreeMap;

use crate::net::fetch::Fragment;
use crate::net::types::{MovieDetails, WatchProvider, WatchProviderRegion, WatchProvidersResponse};

// Fragment order within the details fan-out.
const DETAILS: usize = 0;
const PROVIDERS: usize = 1;
const REVIEWS: usize = 2;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MovieDetailsView {
    pub movie: Option<MovieDetails>,
    pub providers: BTreeMap<String, WatchProviderRegion>,
    pub reviews: String,
}

impl MovieDetailsView {
    /// Merge the three fan-out outcomes into one render-ready model.
    ///
    /// Missing or undecodable fragments keep their defaults; the view
    /// renders with whatever succeeded.
    pub fn from_fragments(fragments: &[Fragment]) -> Self {
        let movie = fragments
            .get(DETAILS)
            .and_then(Fragment::decode::<MovieDetails>);
        if movie.is_none() {
            log::warn!("movie details not available");
        }

        let providers = fragments
            .get(PROVIDERS)
            .and_then(Fragment::decode::<WatchProvidersResponse>)
            .map(|response| response.results)
            .unwrap_or_else(|| {
                log::warn!("watch providers not available");
                BTreeMap::new()
            });

        let reviews = fragments
            .get(REVIEWS)
            .and_then(|fragment| fragment.text())
            .map(str::to_owned)
            .unwrap_or_else(|| {
                log::warn!("review summary not available");
                String::new()
            });

        Self { movie, providers, reviews }
    }

    /// Flatrate streaming providers for the US region.
    pub fn us_flatrate(&self) -> &[WatchProvider] {
        self.providers
            .get("US")
            .map_or(&[], |region| region.flatrate.as_slice())
    }
}
