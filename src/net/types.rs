//! Wire types for the movie service's JSON responses.
//!
//! Field casing differs by endpoint: `daily-new` is re-serialized by the
//! movie service (camelCase), while search and details proxy TMDB payloads
//! verbatim (snake_case). The serde renames below mirror that split.

use std::collections::BTreeMap;

/// A movie from the daily new-releases feed.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewlyReleasedMovie {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub release_date: Option<String>,
    #[serde(rename = "genreIds")]
    pub genres: Vec<String>,
    pub overview: Option<String>,
    pub popularity: Option<f64>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i64>,
    pub poster_path: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NewlyReleasedMoviesResponse {
    pub results: Vec<NewlyReleasedMovie>,
}

/// One search hit from the TMDB query endpoint.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MovieSearchResult {
    pub id: i64,
    pub title: String,
    pub release_date: Option<String>,
    pub overview: Option<String>,
    pub vote_average: Option<f64>,
    pub poster_path: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MovieSearchResponse {
    pub results: Vec<MovieSearchResult>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ProductionCompany {
    pub id: i64,
    pub name: String,
}

/// Full movie metadata from the details endpoint.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MovieDetails {
    pub id: i64,
    pub title: String,
    pub release_date: Option<String>,
    pub overview: Option<String>,
    pub genres: Vec<Genre>,
    pub runtime: Option<i64>,
    pub vote_average: Option<f64>,
    pub budget: Option<i64>,
    pub revenue: Option<i64>,
    pub tagline: Option<String>,
    pub poster_path: Option<String>,
    pub production_companies: Vec<ProductionCompany>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WatchProvider {
    pub provider_name: String,
}

/// Streaming availability for one region.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WatchProviderRegion {
    pub link: Option<String>,
    pub flatrate: Vec<WatchProvider>,
    pub rent: Vec<WatchProvider>,
    pub buy: Vec<WatchProvider>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WatchProvidersResponse {
    pub results: BTreeMap<String, WatchProviderRegion>,
}
