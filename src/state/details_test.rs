use super::*;

use futures::executor::block_on;

use crate::net::fetch::{FetchError, join_fragments};

fn details_json() -> serde_json::Value {
    serde_json::json!({
        "id": 603,
        "title": "The Matrix",
        "release_date": "1999-03-31",
        "overview": "A hacker learns the truth.",
        "genres": [{"id": 28, "name": "Action"}],
        "runtime": 136,
        "vote_average": 8.2,
        "budget": 63_000_000,
        "revenue": 463_517_383,
        "tagline": "Welcome to the Real World.",
        "poster_path": "/matrix.jpg",
        "production_companies": [{"id": 79, "name": "Village Roadshow"}]
    })
}

fn providers_json() -> serde_json::Value {
    serde_json::json!({
        "results": {
            "US": {
                "link": "https://example.test/603",
                "flatrate": [{"provider_name": "Max"}, {"provider_name": "Hulu"}]
            }
        }
    })
}

#[test]
fn merges_all_three_fragments() {
    let view = MovieDetailsView::from_fragments(&[
        Fragment::Json(details_json()),
        Fragment::Json(providers_json()),
        Fragment::Text("Critics loved it.".to_owned()),
    ]);

    let movie = view.movie.as_ref().expect("movie metadata");
    assert_eq!(movie.title, "The Matrix");
    assert_eq!(movie.genres[0].name, "Action");

    let names: Vec<_> = view.us_flatrate().iter().map(|p| p.provider_name.as_str()).collect();
    assert_eq!(names, ["Max", "Hulu"]);
    assert_eq!(view.reviews, "Critics loved it.");
}

#[test]
fn failed_middle_fragment_leaves_its_slice_empty() {
    // Full fan-in path: three futures, the second fails, the others land.
    let fragments: Vec<_> = vec![
        Box::pin(async { Ok(Fragment::Json(details_json())) })
            as std::pin::Pin<Box<dyn std::future::Future<Output = Result<Fragment, FetchError>>>>,
        Box::pin(async { Err(FetchError::Transport("connection reset".to_owned())) }),
        Box::pin(async { Ok(Fragment::Text("Critics loved it.".to_owned())) }),
    ];
    let outcomes = block_on(join_fragments(fragments));
    let view = MovieDetailsView::from_fragments(&outcomes);

    assert!(view.movie.is_some());
    assert!(view.providers.is_empty());
    assert!(view.us_flatrate().is_empty());
    assert_eq!(view.reviews, "Critics loved it.");
}

#[test]
fn all_fragments_unavailable_yields_the_default_view() {
    let view = MovieDetailsView::from_fragments(&[
        Fragment::Unavailable,
        Fragment::Unavailable,
        Fragment::Unavailable,
    ]);
    assert_eq!(view, MovieDetailsView::default());
}

#[test]
fn missing_us_region_means_no_flatrate() {
    let view = MovieDetailsView::from_fragments(&[
        Fragment::Unavailable,
        Fragment::Json(serde_json::json!({"results": {"DE": {"flatrate": [{"provider_name": "WOW"}]}}})),
        Fragment::Unavailable,
    ]);
    assert!(view.us_flatrate().is_empty());
    assert!(view.providers.contains_key("DE"));
}

#[test]
fn short_fragment_list_defaults_the_tail() {
    let view = MovieDetailsView::from_fragments(&[Fragment::Json(details_json())]);
    assert!(view.movie.is_some());
    assert!(view.providers.is_empty());
    assert!(view.reviews.is_empty());
}
