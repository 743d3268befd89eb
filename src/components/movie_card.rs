//! Clickable search-result card linking to the movie details page.

#[cfg(test)]
#[path = "movie_card_test.rs"]
mod movie_card_test;

use leptos::prelude::*;

use crate::net::types::MovieSearchResult;
use crate::util::urlenc;

const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w185";

/// Details-page link for a search hit, with the title escaped into the
/// `name` query parameter.
fn details_href(id: i64, title: &str) -> String {
    format!("/movie/{id}?name={}", urlenc::encode(title))
}

/// A search hit: poster, title, release date, and rating.
///
/// Navigates to `/movie/{id}`, carrying the title as a `name` query
/// parameter for the review-summary request on the details page.
#[component]
pub fn MovieCard(movie: MovieSearchResult) -> impl IntoView {
    let href = details_href(movie.id, &movie.title);
    let rating = movie
        .vote_average
        .map_or_else(|| "N/A".to_owned(), |avg| format!("{avg:.1}"));

    view! {
        <a class="movie-card" href=href>
            <div class="movie-card__poster">
                {match &movie.poster_path {
                    Some(path) => view! {
                        <img src=format!("{TMDB_IMAGE_BASE}{path}") alt=movie.title.clone()/>
                    }
                    .into_any(),
                    None => view! { <div class="movie-card__no-poster">"No Image"</div> }.into_any(),
                }}
            </div>
            <div class="movie-card__body">
                <h3 class="movie-card__title">{movie.title.clone()}</h3>
                <p class="movie-card__release">{movie.release_date.clone().unwrap_or_default()}</p>
                <p class="movie-card__rating">{format!("\u{2b50} {rating}")}</p>
            </div>
            <div class="movie-card__overlay">
                <h4>{movie.title.clone()}</h4>
                <p class="movie-card__description">{movie.overview.clone().unwrap_or_default()}</p>
            </div>
        </a>
    }
}
