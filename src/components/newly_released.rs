//! "Newly Released Today" grid with page controls.

#[cfg(test)]
#[path = "newly_released_test.rs"]
mod newly_released_test;

use leptos::prelude::*;

use crate::components::page_controls::PageControls;
use crate::net::types::NewlyReleasedMovie;
use crate::state::paging::Pager;

const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

/// Row key for the release grid.
///
/// The feed's `id` is nullable, so the title backs it up; two id-less items
/// must not collapse into one row.
fn release_key(movie: &NewlyReleasedMovie) -> (Option<i64>, Option<String>) {
    (movie.id, movie.title.clone())
}

/// Paged 5x2 grid of today's new releases.
#[component]
pub fn NewlyReleased(movies: Signal<Vec<NewlyReleasedMovie>>) -> impl IntoView {
    let pager = RwSignal::new(Pager::default());
    let count = Signal::derive(move || movies.with(Vec::len));

    let page = move || {
        let p = pager.get();
        movies.with(|all| p.slice(all).to_vec())
    };

    view! {
        <section class="new-releases">
            <div class="new-releases__header">
                <h2 class="new-releases__title">"Newly Released Today"</h2>
                <PageControls pager=pager count=count/>
            </div>

            <div class="new-releases__grid">
                <For
                    each=page
                    key=release_key
                    children=|movie| view! { <ReleaseCard movie=movie/> }
                />
            </div>
        </section>
    }
}

/// One release in the grid: poster, title, genre badges, hover overview.
#[component]
fn ReleaseCard(movie: NewlyReleasedMovie) -> impl IntoView {
    let title = movie.title.clone().unwrap_or_default();
    let poster = movie
        .poster_path
        .as_ref()
        .map(|path| format!("{TMDB_IMAGE_BASE}{path}"));

    view! {
        <div class="release-card">
            <div class="release-card__poster">
                {poster.map(|src| view! { <img src=src alt=title.clone()/> })}
            </div>
            <div class="release-card__body">
                <h3 class="release-card__title">{title.clone()}</h3>
                {movie
                    .genres
                    .iter()
                    .map(|genre| view! { <span class="release-card__genre">{genre.clone()}</span> })
                    .collect::<Vec<_>>()}
            </div>
            <div class="release-card__overlay">
                <h4>{title}</h4>
                <p class="release-card__description">
                    {movie.overview.clone().unwrap_or_default()}
                </p>
            </div>
        </div>
    }
}
