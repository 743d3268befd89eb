//! Search results page rendering the shared search state.

use leptos::prelude::*;

use crate::components::movie_card::MovieCard;
use crate::state::search::SearchState;

/// Grid of search hits, or a placeholder when the last query came up empty.
#[component]
pub fn SearchResultsPage() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();

    move || {
        let results = search.with(|s| s.results.clone());
        if results.is_empty() {
            view! { <p class="search-results__empty">"No results found."</p> }.into_any()
        } else {
            view! {
                <div class="search-results__grid">
                    {results
                        .into_iter()
                        .map(|movie| view! { <MovieCard movie=movie/> })
                        .collect::<Vec<_>>()}
                </div>
            }
            .into_any()
        }
    }
}
