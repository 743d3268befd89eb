//! Movie details page: fan-in of metadata, watch providers, and reviews.

use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::config::ApiConfig;
use crate::state::details::MovieDetailsView;
use crate::net::types::MovieDetails;

const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

/// Detail view for one movie.
///
/// Issues the three fragment requests concurrently and renders whatever
/// succeeded; an unavailable fragment leaves its section empty instead of
/// failing the page. The movie title arrives as the `name` query parameter
/// and feeds the review-summary request.
#[component]
pub fn MovieDetailsPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let params = use_params_map();
    let query = use_query_map();

    let merged = RwSignal::new(None::<MovieDetailsView>);

    #[cfg(feature = "hydrate")]
    {
        let movie_id = params.read_untracked().get("id").unwrap_or_default();
        let movie_name = query.read_untracked().get("name").unwrap_or_default();
        leptos::task::spawn_local(async move {
            let view = crate::net::api::fetch_movie_details(&config, &movie_id, &movie_name).await;
            merged.set(Some(view));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (&config, &params, &query);
    }

    move || match merged.get() {
        None => view! { <p class="movie-details__loading">"Loading movie..."</p> }.into_any(),
        Some(model) => view! { <DetailsBody model=model/> }.into_any(),
    }
}

#[component]
fn DetailsBody(model: MovieDetailsView) -> impl IntoView {
    let providers: Vec<String> = model
        .us_flatrate()
        .iter()
        .map(|p| p.provider_name.clone())
        .collect();
    let reviews = model.reviews.clone();

    view! {
        <div class="movie-details">
            {model.movie.clone().map(|movie| view! { <Metadata movie=movie/> })}

            {if providers.is_empty() {
                view! { <p>"No streaming providers available in the US."</p> }.into_any()
            } else {
                view! {
                    <div class="movie-details__providers">
                        <h3>"Available for streaming on:"</h3>
                        {providers
                            .into_iter()
                            .map(|name| view! { <p class="movie-details__provider">{name}</p> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any()
            }}

            {(!reviews.is_empty())
                .then(|| view! { <p class="movie-details__reviews">{reviews}</p> })}
        </div>
    }
}

#[component]
fn Metadata(movie: MovieDetails) -> impl IntoView {
    let genres = movie
        .genres
        .iter()
        .map(|g| g.name.clone())
        .collect::<Vec<_>>()
        .join(", ");
    let companies = movie
        .production_companies
        .iter()
        .map(|c| c.name.clone())
        .collect::<Vec<_>>()
        .join(", ");
    let poster = movie
        .poster_path
        .as_ref()
        .map(|path| format!("{TMDB_IMAGE_BASE}{path}"));

    view! {
        <div class="movie-details__metadata">
            {poster.map(|src| view! { <img class="movie-details__poster" src=src alt=movie.title.clone()/> })}
            <h1 class="movie-details__title">{movie.title.clone()}</h1>
            <p>
                <span class="movie-details__label">"Release Date: "</span>
                {movie.release_date.clone().unwrap_or_default()}
            </p>
            {movie.tagline.clone().filter(|t| !t.is_empty()).map(|tagline| {
                view! { <p class="movie-details__tagline">{tagline}</p> }
            })}
            <p class="movie-details__overview">{movie.overview.clone().unwrap_or_default()}</p>
            <p>
                <span class="movie-details__label">"Genres: "</span>
                {genres}
            </p>
            <p>
                <span class="movie-details__label">"Runtime: "</span>
                {format!("{} minutes", movie.runtime.unwrap_or_default())}
            </p>
            <p>
                <span class="movie-details__label">"Rating: "</span>
                {movie.vote_average.unwrap_or_default().to_string()}
            </p>
            <p>
                <span class="movie-details__label">"Budget: "</span>
                {format!("${}", movie.budget.unwrap_or_default())}
            </p>
            <p>
                <span class="movie-details__label">"Box Office: "</span>
                {format!("${}", movie.revenue.unwrap_or_default())}
            </p>
            <p>
                <span class="movie-details__label">"Production Companies: "</span>
                {companies}
            </p>
        </div>
    }
}
