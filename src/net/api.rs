//! Typed API calls against the auth and movie services.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/empty since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/value outputs instead of panics so fetch failures
//! degrade the view (list unchanged, empty results, default details slice)
//! without crashing hydration.

#![allow(clippy::unused_async)]

use crate::config::ApiConfig;
use crate::state::details::MovieDetailsView;
use crate::state::session::{AuthBackend, HttpReply, SessionGate};
use crate::util::token::BrowserTokens;

#[cfg(feature = "hydrate")]
use crate::net::fetch::bearer_get;
use crate::net::fetch::Descriptor;
use crate::net::types::{MovieSearchResult, NewlyReleasedMovie};
#[cfg(feature = "hydrate")]
use crate::net::types::{MovieSearchResponse, NewlyReleasedMoviesResponse};

/// [`AuthBackend`] speaking HTTP to the auth service.
#[derive(Clone, Debug)]
pub struct HttpAuth {
    config: ApiConfig,
}

impl AuthBackend for HttpAuth {
    async fn probe(&self, token: Option<&str>) -> Result<HttpReply, String> {
        #[cfg(feature = "hydrate")]
        {
            let mut request = gloo_net::http::Request::get(&self.config.probe_url());
            if let Some(token) = token {
                request = request.header("Authorization", &format!("Bearer {token}"));
            }
            let response = request.send().await.map_err(|e| e.to_string())?;
            let status = response.status();
            let body = response.text().await.map_err(|e| e.to_string())?;
            Ok(HttpReply { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err("not available on server".to_owned())
        }
    }

    async fn login(&self, username: &str, password: &str) -> Result<HttpReply, String> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({
                "username": username,
                "password": password,
            });
            let response = gloo_net::http::Request::post(&self.config.login_url())
                .json(&payload)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Ok(HttpReply { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username, password);
            Err("not available on server".to_owned())
        }
    }
}

/// Session gate wired to the browser: HTTP auth backend + localStorage.
pub fn browser_gate(config: &ApiConfig) -> SessionGate<HttpAuth, BrowserTokens> {
    SessionGate::new(HttpAuth { config: config.clone() }, BrowserTokens)
}

/// Probe the identity endpoint for an existing session.
///
/// Used by the login page to skip the form when the stored token is still
/// good. Failures are silent; the form simply stays up.
pub async fn session_exists(config: &ApiConfig) -> bool {
    #[cfg(feature = "hydrate")]
    {
        match bearer_get(&config.session_url()).send().await {
            Ok(response) if response.ok() => {
                response.text().await.is_ok_and(|body| !body.is_empty())
            }
            Ok(_) => false,
            Err(err) => {
                leptos::logging::warn!("error retrieving session: {err}");
                false
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        false
    }
}

/// Fetch today's newly released movies.
///
/// Returns `None` on any failure so the caller leaves its list unchanged.
pub async fn fetch_daily_new(config: &ApiConfig) -> Option<Vec<NewlyReleasedMovie>> {
    #[cfg(feature = "hydrate")]
    {
        let response = bearer_get(&config.daily_new_url())
            .send()
            .await
            .inspect_err(|err| leptos::logging::warn!("daily-new fetch failed: {err}"))
            .ok()?;
        if !response.ok() {
            leptos::logging::warn!("daily-new fetch returned {}", response.status());
            return None;
        }
        response
            .json::<NewlyReleasedMoviesResponse>()
            .await
            .inspect_err(|err| leptos::logging::warn!("daily-new decode failed: {err}"))
            .ok()
            .map(|payload| payload.results)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        None
    }
}

/// Query the movie search endpoint. Failures yield an empty result list.
pub async fn search_movies(config: &ApiConfig, term: &str) -> Vec<MovieSearchResult> {
    #[cfg(feature = "hydrate")]
    {
        let response = match bearer_get(&config.search_url(term)).send().await {
            Ok(response) if response.ok() => response,
            Ok(response) => {
                leptos::logging::warn!("search returned {}", response.status());
                return Vec::new();
            }
            Err(err) => {
                leptos::logging::warn!("search error: {err}");
                return Vec::new();
            }
        };
        match response.json::<MovieSearchResponse>().await {
            Ok(payload) => payload.results,
            Err(err) => {
                leptos::logging::warn!("search decode failed: {err}");
                Vec::new()
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, term);
        Vec::new()
    }
}

/// Fan out the three movie-details requests and merge the outcomes.
///
/// Each fragment is independently nullable; the merged view renders with
/// whatever succeeded.
pub async fn fetch_movie_details(
    config: &ApiConfig,
    movie_id: &str,
    movie_name: &str,
) -> MovieDetailsView {
    let descriptors = vec![
        Descriptor::json(config.details_url(movie_id)),
        Descriptor::json(config.watch_providers_url(movie_id)),
        Descriptor::text(config.reviews_url(movie_id, movie_name)),
    ];
    #[cfg(feature = "hydrate")]
    {
        let fragments = crate::net::fetch::fetch_all(descriptors).await;
        MovieDetailsView::from_fragments(&fragments)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = descriptors;
        MovieDetailsView::default()
    }
}
