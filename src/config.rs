//! Service endpoint configuration.
//!
//! The auth and movie services live at deployment-specific base URLs, so the
//! bases are compile-time environment variables with localhost defaults for
//! development. The config is built once in `App` and provided as context;
//! nothing else reads the environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::util::urlenc;

/// Base URLs and paths for the external auth and movie services.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub auth_base: String,
    pub auth_users_path: String,
    pub movie_base: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            auth_base: option_env!("CINEVERSE_AUTH_BASE")
                .unwrap_or("http://localhost:8081")
                .to_owned(),
            auth_users_path: option_env!("CINEVERSE_AUTH_USERS_PATH")
                .unwrap_or("/api/v1.0/users")
                .to_owned(),
            movie_base: option_env!("CINEVERSE_MOVIE_BASE")
                .unwrap_or("http://localhost:8082")
                .to_owned(),
        }
    }
}

impl ApiConfig {
    /// Probe endpoint for the app-wide session check.
    pub fn probe_url(&self) -> String {
        self.auth_base.clone()
    }

    /// Identity endpoint probed by the login page for an existing session.
    pub fn session_url(&self) -> String {
        format!("{}{}", self.auth_base, self.auth_users_path)
    }

    pub fn login_url(&self) -> String {
        format!("{}/login", self.auth_base)
    }

    pub fn daily_new_url(&self) -> String {
        format!("{}/api/v1.0/movies/daily-new", self.movie_base)
    }

    pub fn search_url(&self, term: &str) -> String {
        format!(
            "{}/api/v1.0/movies/tmdb?q={}",
            self.movie_base,
            urlenc::encode(term)
        )
    }

    pub fn details_url(&self, movie_id: &str) -> String {
        format!("{}/api/v1.0/movies/tmdb/{movie_id}", self.movie_base)
    }

    pub fn watch_providers_url(&self, movie_id: &str) -> String {
        format!(
            "{}/api/v1.0/movies/tmdb/{movie_id}/watch-providers",
            self.movie_base
        )
    }

    pub fn reviews_url(&self, movie_id: &str, movie_name: &str) -> String {
        format!(
            "{}/api/v1.0/movies/tmdb/{movie_id}/reviews?name={}",
            self.movie_base,
            urlenc::encode(movie_name)
        )
    }
}
