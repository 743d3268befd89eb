//! Partial-failure fan-in fetch.
//!
//! Detail-style views assemble themselves from several independent resources.
//! Each resource is described by a [`Descriptor`]; all descriptors are issued
//! concurrently and every outcome is observed before the caller merges. A
//! failed fragment (non-2xx, transport error, decode error) is logged and
//! collapsed to [`Fragment::Unavailable`] so one bad endpoint never voids the
//! whole view.
//!
//! The HTTP leg requires a browser (`hydrate`); the join and the fragment
//! model are plain logic and unit-tested natively.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use std::future::Future;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure of a single fragment fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed body: {0}")]
    Decode(String),
}

/// How a fragment body is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseMode {
    Json,
    Text,
}

/// One resource in a fan-out: where to fetch and how to parse.
#[derive(Clone, Debug)]
pub struct Descriptor {
    pub url: String,
    pub parse: ParseMode,
}

impl Descriptor {
    pub fn json(url: String) -> Self {
        Self { url, parse: ParseMode::Json }
    }

    pub fn text(url: String) -> Self {
        Self { url, parse: ParseMode::Text }
    }
}

/// Outcome of one fragment fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum Fragment {
    Json(serde_json::Value),
    Text(String),
    Unavailable,
}

impl Fragment {
    /// Decode a JSON fragment into a typed value.
    ///
    /// Returns `None` for text/unavailable fragments and for JSON that does
    /// not match `T`; a shape mismatch degrades like any other failure.
    pub fn decode<T: DeserializeOwned>(&self) -> Option<T> {
        match self {
            Self::Json(value) => match serde_json::from_value(value.clone()) {
                Ok(decoded) => Some(decoded),
                Err(err) => {
                    log::warn!("fragment decode failed: {err}");
                    None
                }
            },
            Self::Text(_) | Self::Unavailable => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(body) => Some(body),
            Self::Json(_) | Self::Unavailable => None,
        }
    }
}

/// Await every fragment future, converting failures into `Unavailable`.
///
/// All futures run to completion; a failure neither cancels the others nor
/// rejects the aggregate. Outcomes come back in descriptor order regardless
/// of completion order.
pub async fn join_fragments<F>(fragments: Vec<F>) -> Vec<Fragment>
where
    F: Future<Output = Result<Fragment, FetchError>>,
{
    futures::future::join_all(fragments)
        .await
        .into_iter()
        .enumerate()
        .map(|(index, outcome)| match outcome {
            Ok(fragment) => fragment,
            Err(err) => {
                log::warn!("fragment {index} unavailable: {err}");
                Fragment::Unavailable
            }
        })
        .collect()
}

/// Fetch all descriptors concurrently with the current bearer token.
///
/// The token is read fresh from storage for each call, not cached from a
/// prior render.
#[cfg(feature = "hydrate")]
pub async fn fetch_all(descriptors: Vec<Descriptor>) -> Vec<Fragment> {
    let requests: Vec<_> = descriptors.into_iter().map(fetch_one).collect();
    join_fragments(requests).await
}

#[cfg(feature = "hydrate")]
async fn fetch_one(descriptor: Descriptor) -> Result<Fragment, FetchError> {
    let response = bearer_get(&descriptor.url)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }
    match descriptor.parse {
        ParseMode::Json => response
            .json::<serde_json::Value>()
            .await
            .map(Fragment::Json)
            .map_err(|e| FetchError::Decode(e.to_string())),
        ParseMode::Text => response
            .text()
            .await
            .map(Fragment::Text)
            .map_err(|e| FetchError::Decode(e.to_string())),
    }
}

/// GET request builder carrying the stored bearer token when present.
#[cfg(feature = "hydrate")]
pub fn bearer_get(url: &str) -> gloo_net::http::RequestBuilder {
    let request = gloo_net::http::Request::get(url);
    match crate::util::token::read() {
        Some(token) => request.header("Authorization", &format!("Bearer {token}")),
        None => request,
    }
}
