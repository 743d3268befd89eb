//! Session gate: the authentication state machine behind the route guard.
//!
//! STATE MACHINE
//! =============
//! `Pending` (initial on every full load) resolves to `Authenticated` or
//! `Unauthenticated` by probing the auth service; it re-enters `Pending` only
//! on an explicit re-check. Guarded routes render nothing protected until the
//! probe has run to completion, so an unauthenticated user never sees a flash
//! of protected content.
//!
//! The flows are written against the [`AuthBackend`] and
//! [`TokenStore`](crate::util::token::TokenStore) seams; the browser
//! implementations live in `net::api` and `util::token`, and tests drive the
//! same code with mocks.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::token::TokenStore;

/// Process-wide authentication state. Exactly one variant holds at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Pending,
    Authenticated {
        user: String,
    },
    Unauthenticated,
}

impl SessionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Display name of the authenticated user, if any.
    pub fn user(&self) -> Option<&str> {
        match self {
            Self::Authenticated { user } => Some(user),
            Self::Pending | Self::Unauthenticated => None,
        }
    }
}

/// Raw reply from an auth endpoint, before interpretation.
#[derive(Clone, Debug)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The two auth-service calls the gate depends on.
///
/// `probe` hits the identity endpoint with the stored token (if any);
/// `login` posts credentials. Transport failures surface as `Err`.
// Single-threaded wasm target; callers never need Send futures.
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    async fn probe(&self, token: Option<&str>) -> Result<HttpReply, String>;
    async fn login(&self, username: &str, password: &str) -> Result<HttpReply, String>;
}

/// Result of a login attempt, reported as a value rather than an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Success { user: String },
    InvalidCredentials,
    AccountLocked,
    MissingToken,
    Rejected,
    NetworkError,
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Inline banner text for the login form; `None` on success.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Success { .. } => None,
            Self::InvalidCredentials => Some("Invalid username or password"),
            Self::AccountLocked => Some("Account is disabled or locked"),
            Self::MissingToken => Some("Login succeeded but token was not provided"),
            Self::Rejected => Some("Login failed. Please try again."),
            Self::NetworkError => Some("Network error. Please check your connection."),
        }
    }
}

/// Shape of a successful login response body.
#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// The session gate: auth backend plus token store.
///
/// Constructed explicitly at the call site (no module globals) so the
/// flows stay testable and the token store can be swapped.
pub struct SessionGate<B, S> {
    backend: B,
    store: S,
}

impl<B: AuthBackend, S: TokenStore> SessionGate<B, S> {
    pub fn new(backend: B, store: S) -> Self {
        Self { backend, store }
    }

    /// Probe the auth service and resolve the session.
    ///
    /// A 2xx reply with a non-empty identity body authenticates; any other
    /// status, an empty body, or a transport failure resolves to
    /// `Unauthenticated`. Never leaves the session `Pending`.
    pub async fn check_session(&self) -> SessionState {
        let token = self.store.get();
        match self.backend.probe(token.as_deref()).await {
            Ok(reply) if reply.ok() && !reply.body.is_empty() => {
                SessionState::Authenticated { user: reply.body }
            }
            Ok(reply) => {
                log::info!("session probe rejected with status {}", reply.status);
                SessionState::Unauthenticated
            }
            Err(err) => {
                log::warn!("session probe failed: {err}");
                SessionState::Unauthenticated
            }
        }
    }

    /// Post credentials, persist the returned token, and re-probe.
    ///
    /// Success is reported only when the token round-trips: the login reply
    /// carries a non-empty `access_token` and the follow-up probe lands in
    /// `Authenticated`. Every failure path returns an outcome value; nothing
    /// here propagates an error to the caller.
    pub async fn login(&self, username: &str, password: &str) -> LoginOutcome {
        let reply = match self.backend.login(username, password).await {
            Ok(reply) => reply,
            Err(err) => {
                log::warn!("login request failed: {err}");
                return LoginOutcome::NetworkError;
            }
        };

        if !reply.ok() {
            return match reply.status {
                401 => LoginOutcome::InvalidCredentials,
                403 => LoginOutcome::AccountLocked,
                _ => LoginOutcome::Rejected,
            };
        }

        let token = serde_json::from_str::<TokenResponse>(&reply.body)
            .ok()
            .and_then(|body| body.access_token)
            .filter(|token| !token.is_empty());
        let Some(token) = token else {
            return LoginOutcome::MissingToken;
        };

        if let Err(err) = self.store.set(&token) {
            log::warn!("failed to persist access token: {err}");
            return LoginOutcome::Rejected;
        }

        match self.check_session().await {
            SessionState::Authenticated { user } => LoginOutcome::Success { user },
            _ => LoginOutcome::Rejected,
        }
    }

    /// Erase the token and force `Unauthenticated`.
    ///
    /// A storage failure is logged and ignored: the caller navigates to the
    /// public landing view regardless, so a stale token can never pin the
    /// user on a protected view.
    pub fn logout(&self) -> SessionState {
        if let Err(err) = self.store.clear() {
            log::warn!("failed to clear access token: {err}");
        }
        SessionState::Unauthenticated
    }
}
