//! Route guard consuming the session gate.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::SessionState;
use crate::util::urlenc;

/// Public route an unauthenticated user is sent to.
pub const FALLBACK_ROUTE: &str = "/landing";

/// Fallback URL carrying the originally requested path, escaped, as the
/// `from` query parameter.
fn redirect_target(from: &str) -> String {
    format!("{FALLBACK_ROUTE}?from={}", urlenc::encode(from))
}

/// Wraps protected content behind the session state.
///
/// While the session is `Pending` this renders a neutral placeholder; the
/// protected children never flash before the probe resolves. Once resolved,
/// `Authenticated` renders the children and `Unauthenticated` redirects to
/// [`FALLBACK_ROUTE`], carrying the originally requested path as a `from`
/// query parameter so a future login could return the user there.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        if session.get() == SessionState::Unauthenticated {
            let from = location.pathname.get_untracked();
            navigate(
                &redirect_target(&from),
                NavigateOptions { replace: true, ..NavigateOptions::default() },
            );
        }
    });

    move || match session.get() {
        SessionState::Pending => view! {
            <div class="session-check">
                <div class="session-check__spinner"></div>
                "Checking authentication..."
            </div>
        }
        .into_any(),
        SessionState::Authenticated { .. } => children().into_any(),
        // The redirect effect above is already navigating away.
        SessionState::Unauthenticated => ().into_any(),
    }
}
