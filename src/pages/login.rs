//! Login page: credential form backed by the session gate.

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::state::session::SessionState;

#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Username/password form with inline error and success banners.
///
/// The submit button disables itself while a login is pending, so logins are
/// serialized; failures surface as banner text, never as an unhandled error.
/// If a stored token still resolves to a session, the page skips straight to
/// the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let session = expect_context::<RwSignal<SessionState>>();

    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);
    let success = RwSignal::new(None::<&'static str>);

    // An existing session short-circuits the form.
    #[cfg(feature = "hydrate")]
    {
        let config = config.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if crate::net::api::session_exists(&config).await {
                navigate("/dashboard", NavigateOptions::default());
            }
        });
    }

    let form_valid = move || !username.get().trim().is_empty() && password.get().len() >= 6;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() || !form_valid() {
            return;
        }
        pending.set(true);
        error.set(None);
        success.set(None);

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let gate = crate::net::api::browser_gate(&config);
                let outcome = gate.login(&username.get_untracked(), &password.get_untracked()).await;
                match outcome {
                    crate::state::session::LoginOutcome::Success { user } => {
                        session.set(SessionState::Authenticated { user });
                        success.set(Some("Login successful! Redirecting..."));
                        gloo_timers::future::sleep(std::time::Duration::from_millis(1500)).await;
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    other => {
                        error.set(other.message());
                        pending.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, &navigate, &session);
        }
    };

    view! {
        <div class="login">
            <div class="login__card">
                <h1 class="login__title">"Welcome Back"</h1>
                <p class="login__subtitle">"Sign in to access your dashboard"</p>

                <form class="login__form" on:submit=on_submit>
                    <label class="login__label">
                        "Username"
                        <input
                            class="login__input"
                            type="text"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| {
                                username.set(event_target_value(&ev));
                                error.set(None);
                            }
                        />
                    </label>

                    <label class="login__label">
                        "Password"
                        <input
                            class="login__input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                error.set(None);
                            }
                        />
                    </label>

                    {move || {
                        error
                            .get()
                            .map(|message| {
                                view! { <div class="login__banner login__banner--error">{message}</div> }
                            })
                    }}
                    {move || {
                        success
                            .get()
                            .map(|message| {
                                view! { <div class="login__banner login__banner--success">{message}</div> }
                            })
                    }}

                    <button
                        class="login__submit"
                        type="submit"
                        disabled=move || pending.get() || !form_valid()
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
