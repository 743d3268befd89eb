//! Dashboard page: daily new releases, search entry point, and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::guard::FALLBACK_ROUTE;
use crate::components::newly_released::NewlyReleased;
use crate::config::ApiConfig;
use crate::net::types::NewlyReleasedMovie;
use crate::state::search::SearchState;
use crate::state::session::SessionState;

/// Main authenticated view.
///
/// Fetches the daily new releases once on mount (a failed fetch leaves the
/// list unchanged), hosts the search box shared with the results page, and
/// offers logout. The logout button disables itself while logging out.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let session = expect_context::<RwSignal<SessionState>>();
    let search = expect_context::<RwSignal<SearchState>>();

    let navigate = use_navigate();

    let daily = RwSignal::new(Vec::<NewlyReleasedMovie>::new());

    #[cfg(feature = "hydrate")]
    {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            if let Some(results) = crate::net::api::fetch_daily_new(&config).await {
                daily.update(|list| list.extend(results));
            }
        });
    }

    let logging_out = RwSignal::new(false);
    let on_logout = {
        let navigate = navigate.clone();
        let config = config.clone();
        move |_| {
            if logging_out.get() {
                return;
            }
            logging_out.set(true);
            // Clearing the token may fail; the navigation happens regardless.
            let state = crate::net::api::browser_gate(&config).logout();
            session.set(state);
            navigate(FALLBACK_ROUTE, NavigateOptions::default());
        }
    };

    let on_search = {
        let navigate = navigate.clone();
        let config = config.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let term = search.with_untracked(|s| s.term.trim().to_owned());
            if term.is_empty() {
                return;
            }
            search.update(SearchState::clear_results);

            #[cfg(feature = "hydrate")]
            {
                let config = config.clone();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    let results = crate::net::api::search_movies(&config, &term).await;
                    search.update(|s| s.results = results);
                    navigate("/search", NavigateOptions::default());
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&config, &navigate);
            }
        }
    };

    let user_name = move || session.get().user().unwrap_or_default().to_owned();

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <span class="dashboard__brand">"Movie Discovery"</span>

                <form class="dashboard__search" on:submit=on_search>
                    <input
                        class="dashboard__search-input"
                        type="text"
                        placeholder="Search movies..."
                        prop:value=move || search.with(|s| s.term.clone())
                        on:input=move |ev| {
                            search.update(|s| s.term = event_target_value(&ev));
                        }
                    />
                </form>

                <div class="dashboard__user">
                    <span class="dashboard__user-name">{user_name}</span>
                    <button
                        class="dashboard__logout"
                        disabled=move || logging_out.get()
                        on:click=on_logout
                    >
                        {move || if logging_out.get() { "Logging out..." } else { "Logout" }}
                    </button>
                </div>
            </header>

            <main class="dashboard__main">
                <NewlyReleased movies=daily.into()/>
            </main>
        </div>
    }
}
