//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::guard::Protected;
use crate::config::ApiConfig;
use crate::pages::{
    dashboard::DashboardPage, landing::LandingPage, login::LoginPage,
    movie_details::MovieDetailsPage, search::SearchResultsPage,
};
use crate::state::search::SearchState;
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the service config and the shared session/search state, provides
/// them as contexts, and sets up client-side routing with the session gate
/// wrapped around every protected route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::default();
    let session = RwSignal::new(SessionState::default());
    let search = RwSignal::new(SearchState::default());

    provide_context(config.clone());
    provide_context(session);
    provide_context(search);

    // Resolve the session once at startup. Guarded routes hold their
    // placeholder until this lands, so protected content never flashes.
    #[cfg(feature = "hydrate")]
    {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let state = crate::net::api::browser_gate(&config).check_session().await;
            session.set(state);
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/cineverse.css"/>
        <Title text="CineVerse"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/landing"/> }/>
                <Route path=StaticSegment("landing") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <Protected><DashboardPage/></Protected> }
                />
                <Route
                    path=StaticSegment("search")
                    view=|| view! { <Protected><SearchResultsPage/></Protected> }
                />
                <Route
                    path=(StaticSegment("movie"), ParamSegment("id"))
                    view=|| view! { <Protected><MovieDetailsPage/></Protected> }
                />
            </Routes>
        </Router>
    }
}
