//! Public landing page with a sign-in call to action.

use leptos::prelude::*;

const FEATURES: [(&str, &str); 4] = [
    (
        "Smart Recommendations",
        "Suggestions based on your viewing history. Discover your next favorite movie effortlessly.",
    ),
    (
        "Trending Content",
        "Stay up-to-date with what's hot. Daily new releases across all platforms.",
    ),
    (
        "Reviews & Ratings",
        "Read summarized reviews and join a community of film enthusiasts worldwide.",
    ),
    (
        "Streaming Availability",
        "See where every movie is available to stream, rent, or buy.",
    ),
];

/// Marketing page shown to signed-out users; the public fallback for the
/// route guard.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <nav class="landing__nav">
                <span class="landing__logo">"CineVerse"</span>
                <a class="landing__signin" href="/login">
                    "Sign In"
                </a>
            </nav>

            <header class="landing__hero">
                <h1 class="landing__title">"Your universe of movies"</h1>
                <p class="landing__subtitle">
                    "Track daily new releases, search across catalogs, and find where to watch."
                </p>
                <a class="landing__cta" href="/login">
                    "Get Started"
                </a>
            </header>

            <section class="landing__features">
                {FEATURES
                    .iter()
                    .map(|(title, text)| {
                        view! {
                            <div class="landing__feature">
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>
        </div>
    }
}
