use super::*;

fn config() -> ApiConfig {
    ApiConfig {
        auth_base: "http://auth".to_owned(),
        auth_users_path: "/api/v1.0/users".to_owned(),
        movie_base: "http://movies".to_owned(),
    }
}

#[test]
fn session_url_joins_base_and_users_path() {
    assert_eq!(config().session_url(), "http://auth/api/v1.0/users");
}

#[test]
fn login_url_appends_login() {
    assert_eq!(config().login_url(), "http://auth/login");
}

#[test]
fn movie_urls_include_id_and_suffix() {
    let c = config();
    assert_eq!(c.details_url("42"), "http://movies/api/v1.0/movies/tmdb/42");
    assert_eq!(
        c.watch_providers_url("42"),
        "http://movies/api/v1.0/movies/tmdb/42/watch-providers"
    );
    assert_eq!(
        c.reviews_url("42", "Heat"),
        "http://movies/api/v1.0/movies/tmdb/42/reviews?name=Heat"
    );
}

#[test]
fn search_url_carries_query() {
    assert_eq!(
        config().search_url("alien"),
        "http://movies/api/v1.0/movies/tmdb?q=alien"
    );
}

#[test]
fn reviews_url_escapes_the_movie_name() {
    // An unescaped '&' would split the name parameter at the endpoint.
    assert_eq!(
        config().reviews_url("42", "Fast & Furious"),
        "http://movies/api/v1.0/movies/tmdb/42/reviews?name=Fast%20%26%20Furious"
    );
}

#[test]
fn search_url_escapes_the_term() {
    assert_eq!(
        config().search_url("what if...?"),
        "http://movies/api/v1.0/movies/tmdb?q=what%20if...%3F"
    );
}
