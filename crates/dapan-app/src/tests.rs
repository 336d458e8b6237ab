use rocket::http::Status;
use rocket::local::blocking::Client;

// The route table is exercised without a backend running: handlers render
// each view's failure state, so resolution and view props stay observable.

fn client() -> Client {
    Client::tracked(super::rocket()).expect("valid rocket instance")
}

#[test]
fn route_table_resolves_every_view() {
    let client = client();
    for path in ["/", "/market-stats", "/high-rise-stocks", "/stock-check"] {
        let response = client.get(path).dispatch();
        assert_eq!(response.status(), Status::Ok, "{path}");
    }
}

#[test]
fn detail_view_receives_the_path_code() {
    let client = client();
    let response = client.get("/stock/600000.SH").dispatch();
    assert_eq!(response.status(), Status::Ok);
    let body = response.into_string().expect("rendered body");
    assert!(body.contains("600000.SH"));
}

#[test]
fn check_view_echoes_the_queried_code() {
    let client = client();
    let response = client.get("/stock-check?code=000001.SZ").dispatch();
    assert_eq!(response.status(), Status::Ok);
    let body = response.into_string().expect("rendered body");
    assert!(body.contains("000001.SZ"));
}

#[test]
fn unknown_paths_are_not_routed() {
    let client = client();
    let response = client.get("/no-such-view").dispatch();
    assert_eq!(response.status(), Status::NotFound);
}

#[test]
fn refresh_actions_redirect_to_their_view() {
    let client = client();
    for (action, view) in [
        ("/market-stats/refresh", "/market-stats"),
        ("/high-rise-stocks/refresh", "/high-rise-stocks"),
        ("/rise-fall/refresh", "/market-stats"),
        ("/market-analysis/refresh", "/market-stats"),
    ] {
        let response = client.post(action).dispatch();
        assert_eq!(response.status(), Status::SeeOther, "{action}");
        assert_eq!(response.headers().get_one("Location"), Some(view), "{action}");
    }
}

#[test]
fn layout_carries_the_icon_set() {
    let client = client();
    let body = client
        .get("/")
        .dispatch()
        .into_string()
        .expect("rendered body");
    assert!(body.contains("<svg"));
}
