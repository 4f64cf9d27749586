//! Shared mock Reqres server for integration tests.

#![allow(dead_code)]

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use userdata_report::constants::USERS_BASE_PATH;
use userdata_report::mock;

/// Answers every listing request with the dispatcher payload for its
/// `page` query parameter. Always HTTP 200.
pub struct ListingResponder;

impl Respond for ListingResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(mock::page_payload_from_query(request.url.query()))
    }
}

/// Start a server that serves the dispatcher at `/api/users`.
pub async fn mock_reqres() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(USERS_BASE_PATH))
        .respond_with(ListingResponder)
        .mount(&server)
        .await;
    server
}

/// Start a server whose `/api/users` always answers with `status`.
pub async fn failing_reqres(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(USERS_BASE_PATH))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;
    server
}

/// Listing URL on `server`, with an optional raw query.
pub fn users_url(server: &MockServer, query: Option<&str>) -> String {
    match query {
        Some(q) => format!("{}{}?{}", server.uri(), USERS_BASE_PATH, q),
        None => format!("{}{}", server.uri(), USERS_BASE_PATH),
    }
}

/// GET the listing and decode the body as JSON.
pub async fn get_json(server: &MockServer, query: Option<&str>) -> serde_json::Value {
    reqwest::get(users_url(server, query))
        .await
        .expect("request should reach the mock server")
        .json()
        .await
        .expect("body should be JSON")
}
