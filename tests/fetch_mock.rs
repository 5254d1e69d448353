//! Fetch path tests against a local mock server; no live API access needed.

use httpmock::prelude::*;
use randomuser_rs::Client;
use randomuser_rs::api::FetchError;
use serde_json::json;

fn user_json(first: &str, last: &str, age: u32, gender: &str, country: &str) -> serde_json::Value {
    json!({
        "gender": gender,
        "name": {"title": "Ms", "first": first, "last": last},
        "location": {
            "street": {"number": 42, "name": "Main St"},
            "city": "Springfield",
            "country": country
        },
        "email": format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        "dob": {"date": "1990-01-01T00:00:00.000Z", "age": age},
        "phone": "555-0100",
        "picture": {"large": "https://example.com/p.jpg"},
        "nat": "US"
    })
}

#[test]
fn fetch_returns_one_flat_record_per_result() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/").query_param("results", "3");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"results": [
                user_json("Ada", "Lovelace", 36, "female", "United Kingdom"),
                user_json("Grace", "Hopper", 85, "female", "United States"),
                user_json("Alan", "Turing", 41, "male", "United Kingdom"),
            ]}));
    });

    let client = Client::with_base_url(server.base_url());
    let users = client.fetch(3).unwrap();
    mock.assert();

    assert_eq!(users.len(), 3);
    assert_eq!(users[0].full_name, "Ada Lovelace");
    assert_eq!(users[0].street, "42 Main St");
    assert!(users.iter().all(|u| !u.email.is_empty()));
}

#[test]
fn non_success_status_is_an_http_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/");
        then.status(503);
    });

    let client = Client::with_base_url(server.base_url());
    let err = client.fetch(5).unwrap_err();
    assert!(matches!(err, FetchError::Http(_)), "got: {err:?}");
}

#[test]
fn connection_refused_is_an_http_error() {
    // Nothing listens on this port.
    let client = Client::with_base_url("http://127.0.0.1:9");
    let err = client.fetch(5).unwrap_err();
    assert!(matches!(err, FetchError::Http(_)), "got: {err:?}");
}

#[test]
fn malformed_body_is_a_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"results": [{"gender": "female"}]}));
    });

    let client = Client::with_base_url(server.base_url());
    let err = client.fetch(1).unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)), "got: {err:?}");
}
