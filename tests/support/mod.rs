//! Shared fixtures for integration tests: mock PokéAPI payloads and mounts.

#![allow(dead_code)]

use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pokeharvest_core::PokeApiClient;

/// Path of the listing resource on the mock server.
pub const LISTING_PATH: &str = "/api/v2/pokemon";

/// Builds a client whose listing endpoint points at the mock server.
pub fn client_for(server: &MockServer) -> PokeApiClient {
    let endpoint = Url::parse(&format!("{}{LISTING_PATH}", server.uri())).unwrap();
    PokeApiClient::with_endpoint(endpoint, 5)
}

/// Builds an endpoint URL on a port nothing is listening on.
///
/// Binding then dropping a listener yields a port that refuses connections.
pub fn refused_endpoint() -> Url {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    Url::parse(&format!("http://127.0.0.1:{port}{LISTING_PATH}")).unwrap()
}

/// Builds a listing body whose detail URLs point at `base_uri`.
pub fn listing_json(base_uri: &str, names: &[&str]) -> serde_json::Value {
    json!({
        "count": names.len(),
        "next": null,
        "previous": null,
        "results": names
            .iter()
            .map(|name| json!({
                "name": name,
                "url": format!("{base_uri}{LISTING_PATH}/{name}")
            }))
            .collect::<Vec<_>>()
    })
}

/// Builds a detail body with the given types and six positional stats.
pub fn detail_json(
    id: u32,
    name: &str,
    types: &[&str],
    stats: [u32; 6],
    sprite: Option<&str>,
) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "base_experience": 64,
        "types": types
            .iter()
            .enumerate()
            .map(|(index, type_name)| json!({
                "slot": index + 1,
                "type": {"name": type_name, "url": "https://pokeapi.co/api/v2/type/1/"}
            }))
            .collect::<Vec<_>>(),
        "sprites": {"front_default": sprite},
        "stats": stats
            .iter()
            .map(|value| json!({
                "base_stat": value,
                "effort": 0,
                "stat": {"name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/"}
            }))
            .collect::<Vec<_>>()
    })
}

/// Mounts the listing resource, responding to the given `limit` parameter.
pub async fn mount_listing(server: &MockServer, limit: u32, names: &[&str]) {
    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .and(query_param("limit", limit.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_json(&server.uri(), names)))
        .mount(server)
        .await;
}

/// Mounts a detail resource returning the given body.
pub async fn mount_detail(server: &MockServer, name: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("{LISTING_PATH}/{name}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mounts a detail resource returning a bare status code.
pub async fn mount_detail_status(server: &MockServer, name: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("{LISTING_PATH}/{name}")))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
