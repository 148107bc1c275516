//! Upstream client tests against a local mock server.

mod common;

use pokedex_sdk::models::{RawPokemon, RawType};
use pokedex_sdk::{PokedexError, ResourceKind, UpstreamClient};
use serde_json::json;
use std::time::Duration;

fn client_for(server: &mockito::Server) -> UpstreamClient {
    UpstreamClient::new(&server.url(), Duration::from_secs(5)).unwrap()
}

// ---------------------------------------------------------------------------
// URLs
// ---------------------------------------------------------------------------

#[test]
fn resource_kind_paths() {
    assert_eq!(ResourceKind::Pokemon.path(), "pokemon");
    assert_eq!(ResourceKind::Species.path(), "pokemon-species");
    assert_eq!(ResourceKind::EvolutionChain.path(), "evolution-chain");
    assert_eq!(ResourceKind::Type.path(), "type");
}

#[test]
fn resource_url_strips_trailing_slash_from_base() {
    let client = UpstreamClient::new("https://pokeapi.co/api/v2/", Duration::from_secs(1)).unwrap();
    assert_eq!(
        client.resource_url(ResourceKind::Species, "25"),
        "https://pokeapi.co/api/v2/pokemon-species/25"
    );
}

// ---------------------------------------------------------------------------
// fetch
// ---------------------------------------------------------------------------

#[test]
fn fetch_decodes_pokemon() {
    let mut server = mockito::Server::new();
    let mock = common::mock_pokemon(&mut server, 25, "pikachu", &["electric"]);
    let client = client_for(&server);

    let raw: RawPokemon = client.fetch(ResourceKind::Pokemon, "25").unwrap();
    assert_eq!(raw.id, 25);
    assert_eq!(raw.name, "pikachu");
    assert_eq!(raw.types[0].type_ref.name, "electric");
    assert_eq!(raw.stats.len(), 6);
    mock.assert();
}

#[test]
fn fetch_non_success_is_upstream_error() {
    let mut server = mockito::Server::new();
    let _m = common::mock_status(&mut server, "/pokemon/9999", 404);
    let client = client_for(&server);

    let err = client
        .fetch::<RawPokemon>(ResourceKind::Pokemon, "9999")
        .unwrap_err();
    match &err {
        PokedexError::Upstream { status, reason, url } => {
            assert_eq!(*status, 404);
            assert_eq!(reason, "Not Found");
            assert!(url.ends_with("/pokemon/9999"));
        }
        other => panic!("expected Upstream, got {other:?}"),
    }
    assert_eq!(err.status(), Some(404));
}

#[test]
fn fetch_unexpected_shape_is_malformed() {
    let mut server = mockito::Server::new();
    let _m = common::mock_json(&mut server, "/type/fire", &json!({ "id": "not-a-number" }));
    let client = client_for(&server);

    let err = client.fetch::<RawType>(ResourceKind::Type, "fire").unwrap_err();
    assert!(matches!(err, PokedexError::Malformed(_)));
}

#[test]
fn fetch_invalid_json_is_malformed() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/pokemon/1")
        .with_status(200)
        .with_body("<html>oops</html>")
        .create();
    let client = client_for(&server);

    let err = client.fetch::<RawPokemon>(ResourceKind::Pokemon, "1").unwrap_err();
    assert!(matches!(err, PokedexError::Malformed(_)));
}

// ---------------------------------------------------------------------------
// fetch_list
// ---------------------------------------------------------------------------

#[test]
fn fetch_list_sends_limit_and_offset() {
    let mut server = mockito::Server::new();
    let body = common::list_json(1302, &server.url(), &[(21, "spearow"), (22, "fearow")]);
    let mock = server
        .mock("GET", "/pokemon")
        .match_query(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("limit".into(), "2".into()),
            mockito::Matcher::UrlEncoded("offset".into(), "20".into()),
        ]))
        .with_status(200)
        .with_body(body.to_string())
        .create();
    let client = client_for(&server);

    let page = client.fetch_list(2, 20).unwrap();
    assert_eq!(page.count, 1302);
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[1].name, "fearow");
    assert_eq!(page.results[1].id(), Some(22));
    mock.assert();
}
