//! Shared test fixtures for the Pokedex SDK integration tests.
//!
//! Provides JSON builders shaped like PokeAPI responses, helpers that
//! register them on a local `mockito` server, and `setup_sdk()` which points
//! an SDK at that server.

#![allow(dead_code)]

use mockito::{Mock, Server, ServerGuard};
use pokedex_sdk::models::{Card, CardStat};
use pokedex_sdk::PokedexSdk;
use serde_json::{json, Value};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::fmt::MakeWriter;

/// Start a mock server and an SDK pointed at it.
///
/// The caller must keep the `ServerGuard` alive for the duration of the test.
pub fn setup_sdk() -> (PokedexSdk, ServerGuard) {
    let server = Server::new();
    let sdk = PokedexSdk::builder()
        .base_url(server.url())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    (sdk, server)
}

// ---------------------------------------------------------------------------
// JSON builders
// ---------------------------------------------------------------------------

/// Standard six stats in upstream order with the given base values.
pub fn stats_json(values: [u32; 6]) -> Value {
    let names = [
        "hp",
        "attack",
        "defense",
        "special-attack",
        "special-defense",
        "speed",
    ];
    Value::Array(
        names
            .iter()
            .zip(values.iter())
            .enumerate()
            .map(|(i, (name, value))| {
                json!({
                    "base_stat": value,
                    "effort": 0,
                    "stat": {
                        "name": name,
                        "url": format!("https://pokeapi.co/api/v2/stat/{}/", i + 1)
                    }
                })
            })
            .collect(),
    )
}

pub fn types_json(types: &[&str]) -> Value {
    Value::Array(
        types
            .iter()
            .enumerate()
            .map(|(i, t)| {
                json!({
                    "slot": i + 1,
                    "type": { "name": t, "url": format!("https://pokeapi.co/api/v2/type/{}/", t) }
                })
            })
            .collect(),
    )
}

/// A `/pokemon/{id}` body with official artwork and a front sprite.
pub fn pokemon_json(id: u32, name: &str, types: &[&str]) -> Value {
    pokemon_json_with_sprites(
        id,
        name,
        types,
        Some(&format!("https://img.example/artwork/{}.png", id)),
        Some(&format!("https://img.example/front/{}.png", id)),
    )
}

pub fn pokemon_json_with_sprites(
    id: u32,
    name: &str,
    types: &[&str],
    official: Option<&str>,
    front: Option<&str>,
) -> Value {
    json!({
        "id": id,
        "name": name,
        "height": 7,
        "weight": 69,
        "base_experience": 64,
        "order": id,
        "is_default": true,
        "sprites": {
            "front_default": front,
            "front_shiny": null,
            "back_default": null,
            "other": {
                "official-artwork": { "front_default": official, "front_shiny": null },
                "home": { "front_default": null }
            },
            "versions": { "generation-i": {} }
        },
        "types": types_json(types),
        "stats": stats_json([45, 49, 49, 65, 65, 45]),
        "abilities": [
            { "is_hidden": false, "slot": 1, "ability": { "name": "overgrow", "url": "https://pokeapi.co/api/v2/ability/65/" } }
        ],
        "species": { "name": name, "url": format!("https://pokeapi.co/api/v2/pokemon-species/{}/", id) },
        "moves": []
    })
}

pub fn species_json(id: u32, name: &str, chain_url: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "order": id,
        "is_baby": false,
        "is_legendary": false,
        "is_mythical": false,
        "evolution_chain": { "url": chain_url },
        "evolves_from_species": null,
        "generation": { "name": "generation-i", "url": "https://pokeapi.co/api/v2/generation/1/" },
        "flavor_text_entries": [
            {
                "flavor_text": "A strange seed was\nplanted on its\u{c}back at birth.",
                "language": { "name": "en", "url": "https://pokeapi.co/api/v2/language/9/" },
                "version": { "name": "red", "url": "https://pokeapi.co/api/v2/version/1/" }
            }
        ],
        "genera": [
            { "genus": "Seed Pokémon", "language": { "name": "en", "url": "https://pokeapi.co/api/v2/language/9/" } }
        ]
    })
}

/// One chain link whose species URL embeds `id`.
pub fn link_json(base_url: &str, id: u32, name: &str, children: Vec<Value>) -> Value {
    json!({
        "is_baby": false,
        "species": { "name": name, "url": format!("{}/pokemon-species/{}/", base_url, id) },
        "evolution_details": [],
        "evolves_to": children
    })
}

pub fn chain_json(chain_id: u32, root: Value) -> Value {
    json!({ "id": chain_id, "baby_trigger_item": null, "chain": root })
}

pub fn list_json(count: u32, base_url: &str, ids: &[(u32, &str)]) -> Value {
    json!({
        "count": count,
        "next": null,
        "previous": null,
        "results": ids
            .iter()
            .map(|(id, name)| json!({ "name": name, "url": format!("{}/pokemon/{}/", base_url, id) }))
            .collect::<Vec<_>>()
    })
}

// ---------------------------------------------------------------------------
// Mock registration
// ---------------------------------------------------------------------------

pub fn mock_json(server: &mut Server, path: &str, body: &Value) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create()
}

pub fn mock_status(server: &mut Server, path: &str, status: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_body("{\"detail\":\"error\"}")
        .create()
}

pub fn mock_pokemon(server: &mut Server, id: u32, name: &str, types: &[&str]) -> Mock {
    mock_json(
        server,
        &format!("/pokemon/{}", id),
        &pokemon_json(id, name, types),
    )
}

/// Register species `id` pointing at evolution chain `chain_id`.
pub fn mock_species(server: &mut Server, id: u32, name: &str, chain_id: u32) -> Mock {
    let chain_url = format!("{}/evolution-chain/{}/", server.url(), chain_id);
    mock_json(
        server,
        &format!("/pokemon-species/{}", id),
        &species_json(id, name, &chain_url),
    )
}

pub fn mock_chain(server: &mut Server, chain_id: u32, root: Value) -> Mock {
    mock_json(
        server,
        &format!("/evolution-chain/{}/", chain_id),
        &chain_json(chain_id, root),
    )
}

// ---------------------------------------------------------------------------
// Card builders
// ---------------------------------------------------------------------------

pub fn card(id: u32, name: &str, types: &[&str]) -> Card {
    card_sized(id, name, types, 10, 100)
}

pub fn card_sized(id: u32, name: &str, types: &[&str], height: u32, weight: u32) -> Card {
    Card {
        id,
        name: name.to_string(),
        sprite: String::new(),
        types: types.iter().map(|t| t.to_string()).collect(),
        height,
        weight,
        stats: vec![
            CardStat { name: "HP".into(), value: 45 },
            CardStat { name: "Attack".into(), value: 49 },
        ],
    }
}

/// The five-card sample used by the filter tests.
pub fn sample_cards() -> Vec<Card> {
    vec![
        card_sized(150, "Mewtwo", &["psychic"], 20, 1220),
        card_sized(1, "Bulbasaur", &["grass", "poison"], 7, 69),
        card_sized(25, "Pikachu", &["electric"], 4, 60),
        card_sized(4, "Charmander", &["fire"], 6, 85),
        card_sized(7, "Squirtle", &["water"], 5, 90),
    ]
}

pub fn ids(cards: &[Card]) -> Vec<u32> {
    cards.iter().map(|c| c.id).collect()
}

// ---------------------------------------------------------------------------
// Log capture
// ---------------------------------------------------------------------------

/// In-memory sink for `tracing` output.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a `WARN`-level subscriber installed on this thread and
/// return its result together with everything that was logged.
pub fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .without_time()
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, logs.contents())
}
