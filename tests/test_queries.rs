//! Pokemon and type query tests.

mod common;

use mockito::Matcher;
use pokedex_sdk::config;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

fn type_json(base: &str, name: &str, members: &[(u32, &str)]) -> serde_json::Value {
    json!({
        "id": 10,
        "name": name,
        "damage_relations": {
            "double_damage_to": [{ "name": "grass", "url": format!("{}/type/12/", base) }],
            "half_damage_from": []
        },
        "generation": { "name": "generation-i", "url": format!("{}/generation/1/", base) },
        "pokemon": members
            .iter()
            .map(|(id, n)| json!({ "slot": 1, "pokemon": { "name": n, "url": format!("{}/pokemon/{}/", base, id) } }))
            .collect::<Vec<_>>()
    })
}

fn mock_search_pool(server: &mut mockito::Server, entries: &[(u32, &str)]) -> mockito::Mock {
    let body = common::list_json(entries.len() as u32, &server.url(), entries);
    server
        .mock("GET", "/pokemon")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), config::SEARCH_POOL_SIZE.to_string()),
            Matcher::UrlEncoded("offset".into(), "0".into()),
        ]))
        .with_status(200)
        .with_body(body.to_string())
        .create()
}

// ---------------------------------------------------------------------------
// Raw records
// ---------------------------------------------------------------------------

#[test]
fn get_by_name_and_species_text() {
    let (sdk, mut server) = common::setup_sdk();
    let _p = common::mock_json(
        &mut server,
        "/pokemon/bulbasaur",
        &common::pokemon_json(1, "bulbasaur", &["grass", "poison"]),
    );
    let _s = common::mock_species(&mut server, 1, "bulbasaur", 1);

    let raw = sdk.pokemon().get("bulbasaur").unwrap();
    assert_eq!(raw.id, 1);

    let species = sdk.pokemon().species(1).unwrap();
    assert_eq!(
        species.flavor_text("en").as_deref(),
        Some("A strange seed was planted on its back at birth.")
    );
    assert_eq!(species.genus("en"), Some("Seed Pokémon"));
    assert_eq!(species.genus("fr"), None);
}

#[test]
fn cards_preserve_requested_order() {
    let (sdk, mut server) = common::setup_sdk();
    let _a = common::mock_pokemon(&mut server, 7, "squirtle", &["water"]);
    let _b = common::mock_pokemon(&mut server, 4, "charmander", &["fire"]);

    let cards = sdk.pokemon().cards([7, 4]).unwrap();
    assert_eq!(common::ids(&cards), vec![7, 4]);
}

#[test]
fn cards_fail_as_a_batch() {
    let (sdk, mut server) = common::setup_sdk();
    let _a = common::mock_pokemon(&mut server, 7, "squirtle", &["water"]);
    let _b = common::mock_status(&mut server, "/pokemon/4", 404);

    assert!(sdk.pokemon().cards([7, 4]).is_err());
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[test]
fn search_filters_pool_by_name() {
    let (sdk, mut server) = common::setup_sdk();
    let pool = mock_search_pool(
        &mut server,
        &[(1, "bulbasaur"), (25, "pikachu"), (26, "raichu"), (172, "pichu")],
    );
    let _p = common::mock_pokemon(&mut server, 25, "pikachu", &["electric"]);
    let _r = common::mock_pokemon(&mut server, 26, "raichu", &["electric"]);

    let cards = sdk.pokemon().search("CHU", 2).unwrap();
    assert_eq!(common::ids(&cards), vec![25, 26]);
    pool.assert();
}

#[test]
fn short_search_makes_no_request() {
    let (sdk, mut server) = common::setup_sdk();
    let pool = mock_search_pool(&mut server, &[(25, "pikachu")]).expect(0);

    assert!(sdk.pokemon().search("p", 10).unwrap().is_empty());
    assert!(sdk.pokemon().search("  ", 10).unwrap().is_empty());
    pool.assert();
}

#[test]
fn search_without_matches_is_empty() {
    let (sdk, mut server) = common::setup_sdk();
    let _pool = mock_search_pool(&mut server, &[(25, "pikachu")]);

    assert!(sdk.pokemon().search("zzz", 10).unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Type / generation lookups
// ---------------------------------------------------------------------------

#[test]
fn by_type_fetches_member_cards() {
    let (sdk, mut server) = common::setup_sdk();
    let base = server.url();
    let _t = common::mock_json(
        &mut server,
        "/type/fire",
        &type_json(&base, "fire", &[(4, "charmander"), (5, "charmeleon")]),
    );
    let _a = common::mock_pokemon(&mut server, 4, "charmander", &["fire"]);
    let _b = common::mock_pokemon(&mut server, 5, "charmeleon", &["fire"]);

    let cards = sdk.pokemon().by_type("fire").unwrap();
    assert_eq!(common::ids(&cards), vec![4, 5]);
}

#[test]
fn type_query_exposes_relations_and_members() {
    let (sdk, mut server) = common::setup_sdk();
    let base = server.url();
    let _t = common::mock_json(
        &mut server,
        "/type/fire",
        &type_json(&base, "fire", &[(4, "charmander"), (5, "charmeleon")]),
    );

    let fire = sdk.types().get("fire").unwrap();
    assert_eq!(fire.damage_relations.double_damage_to[0].name, "grass");
    assert!(fire.damage_relations.no_damage_to.is_empty());
    assert_eq!(
        sdk.types().member_names("fire").unwrap(),
        vec!["charmander", "charmeleon"]
    );
}

#[test]
fn unknown_generation_is_empty() {
    let (sdk, _server) = common::setup_sdk();
    assert!(sdk.pokemon().by_generation(0).unwrap().is_empty());
    assert!(sdk.pokemon().by_generation(10).unwrap().is_empty());
}

#[test]
fn by_generation_starts_at_first_id() {
    let (sdk, mut server) = common::setup_sdk();
    let gen = config::generation(9).unwrap();
    // 906..=955 are requested; only the first answers.
    let _first = common::mock_pokemon(&mut server, gen.first_id, "sprigatito", &["grass"]);

    let err = sdk.pokemon().by_generation(9).unwrap_err();
    assert_eq!(err.status(), Some(501));
    assert_eq!(sdk.pokemon().card(gen.first_id).unwrap().name, "Sprigatito");
}

// ---------------------------------------------------------------------------
// Featured
// ---------------------------------------------------------------------------

#[test]
fn featured_picks_from_the_featured_list() {
    let (sdk, mut server) = common::setup_sdk();
    let _mocks: Vec<_> = config::FEATURED_IDS
        .iter()
        .map(|id| common::mock_pokemon(&mut server, *id, &format!("mon{}", id), &["normal"]))
        .collect();

    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..5 {
        let card = sdk.pokemon().featured_with(&mut rng).unwrap();
        assert!(config::FEATURED_IDS.contains(&card.id));
    }
}
