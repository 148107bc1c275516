//! Pagination state and paginator tests.

mod common;

use mockito::Matcher;
use pokedex_sdk::models::PokemonListPage;
use pokedex_sdk::config;
use pokedex_sdk::PageState;

fn page(count: u32) -> PokemonListPage {
    PokemonListPage {
        count,
        next: None,
        previous: None,
        results: vec![],
    }
}

fn list_query(limit: u32, offset: u32) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("limit".into(), limit.to_string()),
        Matcher::UrlEncoded("offset".into(), offset.to_string()),
    ])
}

// ---------------------------------------------------------------------------
// PageState
// ---------------------------------------------------------------------------

#[test]
fn fresh_state_has_next_page() {
    let state = PageState::new(20);
    assert!(state.has_next_page());
    assert_eq!(state.next_offset(), 0);
}

#[test]
fn offsets_advance_by_page_size() {
    let mut state = PageState::new(20);
    state.record(&page(60));
    assert_eq!(state.next_offset(), 20);
    state.record(&page(60));
    assert_eq!(state.next_offset(), 40);
    assert!(state.has_next_page());
}

#[test]
fn exhausted_after_covering_total() {
    let mut state = PageState::new(20);
    for _ in 0..3 {
        state.record(&page(60));
    }
    assert!(!state.has_next_page());
}

#[test]
fn partial_last_page_still_counts() {
    let mut state = PageState::new(20);
    state.record(&page(45));
    state.record(&page(45));
    assert!(state.has_next_page());
    state.record(&page(45));
    assert!(!state.has_next_page());
}

#[test]
fn empty_index_has_no_next_page() {
    let mut state = PageState::new(20);
    state.record(&page(0));
    assert!(!state.has_next_page());
}

// ---------------------------------------------------------------------------
// Paginator
// ---------------------------------------------------------------------------

#[test]
fn paginator_walks_until_exhausted() {
    let (sdk, mut server) = common::setup_sdk();
    let base = server.url();
    let first = server
        .mock("GET", "/pokemon")
        .match_query(list_query(2, 0))
        .with_status(200)
        .with_body(common::list_json(3, &base, &[(1, "bulbasaur"), (2, "ivysaur")]).to_string())
        .create();
    let second = server
        .mock("GET", "/pokemon")
        .match_query(list_query(2, 2))
        .with_status(200)
        .with_body(common::list_json(3, &base, &[(3, "venusaur")]).to_string())
        .create();

    let mut pages = sdk.paginate(2);
    assert!(pages.has_next_page());

    let names: Vec<String> = pages
        .fetch_next_page()
        .unwrap()
        .unwrap()
        .iter()
        .map(|r| r.name.clone())
        .collect();
    assert_eq!(names, vec!["bulbasaur", "ivysaur"]);

    let names: Vec<String> = pages
        .fetch_next_page()
        .unwrap()
        .unwrap()
        .iter()
        .map(|r| r.name.clone())
        .collect();
    assert_eq!(names, vec!["venusaur"]);

    assert!(!pages.has_next_page());
    assert!(pages.fetch_next_page().unwrap().is_none());
    assert_eq!(pages.entries().len(), 3);
    assert_eq!(pages.state().pages_fetched, 2);
    assert_eq!(pages.state().total_count, Some(3));

    first.assert();
    second.assert();
}

#[test]
fn failed_page_leaves_state_unchanged() {
    let (sdk, mut server) = common::setup_sdk();
    let _m = server
        .mock("GET", "/pokemon")
        .match_query(list_query(20, 0))
        .with_status(500)
        .create();

    let mut pages = sdk.paginate(20);
    assert!(pages.fetch_next_page().is_err());
    assert_eq!(pages.state(), PageState::new(20));
    assert!(pages.entries().is_empty());
    assert!(pages.has_next_page());
}

#[test]
fn default_pages_request_default_page_size() {
    let (sdk, mut server) = common::setup_sdk();
    let base = server.url();
    let mock = server
        .mock("GET", "/pokemon")
        .match_query(list_query(config::DEFAULT_PAGE_SIZE, 0))
        .with_status(200)
        .with_body(common::list_json(1, &base, &[(1, "bulbasaur")]).to_string())
        .create();

    let mut pages = sdk.pages();
    assert_eq!(pages.state().page_size, config::DEFAULT_PAGE_SIZE);
    assert_eq!(pages.fetch_next_page().unwrap().map(|p| p.len()), Some(1));
    mock.assert();
}
