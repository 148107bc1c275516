use std::path::PathBuf;
use std::time::Duration;

use crate::models::Generation;

pub const API_BASE: &str = "https://pokeapi.co/api/v2";

/// Request timeout applied to every upstream call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Number of list entries scanned by name search.
pub const SEARCH_POOL_SIZE: u32 = 1000;

/// Minimum query length before name search hits the API.
pub const MIN_SEARCH_LEN: usize = 2;

/// Cap on cards fetched for a type lookup.
pub const TYPE_LOOKUP_LIMIT: usize = 50;

/// Cap on cards fetched for a generation lookup.
pub const GENERATION_LOOKUP_LIMIT: usize = 50;

/// Popular Pokemon used for the featured pick.
pub const FEATURED_IDS: [u32; 11] = [1, 4, 7, 25, 39, 52, 104, 131, 143, 150, 151];

pub const POKEMON_TYPES: [&str; 18] = [
    "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
];

/// National dex ranges per generation, inclusive on both ends.
pub const GENERATIONS: [Generation; 9] = [
    Generation::new(1, "Generation I", 1, 151),
    Generation::new(2, "Generation II", 152, 251),
    Generation::new(3, "Generation III", 252, 386),
    Generation::new(4, "Generation IV", 387, 493),
    Generation::new(5, "Generation V", 494, 649),
    Generation::new(6, "Generation VI", 650, 721),
    Generation::new(7, "Generation VII", 722, 809),
    Generation::new(8, "Generation VIII", 810, 905),
    Generation::new(9, "Generation IX", 906, 1025),
];

/// Look up a generation by its id (1-9).
pub fn generation(id: u8) -> Option<&'static Generation> {
    GENERATIONS.iter().find(|g| g.id == id)
}

// Durable storage keys
pub const FAVORITES_KEY: &str = "pokemon-favorites";
pub const SEARCH_HISTORY_KEY: &str = "pokemon-search-history";
pub const VIEW_MODE_KEY: &str = "pokemon-view-mode";
pub const THEME_KEY: &str = "pokemon-theme";
pub const SIDEBAR_OPEN_KEY: &str = "pokemon-sidebar-open";

pub const SEARCH_HISTORY_CAP: usize = 10;

/// Maximum number of Pokemon selected at once in comparison mode.
pub const COMPARISON_CAPACITY: usize = 2;

pub fn default_storage_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("pokedex-sdk")
    } else {
        PathBuf::from(".pokedex-sdk")
    }
}
