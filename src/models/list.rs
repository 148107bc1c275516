use serde::{Deserialize, Serialize};

use super::pokemon::NamedResource;

/// One page of `GET /pokemon?limit=&offset=`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonListPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}
