use serde::{Deserialize, Serialize};

use super::pokemon::{ApiResource, NamedResource};

// ---------------------------------------------------------------------------
// RawSpecies: `GET /pokemon-species/{id|name}`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSpecies {
    pub id: u32,
    pub name: String,
    pub order: Option<i32>,
    #[serde(default)]
    pub is_baby: bool,
    #[serde(default)]
    pub is_legendary: bool,
    #[serde(default)]
    pub is_mythical: bool,
    pub evolution_chain: Option<ApiResource>,
    pub evolves_from_species: Option<NamedResource>,
    pub generation: Option<NamedResource>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
    #[serde(default)]
    pub genera: Vec<Genus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorText {
    pub flavor_text: String,
    pub language: NamedResource,
    pub version: Option<NamedResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genus {
    pub genus: String,
    pub language: NamedResource,
}

impl RawSpecies {
    /// First flavor text in the given language, with the upstream line
    /// breaks and form feeds collapsed to single spaces.
    pub fn flavor_text(&self, language: &str) -> Option<String> {
        self.flavor_text_entries
            .iter()
            .find(|e| e.language.name == language)
            .map(|e| e.flavor_text.split_whitespace().collect::<Vec<_>>().join(" "))
    }

    /// Category label (e.g. "Seed Pokémon") in the given language.
    pub fn genus(&self, language: &str) -> Option<&str> {
        self.genera
            .iter()
            .find(|g| g.language.name == language)
            .map(|g| g.genus.as_str())
    }
}
