use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Shared resource references
// ---------------------------------------------------------------------------

/// A named link to another upstream resource (`{name, url}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl NamedResource {
    /// Numeric id embedded in the resource URL.
    pub fn id(&self) -> Option<u32> {
        extract_id_from_url(&self.url)
    }
}

/// Parse the id from a resource URL such as
/// `https://pokeapi.co/api/v2/pokemon-species/25/`: the last path segment,
/// ignoring one trailing slash.
pub fn extract_id_from_url(url: &str) -> Option<u32> {
    let trimmed = url.strip_suffix('/').unwrap_or(url);
    trimmed.rsplit('/').next()?.parse().ok()
}

/// An unnamed link to another upstream resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResource {
    pub url: String,
}

// ---------------------------------------------------------------------------
// RawPokemon: `GET /pokemon/{id|name}`
// ---------------------------------------------------------------------------

/// Upstream Pokemon detail record.
///
/// Height is in decimeters and weight in hectograms, exactly as served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPokemon {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub base_experience: Option<u32>,
    pub order: Option<i32>,
    pub is_default: Option<bool>,
    #[serde(default)]
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    pub species: Option<NamedResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlot {
    #[serde(default)]
    pub is_hidden: bool,
    pub slot: u8,
    pub ability: NamedResource,
}

// ---------------------------------------------------------------------------
// Sprites
// ---------------------------------------------------------------------------

/// Sprite URL set. Only the variants the SDK reads are modelled; the
/// per-game `versions` tree is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_default: Option<String>,
    pub back_shiny: Option<String>,
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: Option<ArtworkSprites>,
    pub home: Option<ArtworkSprites>,
    pub dream_world: Option<ArtworkSprites>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkSprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
}

impl Sprites {
    /// Official artwork, front, default variant.
    pub fn official_artwork(&self) -> Option<&str> {
        self.other
            .as_ref()
            .and_then(|o| o.official_artwork.as_ref())
            .and_then(|a| a.front_default.as_deref())
    }
}
