use serde::{Deserialize, Serialize};

use crate::config;

use super::generation::Generation;

// ---------------------------------------------------------------------------
// Card: the display-ready projection of a Pokemon
// ---------------------------------------------------------------------------

/// Canonical, UI-agnostic view of a Pokemon.
///
/// Cards are derived from [`RawPokemon`](super::RawPokemon) by
/// [`project`](crate::projector::project) and never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    /// Upstream name with the first character capitalized.
    pub name: String,
    /// Artwork URL, or empty when the upstream record has none.
    pub sprite: String,
    /// Lowercase type names in slot order.
    pub types: Vec<String>,
    /// Decimeters.
    pub height: u32,
    /// Hectograms.
    pub weight: u32,
    pub stats: Vec<CardStat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardStat {
    pub name: String,
    pub value: u32,
}

impl Card {
    /// Sum of all base stats.
    pub fn total_stats(&self) -> u32 {
        self.stats.iter().map(|s| s.value).sum()
    }

    /// Mean base stat, rounded half away from zero. Zero when there are no stats.
    pub fn average_stat(&self) -> u32 {
        if self.stats.is_empty() {
            return 0;
        }
        let n = self.stats.len() as f64;
        (f64::from(self.total_stats()) / n).round() as u32
    }

    /// Value of a stat by its display name (e.g. `"Sp. Attack"`).
    pub fn stat(&self, name: &str) -> Option<u32> {
        self.stats.iter().find(|s| s.name == name).map(|s| s.value)
    }

    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t == type_name)
    }

    /// Generation this card's id falls in, if any.
    pub fn generation(&self) -> Option<&'static Generation> {
        config::GENERATIONS.iter().find(|g| g.contains(self.id))
    }

    /// Height in meters.
    pub fn height_m(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    /// Weight in kilograms.
    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }
}
