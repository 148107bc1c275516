use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PokedexError;
use crate::filter::FilterSpec;

// ---------------------------------------------------------------------------
// ViewMode / Theme
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }
}

impl FromStr for ViewMode {
    type Err = PokedexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "grid" => Ok(Self::Grid),
            "list" => Ok(Self::List),
            other => Err(PokedexError::InvalidArgument(format!(
                "Unknown view mode: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = PokedexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(PokedexError::InvalidArgument(format!(
                "Unknown theme: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PreferenceState
// ---------------------------------------------------------------------------

/// Everything the user has chosen about how to browse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceState {
    pub filters: FilterSpec,
    /// Favorite ids in the order they were added.
    pub favorites: Vec<u32>,
    /// Normalized search terms, newest first.
    pub search_history: Vec<String>,
    pub view_mode: ViewMode,
    /// Selected ids, oldest first.
    pub selected: Vec<u32>,
    pub comparison_mode: bool,
    pub sidebar_open: bool,
    pub theme: Theme,
}

impl Default for PreferenceState {
    fn default() -> Self {
        Self {
            filters: FilterSpec::default(),
            favorites: Vec::new(),
            search_history: Vec::new(),
            view_mode: ViewMode::Grid,
            selected: Vec::new(),
            comparison_mode: false,
            sidebar_open: true,
            theme: Theme::Dark,
        }
    }
}

impl PreferenceState {
    pub fn is_type_selected(&self, type_name: &str) -> bool {
        self.filters.types.contains(type_name)
    }

    pub fn is_generation_selected(&self, generation: u8) -> bool {
        self.filters.generations.contains(&generation)
    }

    pub fn is_selected(&self, pokemon_id: u32) -> bool {
        self.selected.contains(&pokemon_id)
    }

    pub fn is_favorite(&self, pokemon_id: u32) -> bool {
        self.favorites.contains(&pokemon_id)
    }

    pub fn active_filter_count(&self) -> usize {
        self.filters.active_count()
    }
}
