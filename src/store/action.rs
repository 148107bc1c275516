use std::collections::BTreeSet;

use crate::filter::{FilterSpec, SortBy, SortOrder};

use super::state::{Theme, ViewMode};

// ---------------------------------------------------------------------------
// FilterPatch
// ---------------------------------------------------------------------------

/// A partial filter update; `None` fields leave the current value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub types: Option<BTreeSet<String>>,
    pub generations: Option<BTreeSet<u8>>,
    pub search_query: Option<String>,
    pub favorites_only: Option<bool>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
}

impl FilterPatch {
    pub fn types<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: Some(types.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn generations<I: IntoIterator<Item = u8>>(generations: I) -> Self {
        Self {
            generations: Some(generations.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn search(query: impl Into<String>) -> Self {
        Self {
            search_query: Some(query.into()),
            ..Self::default()
        }
    }

    pub fn favorites_only(on: bool) -> Self {
        Self {
            favorites_only: Some(on),
            ..Self::default()
        }
    }

    pub fn sort(sort_by: SortBy, sort_order: SortOrder) -> Self {
        Self {
            sort_by: Some(sort_by),
            sort_order: Some(sort_order),
            ..Self::default()
        }
    }

    /// Overlay the set fields onto `filters`.
    pub fn apply(self, filters: &mut FilterSpec) {
        if let Some(types) = self.types {
            filters.types = types;
        }
        if let Some(generations) = self.generations {
            filters.generations = generations;
        }
        if let Some(query) = self.search_query {
            filters.search_query = query;
        }
        if let Some(on) = self.favorites_only {
            filters.favorites_only = on;
        }
        if let Some(sort_by) = self.sort_by {
            filters.sort_by = sort_by;
        }
        if let Some(sort_order) = self.sort_order {
            filters.sort_order = sort_order;
        }
    }
}

// ---------------------------------------------------------------------------
// PersistedState
// ---------------------------------------------------------------------------

/// The subset of state read back from durable storage at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedState {
    pub favorites: Option<Vec<u32>>,
    pub search_history: Option<Vec<String>>,
    pub view_mode: Option<ViewMode>,
    pub theme: Option<Theme>,
    pub sidebar_open: Option<bool>,
}

impl PersistedState {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// Every state transition the preference store understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetFilter(FilterPatch),
    /// Restore default filters, keeping the current search query.
    ResetFilters,
    AddFavorite(u32),
    /// Also drops the id from the current selection.
    RemoveFavorite(u32),
    ToggleFavorite(u32),
    ClearFavorites,
    AddSearchTerm(String),
    ClearSearchHistory,
    SetViewMode(ViewMode),
    SelectPokemon(u32),
    DeselectPokemon(u32),
    ClearSelection,
    ToggleComparisonMode,
    ToggleSidebar,
    SetSidebar(bool),
    SetTheme(Theme),
    LoadPersistedState(PersistedState),
}
