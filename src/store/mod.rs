//! User preference state: filters, favorites, search history, selection and
//! view flags.
//!
//! State changes go through [`reduce`], a pure function over an [`Action`].
//! [`PreferenceStore`] owns the current state plus a [`Storage`] backend and
//! flushes the persisted fields after every dispatched action.

pub mod action;
pub mod persistence;
pub mod reducer;
pub mod state;

pub use action::{Action, FilterPatch, PersistedState};
pub use persistence::{FileStorage, MemoryStorage, Storage};
pub use reducer::reduce;
pub use state::{PreferenceState, Theme, ViewMode};

use crate::error::Result;
use crate::filter;
use crate::models::Card;

/// Current preferences plus the storage they are mirrored to.
pub struct PreferenceStore<S: Storage> {
    state: PreferenceState,
    storage: S,
}

impl<S: Storage> PreferenceStore<S> {
    /// Start from defaults overlaid with whatever `storage` holds.
    pub fn open(storage: S) -> Self {
        let persisted = persistence::load_persisted(&storage);
        let defaults = PreferenceState::default();
        let state = if persisted.is_empty() {
            defaults
        } else {
            reduce(&defaults, Action::LoadPersistedState(persisted))
        };
        Self { state, storage }
    }

    pub fn state(&self) -> &PreferenceState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Apply an action, then persist any changed fields.
    ///
    /// The in-memory state is updated even when the write fails; the error
    /// reports the failed flush.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        let next = reduce(&self.state, action);
        let prev = std::mem::replace(&mut self.state, next);
        persistence::save_changes(&mut self.storage, &prev, &self.state)
    }

    /// Write every persisted field, regardless of what changed.
    pub fn flush(&mut self) -> Result<()> {
        persistence::save_all(&mut self.storage, &self.state)
    }

    // -- Convenience actions -------------------------------------------------

    pub fn set_filter(&mut self, patch: FilterPatch) -> Result<()> {
        self.dispatch(Action::SetFilter(patch))
    }

    pub fn reset_filters(&mut self) -> Result<()> {
        self.dispatch(Action::ResetFilters)
    }

    pub fn toggle_favorite(&mut self, pokemon_id: u32) -> Result<()> {
        self.dispatch(Action::ToggleFavorite(pokemon_id))
    }

    /// Record a search term; blank terms are ignored.
    pub fn add_search_term(&mut self, term: &str) -> Result<()> {
        if term.trim().is_empty() {
            return Ok(());
        }
        self.dispatch(Action::AddSearchTerm(term.to_string()))
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) -> Result<()> {
        self.dispatch(Action::SetViewMode(mode))
    }

    pub fn select_pokemon(&mut self, pokemon_id: u32) -> Result<()> {
        self.dispatch(Action::SelectPokemon(pokemon_id))
    }

    pub fn deselect_pokemon(&mut self, pokemon_id: u32) -> Result<()> {
        self.dispatch(Action::DeselectPokemon(pokemon_id))
    }

    pub fn clear_selection(&mut self) -> Result<()> {
        self.dispatch(Action::ClearSelection)
    }

    pub fn toggle_comparison_mode(&mut self) -> Result<()> {
        self.dispatch(Action::ToggleComparisonMode)
    }

    pub fn toggle_sidebar(&mut self) -> Result<()> {
        self.dispatch(Action::ToggleSidebar)
    }

    pub fn set_sidebar(&mut self, open: bool) -> Result<()> {
        self.dispatch(Action::SetSidebar(open))
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.dispatch(Action::SetTheme(theme))
    }

    // -- Derived views -------------------------------------------------------

    /// The cards visible under the current filters and favorites.
    pub fn visible(&self, cards: &[Card]) -> Vec<Card> {
        filter::derive(cards, &self.state.filters, &self.state.favorites)
    }
}
