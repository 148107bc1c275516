//! Pure state transitions.

use crate::config;
use crate::filter::FilterSpec;

use super::action::Action;
use super::state::PreferenceState;

/// Apply `action` to `state` and return the resulting state.
///
/// Has no side effects; persistence is handled by
/// [`PreferenceStore`](super::PreferenceStore) after the fact.
pub fn reduce(state: &PreferenceState, action: Action) -> PreferenceState {
    let mut next = state.clone();

    match action {
        Action::SetFilter(patch) => patch.apply(&mut next.filters),
        Action::ResetFilters => {
            next.filters = FilterSpec {
                search_query: state.filters.search_query.clone(),
                ..FilterSpec::default()
            };
        }
        Action::AddFavorite(id) => {
            if !next.favorites.contains(&id) {
                next.favorites.push(id);
            }
        }
        Action::RemoveFavorite(id) => {
            next.favorites.retain(|f| *f != id);
            next.selected.retain(|s| *s != id);
        }
        Action::ToggleFavorite(id) => {
            if next.favorites.contains(&id) {
                next.favorites.retain(|f| *f != id);
            } else {
                next.favorites.push(id);
            }
        }
        Action::ClearFavorites => next.favorites.clear(),
        Action::AddSearchTerm(term) => add_search_term(&mut next.search_history, &term),
        Action::ClearSearchHistory => next.search_history.clear(),
        Action::SetViewMode(mode) => next.view_mode = mode,
        Action::SelectPokemon(id) => select(&mut next, id),
        Action::DeselectPokemon(id) => next.selected.retain(|s| *s != id),
        Action::ClearSelection => next.selected.clear(),
        Action::ToggleComparisonMode => {
            next.comparison_mode = !state.comparison_mode;
            next.selected.clear();
        }
        Action::ToggleSidebar => next.sidebar_open = !state.sidebar_open,
        Action::SetSidebar(open) => next.sidebar_open = open,
        Action::SetTheme(theme) => next.theme = theme,
        Action::LoadPersistedState(persisted) => {
            if let Some(favorites) = persisted.favorites {
                next.favorites = favorites;
            }
            if let Some(history) = persisted.search_history {
                next.search_history = history;
            }
            if let Some(mode) = persisted.view_mode {
                next.view_mode = mode;
            }
            if let Some(theme) = persisted.theme {
                next.theme = theme;
            }
            if let Some(open) = persisted.sidebar_open {
                next.sidebar_open = open;
            }
        }
    }

    next
}

/// Newest first, deduplicated without reordering, capped.
fn add_search_term(history: &mut Vec<String>, term: &str) {
    let term = term.trim().to_lowercase();
    if term.is_empty() || history.contains(&term) {
        return;
    }
    history.insert(0, term);
    history.truncate(config::SEARCH_HISTORY_CAP);
}

/// Outside comparison mode the selection is replaced; inside it, the oldest
/// entry is evicted once capacity is reached.
fn select(state: &mut PreferenceState, id: u32) {
    if state.selected.contains(&id) {
        return;
    }
    if !state.comparison_mode {
        state.selected = vec![id];
        return;
    }
    state.selected.push(id);
    let overflow = state
        .selected
        .len()
        .saturating_sub(config::COMPARISON_CAPACITY);
    state.selected.drain(..overflow);
}
