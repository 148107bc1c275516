//! Filter / sort pipeline over an in-memory card list.
//!
//! [`derive`] applies, in this order: type filter, search filter, favorites
//! filter, generation filter, then a stable sort. Each filter is skipped when
//! its criterion is empty. Inputs are never mutated.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config;
use crate::models::Card;

// ---------------------------------------------------------------------------
// FilterSpec
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Id,
    Name,
    Height,
    Weight,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// The user's current view criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// Lowercase type names; a card matches if it has any of them.
    pub types: BTreeSet<String>,
    /// Generation ids (1-9); a card matches if its id is in any of their ranges.
    pub generations: BTreeSet<u8>,
    pub search_query: String,
    pub favorites_only: bool,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl FilterSpec {
    /// Number of active filter criteria (types, generations, search,
    /// favorites); sorting is not counted.
    pub fn active_count(&self) -> usize {
        [
            !self.types.is_empty(),
            !self.generations.is_empty(),
            !self.search_query.is_empty(),
            self.favorites_only,
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }

    /// True when any filter criterion is active.
    pub fn is_filtering(&self) -> bool {
        self.active_count() > 0
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Produce the visible subset of `cards` for `filter`, in display order.
///
/// `favorites` is only consulted when `filter.favorites_only` is set.
pub fn derive(cards: &[Card], filter: &FilterSpec, favorites: &[u32]) -> Vec<Card> {
    let query = filter.search_query.to_lowercase();

    let mut visible: Vec<Card> = cards
        .iter()
        .filter(|c| matches_types(c, &filter.types))
        .filter(|c| query.is_empty() || matches_search(c, &query))
        .filter(|c| !filter.favorites_only || favorites.contains(&c.id))
        .filter(|c| matches_generations(c, &filter.generations))
        .cloned()
        .collect();

    sort_cards(&mut visible, filter.sort_by, filter.sort_order);
    visible
}

fn matches_types(card: &Card, types: &BTreeSet<String>) -> bool {
    types.is_empty() || card.types.iter().any(|t| types.contains(t))
}

/// `query` must already be lowercase.
fn matches_search(card: &Card, query: &str) -> bool {
    card.name.to_lowercase().contains(query)
        || card.id.to_string().contains(query)
        || card.types.iter().any(|t| t.to_lowercase().contains(query))
}

fn matches_generations(card: &Card, generations: &BTreeSet<u8>) -> bool {
    generations.is_empty()
        || generations
            .iter()
            .filter_map(|id| config::generation(*id))
            .any(|g| g.contains(card.id))
}

/// Stable sort by the chosen field; `Desc` reverses the comparison, so equal
/// keys keep their input order either way.
pub fn sort_cards(cards: &mut [Card], sort_by: SortBy, order: SortOrder) {
    cards.sort_by(|a, b| {
        let ord = match sort_by {
            SortBy::Id => a.id.cmp(&b.id),
            SortBy::Name => locale_compare(&a.name, &b.name),
            SortBy::Height => a.height.cmp(&b.height),
            SortBy::Weight => a.weight.cmp(&b.weight),
        };
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
}

/// Dictionary-style string ordering: letters compare case-insensitively, and
/// only on a full tie does lowercase sort before uppercase.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| {
        a.chars()
            .map(char::is_uppercase)
            .cmp(b.chars().map(char::is_uppercase))
    })
}
