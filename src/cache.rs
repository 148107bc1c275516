//! In-memory response cache.
//!
//! Memoizes parsed upstream responses and projected cards for the lifetime of
//! the cache instance. Entries never expire; the only way to drop them is
//! [`ResponseCache::clear`]. Each SDK owns its own cache, so tests can build
//! isolated instances.

use std::collections::HashMap;
use std::sync::Arc;

use crate::models::{
    Card, PokemonListPage, RawEvolutionChain, RawPokemon, RawSpecies, RawType,
};

// ---------------------------------------------------------------------------
// CacheEntry
// ---------------------------------------------------------------------------

/// A cached value: either a parsed upstream response or a projected card.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheEntry {
    Pokemon(RawPokemon),
    Species(RawSpecies),
    EvolutionChain(RawEvolutionChain),
    Type(RawType),
    List(PokemonListPage),
    Card(Card),
}

/// Conversion between a concrete resource type and its [`CacheEntry`] variant.
pub trait Cacheable: Clone {
    fn into_entry(self) -> CacheEntry;
    fn from_entry(entry: &CacheEntry) -> Option<&Self>;
}

macro_rules! impl_cacheable {
    ($ty:ty, $variant:ident) => {
        impl Cacheable for $ty {
            fn into_entry(self) -> CacheEntry {
                CacheEntry::$variant(self)
            }

            fn from_entry(entry: &CacheEntry) -> Option<&Self> {
                match entry {
                    CacheEntry::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }
    };
}

impl_cacheable!(RawPokemon, Pokemon);
impl_cacheable!(RawSpecies, Species);
impl_cacheable!(RawEvolutionChain, EvolutionChain);
impl_cacheable!(RawType, Type);
impl_cacheable!(PokemonListPage, List);
impl_cacheable!(Card, Card);

// ---------------------------------------------------------------------------
// CacheKey
// ---------------------------------------------------------------------------

/// Deterministic key builders. Identifiers are trimmed and lowercased so that
/// `"Pikachu"` and `" pikachu "` share an entry.
pub struct CacheKey;

impl CacheKey {
    pub fn pokemon(identifier: &str) -> String {
        format!("pokemon-{}", normalize(identifier))
    }

    pub fn species(identifier: &str) -> String {
        format!("species-{}", normalize(identifier))
    }

    /// Evolution chains are keyed by the URL the species record points at,
    /// without its trailing slash.
    pub fn evolution(url: &str) -> String {
        format!("evolution-{}", url.trim().trim_end_matches('/'))
    }

    pub fn type_info(identifier: &str) -> String {
        format!("type-{}", normalize(identifier))
    }

    pub fn list(limit: u32, offset: u32) -> String {
        format!("pokemon-list-{}-{}", limit, offset)
    }

    pub fn card(identifier: &str) -> String {
        format!("card-{}", normalize(identifier))
    }
}

fn normalize(identifier: &str) -> String {
    identifier.trim().to_lowercase()
}

// ---------------------------------------------------------------------------
// ResponseCache
// ---------------------------------------------------------------------------

/// Process-lifetime key/value memo with no eviction and no size bound.
///
/// A key, once populated, hands back the same [`Arc`] until the cache is
/// cleared. There is no internal locking: the cache is owned by a single
/// [`Connection`](crate::Connection) and accessed from one thread at a time.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: HashMap<String, Arc<CacheEntry>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<Arc<CacheEntry>> {
        self.entries.get(key).cloned()
    }

    /// Typed lookup. Returns `None` when the key is absent or holds a
    /// different resource kind.
    pub fn get_as<T: Cacheable>(&self, key: &str) -> Option<T> {
        self.entries
            .get(key)
            .and_then(|entry| T::from_entry(entry))
            .cloned()
    }

    /// Insert an entry and return the shared handle now stored under `key`.
    pub fn put(&mut self, key: impl Into<String>, entry: CacheEntry) -> Arc<CacheEntry> {
        let entry = Arc::new(entry);
        self.entries.insert(key.into(), Arc::clone(&entry));
        entry
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Alias for [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached keys in sorted order.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort();
        keys
    }
}
