//! Pokemon, species, card and list queries.

use std::fmt::Display;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::cache::CacheKey;
use crate::client::ResourceKind;
use crate::config;
use crate::connection::Connection;
use crate::error::{PokedexError, Result};
use crate::models::{Card, NamedResource, PokemonListPage, RawPokemon, RawSpecies, RawType};
use crate::projector;

// ---------------------------------------------------------------------------
// PokemonQuery
// ---------------------------------------------------------------------------

/// Query interface for Pokemon records and their card projections.
pub struct PokemonQuery<'a> {
    conn: &'a Connection,
}

impl<'a> PokemonQuery<'a> {
    /// Create a new `PokemonQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    // -- Raw records -------------------------------------------------------

    /// Get the raw Pokemon record by id or name.
    pub fn get(&self, identifier: impl Display) -> Result<RawPokemon> {
        self.conn
            .fetch_resource(ResourceKind::Pokemon, &identifier.to_string())
    }

    /// Get the raw species record by id or name.
    pub fn species(&self, identifier: impl Display) -> Result<RawSpecies> {
        self.conn
            .fetch_resource(ResourceKind::Species, &identifier.to_string())
    }

    /// Get one page of the Pokemon index.
    pub fn list(&self, limit: u32, offset: u32) -> Result<PokemonListPage> {
        self.conn.fetch_list(limit, offset)
    }

    // -- Cards -------------------------------------------------------------

    /// Get the card for a Pokemon by id or name.
    ///
    /// The projected card is cached under `card-<identifier>`; each call
    /// returns a fresh, value-equal copy.
    pub fn card(&self, identifier: impl Display) -> Result<Card> {
        let identifier = identifier.to_string();
        self.conn.fetch_cached(&CacheKey::card(&identifier), |_| {
            let raw = self.get(&identifier)?;
            Ok(projector::project(&raw))
        })
    }

    /// Get cards for several Pokemon, in the order requested.
    ///
    /// All-or-nothing: the first failure fails the whole batch.
    pub fn cards<I, T>(&self, identifiers: I) -> Result<Vec<Card>>
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        identifiers.into_iter().map(|id| self.card(id)).collect()
    }

    // -- Lookups -----------------------------------------------------------

    /// Search by name substring (case-insensitive) over the first
    /// [`SEARCH_POOL_SIZE`](config::SEARCH_POOL_SIZE) index entries.
    ///
    /// Queries shorter than [`MIN_SEARCH_LEN`](config::MIN_SEARCH_LEN)
    /// characters return no results without touching the API.
    pub fn search(&self, query: &str, limit: usize) -> Result<Vec<Card>> {
        let needle = query.trim().to_lowercase();
        if needle.chars().count() < config::MIN_SEARCH_LEN {
            return Ok(Vec::new());
        }

        let page = self.list(config::SEARCH_POOL_SIZE, 0)?;
        let ids = page
            .results
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .take(limit)
            .map(resource_id)
            .collect::<Result<Vec<u32>>>()?;

        self.cards(ids)
    }

    /// Cards for the first [`TYPE_LOOKUP_LIMIT`](config::TYPE_LOOKUP_LIMIT)
    /// Pokemon of a type.
    pub fn by_type(&self, type_name: &str) -> Result<Vec<Card>> {
        let type_info: RawType = self
            .conn
            .fetch_resource(ResourceKind::Type, type_name)?;
        let ids = type_info
            .pokemon
            .iter()
            .take(config::TYPE_LOOKUP_LIMIT)
            .map(|m| resource_id(&m.pokemon))
            .collect::<Result<Vec<u32>>>()?;

        self.cards(ids)
    }

    /// Cards for the first [`GENERATION_LOOKUP_LIMIT`](config::GENERATION_LOOKUP_LIMIT)
    /// ids of a generation. Unknown generations yield an empty list.
    pub fn by_generation(&self, generation: u8) -> Result<Vec<Card>> {
        match config::generation(generation) {
            Some(gen) => self.cards(gen.ids().take(config::GENERATION_LOOKUP_LIMIT)),
            None => Ok(Vec::new()),
        }
    }

    /// A random card from [`FEATURED_IDS`](config::FEATURED_IDS).
    pub fn featured(&self) -> Result<Card> {
        self.featured_with(&mut rand::thread_rng())
    }

    /// Like [`featured`](Self::featured) with a caller-supplied RNG.
    pub fn featured_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Card> {
        let id = config::FEATURED_IDS
            .choose(rng)
            .copied()
            .ok_or_else(|| PokedexError::NotFound("No featured Pokemon configured".into()))?;
        self.card(id)
    }
}

fn resource_id(resource: &NamedResource) -> Result<u32> {
    resource.id().ok_or_else(|| {
        PokedexError::malformed(format!("No id in resource URL '{}'", resource.url))
    })
}
