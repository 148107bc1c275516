//! Pokedex SDK for Rust.
//!
//! Provides a high-level client for browsing Pokemon data from PokeAPI.
//! Responses are fetched over HTTP, memoized in an in-memory cache owned by
//! the SDK instance, and projected into display-ready [`Card`](models::Card)s
//! that can be filtered, sorted and compared locally.
//!
//! # Quick start
//!
//! ```no_run
//! use pokedex_sdk::PokedexSdk;
//!
//! let sdk = PokedexSdk::builder().build().unwrap();
//!
//! // A single card
//! let pikachu = sdk.pokemon().card(25).unwrap();
//!
//! // Its whole evolution line (empty if the chain can't be fetched)
//! let lineage = sdk.evolution().resolve(25);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod cache;
pub mod client;
pub mod comparison;
pub mod config;
pub mod connection;
pub mod error;
pub mod evolution;
pub mod filter;
pub mod models;
pub mod pagination;
pub mod projector;
pub mod queries;
pub mod store;
pub mod type_chart;

#[cfg(feature = "async")]
pub use async_client::AsyncPokedexSdk;
pub use cache::{CacheEntry, CacheKey, ResponseCache};
pub use client::{ResourceKind, UpstreamClient};
pub use connection::Connection;
pub use error::{PokedexError, Result};
pub use evolution::EvolutionResolver;
pub use filter::{FilterSpec, SortBy, SortOrder};
pub use pagination::{PageState, Paginator};
pub use store::PreferenceStore;

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// PokedexSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`PokedexSdk`] instance.
///
/// Use [`PokedexSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](PokedexSdkBuilder::build) to create the SDK.
pub struct PokedexSdkBuilder {
    base_url: String,
    timeout: Duration,
    cache: Option<ResponseCache>,
}

impl Default for PokedexSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::API_BASE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            cache: None,
        }
    }
}

impl PokedexSdkBuilder {
    /// Point the SDK at a different API root (e.g. a mirror or a test server).
    ///
    /// Defaults to [`config::API_BASE`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-request HTTP timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Start from an existing cache instead of an empty one.
    pub fn cache(mut self, cache: ResponseCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Build the SDK. No request is made until the first query.
    pub fn build(self) -> Result<PokedexSdk> {
        let client = UpstreamClient::new(&self.base_url, self.timeout)?;
        let conn = Connection::new(client, self.cache.unwrap_or_default());
        Ok(PokedexSdk { conn })
    }
}

// ---------------------------------------------------------------------------
// PokedexSdk
// ---------------------------------------------------------------------------

/// The main entry point for the Pokedex SDK.
///
/// Wraps a [`Connection`] (which owns the [`UpstreamClient`] and
/// [`ResponseCache`]) and exposes domain-specific query interfaces as
/// lightweight borrowing wrappers.
///
/// Created via [`PokedexSdk::builder()`].
pub struct PokedexSdk {
    conn: Connection,
}

impl PokedexSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> PokedexSdkBuilder {
        PokedexSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the Pokemon query interface (raw records, cards, lookups).
    pub fn pokemon(&self) -> queries::PokemonQuery<'_> {
        queries::PokemonQuery::new(&self.conn)
    }

    /// Access the type query interface.
    pub fn types(&self) -> queries::TypeQuery<'_> {
        queries::TypeQuery::new(&self.conn)
    }

    /// Access the evolution resolver.
    pub fn evolution(&self) -> EvolutionResolver<'_> {
        EvolutionResolver::new(&self.conn)
    }

    /// Start paging through the Pokemon index, `page_size` entries at a time.
    pub fn paginate(&self, page_size: u32) -> Paginator<'_> {
        Paginator::new(&self.conn, page_size)
    }

    /// Like [`paginate`](Self::paginate) with
    /// [`DEFAULT_PAGE_SIZE`](config::DEFAULT_PAGE_SIZE).
    pub fn pages(&self) -> Paginator<'_> {
        self.paginate(config::DEFAULT_PAGE_SIZE)
    }

    // -- Cache utilities ---------------------------------------------------

    /// Number of cached responses and cards.
    pub fn cache_size(&self) -> usize {
        self.conn.cache_size()
    }

    /// Drop every cached response and card; the next query refetches.
    pub fn clear_cache(&self) {
        self.conn.clear_cache();
        tracing::debug!("response cache cleared");
    }

    /// Return a reference to the underlying [`Connection`] for advanced usage.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for PokedexSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PokedexSdk(base_url={}, cached_entries={})",
            self.conn.client().base_url(),
            self.conn.cache_size()
        )
    }
}
