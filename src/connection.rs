//! API session: the upstream client plus the response cache it fills.
//!
//! Every raw fetch goes through [`Connection::fetch_cached`], which checks the
//! cache first and only hits the network on a miss. Failures are never cached,
//! so re-issuing a failed request simply tries the network again.

use std::cell::RefCell;

use serde::de::DeserializeOwned;

use crate::cache::{CacheKey, Cacheable, ResponseCache};
use crate::client::{ResourceKind, UpstreamClient};
use crate::error::Result;
use crate::models::PokemonListPage;

/// Owns the [`UpstreamClient`] and the [`ResponseCache`].
///
/// Query wrappers borrow a `&Connection`; the cache sits behind a `RefCell`
/// because every access happens on the calling thread.
pub struct Connection {
    client: UpstreamClient,
    /// The memo of parsed responses and projected cards.
    pub cache: RefCell<ResponseCache>,
}

impl Connection {
    /// Create a connection over an existing client and cache.
    pub fn new(client: UpstreamClient, cache: ResponseCache) -> Self {
        Self {
            client,
            cache: RefCell::new(cache),
        }
    }

    pub fn client(&self) -> &UpstreamClient {
        &self.client
    }

    /// Return the value cached under `key`, or run `fetch` and cache its result.
    pub fn fetch_cached<T, F>(&self, key: &str, fetch: F) -> Result<T>
    where
        T: Cacheable,
        F: FnOnce(&UpstreamClient) -> Result<T>,
    {
        if let Some(hit) = self.cache.borrow().get_as::<T>(key) {
            tracing::debug!(key, "cache hit");
            return Ok(hit);
        }

        let value = fetch(&self.client)?;
        self.cache.borrow_mut().put(key, value.clone().into_entry());
        Ok(value)
    }

    /// Fetch a resource by kind and id/name through the cache.
    pub fn fetch_resource<T>(&self, kind: ResourceKind, identifier: &str) -> Result<T>
    where
        T: Cacheable + DeserializeOwned,
    {
        let key = match kind {
            ResourceKind::Pokemon => CacheKey::pokemon(identifier),
            ResourceKind::Species => CacheKey::species(identifier),
            ResourceKind::EvolutionChain => {
                CacheKey::evolution(&self.client.resource_url(kind, identifier))
            }
            ResourceKind::Type => CacheKey::type_info(identifier),
        };
        self.fetch_cached(&key, |c| c.fetch(kind, identifier))
    }

    /// Fetch a resource by absolute URL, keyed as an evolution chain.
    pub fn fetch_evolution_url<T>(&self, url: &str) -> Result<T>
    where
        T: Cacheable + DeserializeOwned,
    {
        self.fetch_cached(&CacheKey::evolution(url), |c| c.fetch_url(url))
    }

    /// Fetch one page of the Pokemon index through the cache.
    pub fn fetch_list(&self, limit: u32, offset: u32) -> Result<PokemonListPage> {
        self.fetch_cached(&CacheKey::list(limit, offset), |c| {
            c.fetch_list(limit, offset)
        })
    }

    /// Number of cached entries.
    pub fn cache_size(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Drop every cached response and card.
    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
    }
}
