//! Blocking HTTP client for the upstream Pokemon REST API.
//!
//! Plain request/response: no retries, no streaming. A non-success status is
//! surfaced as [`PokedexError::Upstream`] and an undecodable body as
//! [`PokedexError::Malformed`].

use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

use crate::error::{PokedexError, Result};
use crate::models::PokemonListPage;

/// The upstream resource families addressed by id or name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Pokemon,
    Species,
    EvolutionChain,
    Type,
}

impl ResourceKind {
    /// URL path segment for this resource family.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Pokemon => "pokemon",
            Self::Species => "pokemon-species",
            Self::EvolutionChain => "evolution-chain",
            Self::Type => "type",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Thin wrapper over a reqwest blocking client bound to an API base URL.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: Client,
    base_url: String,
}

impl UpstreamClient {
    /// Build a client for `base_url` (without trailing slash) with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a single resource, e.g. `{base}/pokemon/25`.
    ///
    /// The identifier is trimmed and lowercased, matching the cache key, since
    /// upstream names are lowercase.
    pub fn resource_url(&self, kind: ResourceKind, identifier: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            kind.path(),
            identifier.trim().to_lowercase()
        )
    }

    /// Fetch and decode a single resource by id or name.
    pub fn fetch<T: DeserializeOwned>(&self, kind: ResourceKind, identifier: &str) -> Result<T> {
        let url = self.resource_url(kind, identifier);
        self.fetch_url(&url)
    }

    /// Fetch and decode a resource by absolute URL.
    ///
    /// Used for links the API hands out itself, such as a species'
    /// evolution-chain URL.
    pub fn fetch_url<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(url, "fetching upstream resource");
        let resp = self.http.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(PokedexError::Upstream {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                url: url.to_string(),
            });
        }
        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch one page of the Pokemon index.
    pub fn fetch_list(&self, limit: u32, offset: u32) -> Result<PokemonListPage> {
        let url = format!(
            "{}/{}?limit={}&offset={}",
            self.base_url,
            ResourceKind::Pokemon.path(),
            limit,
            offset
        );
        self.fetch_url(&url)
    }
}
