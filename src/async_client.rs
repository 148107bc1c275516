//! Async wrapper around [`PokedexSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//!
//! # Example
//!
//! ```no_run
//! use pokedex_sdk::AsyncPokedexSdk;
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncPokedexSdk::builder().build().await.unwrap();
//!
//!     // Run any sync SDK method via closure
//!     let card = sdk.run(|s| s.pokemon().card(25)).await.unwrap();
//!
//!     // Convenience method for evolution lines
//!     let lineage = sdk.evolution(25).await.unwrap();
//! }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config;
use crate::error::{PokedexError, Result};
use crate::models::Card;
use crate::PokedexSdk;

// ---------------------------------------------------------------------------
// AsyncPokedexSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncPokedexSdk`] instance.
pub struct AsyncPokedexSdkBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for AsyncPokedexSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::API_BASE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl AsyncPokedexSdkBuilder {
    /// Point the SDK at a different API root.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-request HTTP timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the async SDK.
    ///
    /// The blocking HTTP client is constructed on the blocking thread pool,
    /// since it may not be created inside an async context.
    pub async fn build(self) -> Result<AsyncPokedexSdk> {
        tokio::task::spawn_blocking(move || {
            let sdk = PokedexSdk::builder()
                .base_url(self.base_url)
                .timeout(self.timeout)
                .build()?;
            Ok(AsyncPokedexSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| PokedexError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncPokedexSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`PokedexSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`PokedexSdk`] is
/// protected by a [`Mutex`] since its cache sits in a `RefCell`; calls are
/// serialized, so the cache never sees two writers.
#[derive(Clone)]
pub struct AsyncPokedexSdk {
    inner: Arc<Mutex<PokedexSdk>>,
}

impl AsyncPokedexSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncPokedexSdkBuilder {
        AsyncPokedexSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives an `&PokedexSdk` reference and should return
    /// a `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&PokedexSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| PokedexError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| PokedexError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Fetch a card asynchronously.
    pub async fn card(&self, pokemon_id: u32) -> Result<Card> {
        self.run(move |s| s.pokemon().card(pokemon_id)).await
    }

    /// Resolve an evolution line asynchronously (empty on upstream failure).
    pub async fn evolution(&self, pokemon_id: u32) -> Result<Vec<Card>> {
        self.run(move |s| Ok(s.evolution().resolve(pokemon_id))).await
    }

    /// Number of cached entries.
    pub async fn cache_size(&self) -> Result<usize> {
        self.run(|s| Ok(s.cache_size())).await
    }

    /// Drop every cached response and card.
    pub async fn clear_cache(&self) -> Result<()> {
        self.run(|s| {
            s.clear_cache();
            Ok(())
        })
        .await
    }

    /// Release this handle on the blocking thread pool.
    ///
    /// When it is the last handle, the SDK and its HTTP client are dropped
    /// there; the blocking client must not be dropped on an async worker.
    pub async fn close(self) -> Result<()> {
        let inner = self.inner;
        tokio::task::spawn_blocking(move || drop(inner))
            .await
            .map_err(|e| PokedexError::InvalidArgument(format!("Task join error: {e}")))
    }
}
