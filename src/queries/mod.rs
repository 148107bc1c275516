//! Query modules for the Pokedex SDK.
//!
//! Each module provides a query struct that borrows from a
//! [`Connection`](crate::connection::Connection) and exposes methods returning
//! `Result<T>` with typed models. Every fetch is memoized in the connection's
//! [`ResponseCache`](crate::cache::ResponseCache).

pub mod pokemon;
pub mod types;

pub use pokemon::PokemonQuery;
pub use types::TypeQuery;
