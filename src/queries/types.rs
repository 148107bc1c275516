//! Type queries.

use crate::client::ResourceKind;
use crate::connection::Connection;
use crate::error::Result;
use crate::models::RawType;

/// Query interface for elemental type records.
pub struct TypeQuery<'a> {
    conn: &'a Connection,
}

impl<'a> TypeQuery<'a> {
    /// Create a new `TypeQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Get a type by id or name (damage relations plus member Pokemon).
    pub fn get(&self, identifier: &str) -> Result<RawType> {
        self.conn.fetch_resource(ResourceKind::Type, identifier)
    }

    /// Names of the Pokemon belonging to a type, in upstream order.
    pub fn member_names(&self, identifier: &str) -> Result<Vec<String>> {
        Ok(self
            .get(identifier)?
            .pokemon
            .into_iter()
            .map(|m| m.pokemon.name)
            .collect())
    }
}
