//! Evolution lineage resolution.
//!
//! Walks species -> evolution chain -> chain tree and turns every stage into a
//! [`Card`]. [`EvolutionResolver::resolve`] degrades to an empty lineage on
//! any failure and reports it through `tracing`; callers that need the error
//! use [`EvolutionResolver::try_resolve`].

use crate::connection::Connection;
use crate::error::{PokedexError, Result};
use crate::models::{Card, ChainLink, EvolutionNode, RawEvolutionChain};
use crate::queries::pokemon::PokemonQuery;

pub use crate::models::extract_id_from_url;

/// Resolves the evolution lineage of a Pokemon.
pub struct EvolutionResolver<'a> {
    conn: &'a Connection,
}

impl<'a> EvolutionResolver<'a> {
    /// Create a new `EvolutionResolver` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Fetch the raw chain referenced by a Pokemon's species record.
    pub fn chain(&self, pokemon_id: u32) -> Result<RawEvolutionChain> {
        let species = PokemonQuery::new(self.conn).species(pokemon_id)?;
        let chain_ref = species.evolution_chain.ok_or_else(|| {
            PokedexError::NotFound(format!("Species {} has no evolution chain", species.name))
        })?;
        self.conn.fetch_evolution_url(&chain_ref.url)
    }

    /// The lineage of a Pokemon as a tree rooted at its base species.
    pub fn tree(&self, pokemon_id: u32) -> Result<EvolutionNode> {
        let chain = self.chain(pokemon_id)?;
        build_node(&chain.chain)
    }

    /// Cards for every stage of the lineage, in pre-order (parent before
    /// children, siblings in upstream order).
    ///
    /// Any failure fails the whole lineage.
    pub fn try_resolve(&self, pokemon_id: u32) -> Result<Vec<Card>> {
        let ids = self.tree(pokemon_id)?.pre_order_ids();
        PokemonQuery::new(self.conn).cards(ids)
    }

    /// Like [`try_resolve`](Self::try_resolve), but a failure yields an empty
    /// lineage instead of an error. The failure is logged at `warn` level.
    pub fn resolve(&self, pokemon_id: u32) -> Vec<Card> {
        match self.try_resolve(pokemon_id) {
            Ok(cards) => cards,
            Err(e) => {
                tracing::warn!(
                    pokemon_id,
                    error = %e,
                    status = ?e.status(),
                    "evolution chain unavailable; returning no evolution data"
                );
                Vec::new()
            }
        }
    }
}

/// Convert an upstream chain link (and its descendants) into an
/// [`EvolutionNode`] tree.
pub fn build_node(link: &ChainLink) -> Result<EvolutionNode> {
    let species_id = link.species.id().ok_or_else(|| {
        PokedexError::malformed(format!(
            "No species id in evolution chain URL '{}'",
            link.species.url
        ))
    })?;

    let children = link
        .evolves_to
        .iter()
        .map(build_node)
        .collect::<Result<Vec<_>>>()?;

    Ok(EvolutionNode {
        species_id,
        species_name: link.species.name.clone(),
        evolution_details: link.evolution_details.clone(),
        children,
    })
}
