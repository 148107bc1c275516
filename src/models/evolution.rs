use serde::{Deserialize, Serialize};

use super::pokemon::NamedResource;

// ---------------------------------------------------------------------------
// RawEvolutionChain: `GET /evolution-chain/{id}`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEvolutionChain {
    pub id: u32,
    pub baby_trigger_item: Option<NamedResource>,
    pub chain: ChainLink,
}

/// One node of the upstream chain tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainLink {
    #[serde(default)]
    pub is_baby: bool,
    pub species: NamedResource,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

/// Conditions under which a species evolves into the next stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvolutionDetail {
    pub trigger: Option<NamedResource>,
    pub item: Option<NamedResource>,
    pub held_item: Option<NamedResource>,
    pub known_move: Option<NamedResource>,
    pub known_move_type: Option<NamedResource>,
    pub location: Option<NamedResource>,
    pub party_species: Option<NamedResource>,
    pub party_type: Option<NamedResource>,
    pub trade_species: Option<NamedResource>,
    pub gender: Option<u8>,
    pub min_level: Option<u32>,
    pub min_happiness: Option<u32>,
    pub min_beauty: Option<u32>,
    pub min_affection: Option<u32>,
    pub relative_physical_stats: Option<i8>,
    #[serde(default)]
    pub time_of_day: String,
    #[serde(default)]
    pub needs_overworld_rain: bool,
    #[serde(default)]
    pub turn_upside_down: bool,
}

// ---------------------------------------------------------------------------
// EvolutionNode: resolved lineage tree
// ---------------------------------------------------------------------------

/// A species in a resolved evolution tree, keyed by its species id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvolutionNode {
    pub species_id: u32,
    pub species_name: String,
    pub evolution_details: Vec<EvolutionDetail>,
    pub children: Vec<EvolutionNode>,
}

impl EvolutionNode {
    /// Species ids in pre-order: parent first, then each child subtree in
    /// upstream order.
    pub fn pre_order_ids(&self) -> Vec<u32> {
        let mut ids = Vec::new();
        self.collect_ids(&mut ids);
        ids
    }

    fn collect_ids(&self, out: &mut Vec<u32>) {
        out.push(self.species_id);
        for child in &self.children {
            child.collect_ids(out);
        }
    }

    /// Number of species in this subtree.
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(EvolutionNode::len).sum::<usize>()
    }

    /// Always false; a node counts itself.
    pub fn is_empty(&self) -> bool {
        false
    }
}
