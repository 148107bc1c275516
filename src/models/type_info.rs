use serde::{Deserialize, Serialize};

use super::pokemon::NamedResource;

// ---------------------------------------------------------------------------
// RawType: `GET /type/{id|name}`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawType {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub damage_relations: DamageRelations,
    pub generation: Option<NamedResource>,
    #[serde(default)]
    pub pokemon: Vec<TypeMember>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRelations {
    #[serde(default)]
    pub no_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub double_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub double_damage_from: Vec<NamedResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMember {
    pub slot: u8,
    pub pokemon: NamedResource,
}
