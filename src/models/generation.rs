use serde::Serialize;

/// A release era, identified by a contiguous inclusive range of dex ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Generation {
    pub id: u8,
    pub name: &'static str,
    pub first_id: u32,
    pub last_id: u32,
}

impl Generation {
    pub const fn new(id: u8, name: &'static str, first_id: u32, last_id: u32) -> Self {
        Self {
            id,
            name,
            first_id,
            last_id,
        }
    }

    pub fn contains(&self, pokemon_id: u32) -> bool {
        (self.first_id..=self.last_id).contains(&pokemon_id)
    }

    /// All dex ids in this generation, in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = u32> {
        self.first_id..=self.last_id
    }
}
