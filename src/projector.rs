//! Projection of raw upstream Pokemon records into [`Card`]s.
//!
//! Projection is pure: the same [`RawPokemon`] always yields an equal card.
//! Caching of the result under a `card-<identifier>` key is done by
//! [`PokemonQuery::card`](crate::queries::pokemon::PokemonQuery::card).

use crate::models::{Card, CardStat, RawPokemon, Sprites, TypeSlot};

/// Display names for the six core stats, keyed by upstream stat name.
const STAT_NAMES: [(&str, &str); 6] = [
    ("hp", "HP"),
    ("attack", "Attack"),
    ("defense", "Defense"),
    ("special-attack", "Sp. Attack"),
    ("special-defense", "Sp. Defense"),
    ("speed", "Speed"),
];

/// Project a raw Pokemon record into its card representation.
///
/// Types follow their slot numbers; stats keep the upstream order.
pub fn project(raw: &RawPokemon) -> Card {
    let mut slots: Vec<&TypeSlot> = raw.types.iter().collect();
    slots.sort_by_key(|slot| slot.slot);

    Card {
        id: raw.id,
        name: capitalize_first(&raw.name),
        sprite: select_sprite(&raw.sprites),
        types: slots
            .iter()
            .map(|slot| slot.type_ref.name.to_lowercase())
            .collect(),
        height: raw.height,
        weight: raw.weight,
        stats: raw
            .stats
            .iter()
            .map(|s| CardStat {
                name: format_stat_name(&s.stat.name),
                value: s.base_stat,
            })
            .collect(),
    }
}

/// Official artwork first, then the basic front sprite, else empty.
/// Blank URLs count as missing.
pub fn select_sprite(sprites: &Sprites) -> String {
    sprites
        .official_artwork()
        .filter(|url| !url.is_empty())
        .or(sprites.front_default.as_deref().filter(|url| !url.is_empty()))
        .unwrap_or_default()
        .to_string()
}

/// Uppercase the first character and leave the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Map an upstream stat name to its display form.
///
/// Unknown stats fall back to generic capitalization.
pub fn format_stat_name(stat: &str) -> String {
    STAT_NAMES
        .iter()
        .find(|(raw, _)| *raw == stat)
        .map(|(_, display)| display.to_string())
        .unwrap_or_else(|| capitalize_first(stat))
}
