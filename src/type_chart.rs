//! Static type effectiveness chart.
//!
//! Each entry lists the offensive relations of a type (`strong_against`,
//! `weak_against`, `no_effect`) and its defensive relations (`weak_to`,
//! `resistant_to`, `immune_to`). Multipliers are computed from the offensive
//! side only.

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMatchup {
    pub name: &'static str,
    pub weak_to: &'static [&'static str],
    pub resistant_to: &'static [&'static str],
    pub immune_to: &'static [&'static str],
    pub strong_against: &'static [&'static str],
    pub weak_against: &'static [&'static str],
    pub no_effect: &'static [&'static str],
}

pub const TYPE_CHART: [TypeMatchup; 18] = [
    TypeMatchup {
        name: "normal",
        weak_to: &["fighting"],
        resistant_to: &[],
        immune_to: &["ghost"],
        strong_against: &[],
        weak_against: &["rock", "steel"],
        no_effect: &["ghost"],
    },
    TypeMatchup {
        name: "fire",
        weak_to: &["ground", "rock", "water"],
        resistant_to: &["bug", "steel", "fire", "grass", "ice", "fairy"],
        immune_to: &[],
        strong_against: &["bug", "steel", "grass", "ice"],
        weak_against: &["rock", "fire", "water", "dragon"],
        no_effect: &[],
    },
    TypeMatchup {
        name: "water",
        weak_to: &["grass", "electric"],
        resistant_to: &["steel", "fire", "water", "ice"],
        immune_to: &[],
        strong_against: &["ground", "rock", "fire"],
        weak_against: &["water", "grass", "dragon"],
        no_effect: &[],
    },
    TypeMatchup {
        name: "electric",
        weak_to: &["ground"],
        resistant_to: &["flying", "steel", "electric"],
        immune_to: &[],
        strong_against: &["flying", "water"],
        weak_against: &["grass", "electric", "dragon"],
        no_effect: &["ground"],
    },
    TypeMatchup {
        name: "grass",
        weak_to: &["flying", "poison", "bug", "fire", "ice"],
        resistant_to: &["ground", "water", "grass", "electric"],
        immune_to: &[],
        strong_against: &["ground", "rock", "water"],
        weak_against: &["flying", "poison", "bug", "steel", "fire", "grass", "dragon"],
        no_effect: &[],
    },
    TypeMatchup {
        name: "ice",
        weak_to: &["fighting", "rock", "steel", "fire"],
        resistant_to: &["ice"],
        immune_to: &[],
        strong_against: &["flying", "ground", "grass", "dragon"],
        weak_against: &["steel", "fire", "water", "ice"],
        no_effect: &[],
    },
    TypeMatchup {
        name: "fighting",
        weak_to: &["flying", "psychic", "fairy"],
        resistant_to: &["rock", "bug", "dark"],
        immune_to: &[],
        strong_against: &["normal", "rock", "steel", "ice", "dark"],
        weak_against: &["flying", "poison", "psychic", "bug", "fairy"],
        no_effect: &["ghost"],
    },
    TypeMatchup {
        name: "poison",
        weak_to: &["ground", "psychic"],
        resistant_to: &["fighting", "poison", "bug", "grass", "fairy"],
        immune_to: &[],
        strong_against: &["grass", "fairy"],
        weak_against: &["poison", "ground", "rock", "ghost"],
        no_effect: &["steel"],
    },
    TypeMatchup {
        name: "ground",
        weak_to: &["water", "grass", "ice"],
        resistant_to: &["poison", "rock"],
        immune_to: &["electric"],
        strong_against: &["poison", "electric", "steel", "fire", "rock"],
        weak_against: &["bug", "grass"],
        no_effect: &["flying"],
    },
    TypeMatchup {
        name: "flying",
        weak_to: &["rock", "electric", "ice"],
        resistant_to: &["fighting", "ground", "bug", "grass"],
        immune_to: &[],
        strong_against: &["fighting", "bug", "grass"],
        weak_against: &["rock", "steel", "electric"],
        no_effect: &[],
    },
    TypeMatchup {
        name: "psychic",
        weak_to: &["bug", "ghost", "dark"],
        resistant_to: &["fighting", "psychic"],
        immune_to: &[],
        strong_against: &["fighting", "poison"],
        weak_against: &["steel", "psychic"],
        no_effect: &["dark"],
    },
    TypeMatchup {
        name: "bug",
        weak_to: &["flying", "rock", "fire"],
        resistant_to: &["fighting", "ground", "grass"],
        immune_to: &[],
        strong_against: &["grass", "psychic", "dark"],
        weak_against: &["fighting", "flying", "poison", "ghost", "steel", "fire", "fairy"],
        no_effect: &[],
    },
    TypeMatchup {
        name: "rock",
        weak_to: &["fighting", "ground", "steel", "water", "grass"],
        resistant_to: &["normal", "flying", "poison", "fire"],
        immune_to: &[],
        strong_against: &["flying", "bug", "fire", "ice"],
        weak_against: &["fighting", "ground", "steel"],
        no_effect: &[],
    },
    TypeMatchup {
        name: "ghost",
        weak_to: &["ghost", "dark"],
        resistant_to: &["poison", "bug"],
        immune_to: &["normal", "fighting"],
        strong_against: &["ghost", "psychic"],
        weak_against: &["dark"],
        no_effect: &["normal"],
    },
    TypeMatchup {
        name: "dragon",
        weak_to: &["ice", "dragon", "fairy"],
        resistant_to: &["fire", "water", "electric", "grass"],
        immune_to: &[],
        strong_against: &["dragon"],
        weak_against: &["steel"],
        no_effect: &["fairy"],
    },
    TypeMatchup {
        name: "dark",
        weak_to: &["fighting", "bug", "fairy"],
        resistant_to: &["ghost", "dark"],
        immune_to: &["psychic"],
        strong_against: &["ghost", "psychic"],
        weak_against: &["fighting", "dark", "fairy"],
        no_effect: &[],
    },
    TypeMatchup {
        name: "steel",
        weak_to: &["fighting", "ground", "fire"],
        resistant_to: &[
            "normal", "flying", "rock", "bug", "steel", "grass", "psychic", "ice", "dragon",
            "fairy",
        ],
        immune_to: &["poison"],
        strong_against: &["rock", "ice", "fairy"],
        weak_against: &["steel", "fire", "water", "electric"],
        no_effect: &[],
    },
    TypeMatchup {
        name: "fairy",
        weak_to: &["poison", "steel"],
        resistant_to: &["fighting", "bug", "dark"],
        immune_to: &["dragon"],
        strong_against: &["fighting", "dragon", "dark"],
        weak_against: &["poison", "steel", "fire"],
        no_effect: &[],
    },
];

/// Chart entry for a type name (case-insensitive).
pub fn matchup(type_name: &str) -> Option<&'static TypeMatchup> {
    let name = type_name.trim().to_lowercase();
    TYPE_CHART.iter().find(|m| m.name == name)
}

/// Damage multiplier of an `attacking` move against a defender with the given
/// types: one of 0, 0.25, 0.5, 1, 2 or 4.
///
/// Returns `None` for an unknown attacking type. Unknown defending types are
/// neutral.
pub fn effectiveness(attacking: &str, defending: &[&str]) -> Option<f32> {
    let attack = matchup(attacking)?;
    Some(
        defending
            .iter()
            .map(|d| d.trim().to_lowercase())
            .map(|d| {
                if attack.no_effect.contains(&d.as_str()) {
                    0.0
                } else if attack.strong_against.contains(&d.as_str()) {
                    2.0
                } else if attack.weak_against.contains(&d.as_str()) {
                    0.5
                } else {
                    1.0
                }
            })
            .product(),
    )
}

/// Attacking types that deal more than neutral damage to `defending`, with
/// their multipliers, in chart order.
pub fn weaknesses(defending: &[&str]) -> Vec<(&'static str, f32)> {
    config::POKEMON_TYPES
        .iter()
        .filter_map(|t| effectiveness(t, defending).map(|m| (*t, m)))
        .filter(|(_, m)| *m > 1.0)
        .collect()
}
