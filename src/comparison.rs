//! Side-by-side comparison of two cards.

use serde::Serialize;

use crate::models::Card;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    First,
    Second,
}

/// One stat, compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatDifference {
    pub name: String,
    pub first: u32,
    pub second: u32,
    /// `first - second`.
    pub difference: i64,
    /// `None` on a tie.
    pub winner: Option<Winner>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeComparison {
    pub first: Vec<String>,
    pub second: Vec<String>,
    pub shared: Vec<String>,
    pub unique_to_first: Vec<String>,
    pub unique_to_second: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub first_id: u32,
    pub second_id: u32,
    pub stats: Vec<StatDifference>,
    pub types: TypeComparison,
    /// Difference of stat totals, `first - second`.
    pub total_difference: i64,
}

impl Comparison {
    /// Number of stats each side wins, as `(first, second)`.
    pub fn score(&self) -> (usize, usize) {
        self.stats.iter().fold((0, 0), |(a, b), s| match s.winner {
            Some(Winner::First) => (a + 1, b),
            Some(Winner::Second) => (a, b + 1),
            None => (a, b),
        })
    }
}

/// Compare two cards stat by stat and type by type.
///
/// Stats are matched by display name in `first`'s order, followed by any
/// stats only `second` has. A stat missing on one side counts as 0.
pub fn compare(first: &Card, second: &Card) -> Comparison {
    let mut names: Vec<&str> = first.stats.iter().map(|s| s.name.as_str()).collect();
    for s in &second.stats {
        if !names.contains(&s.name.as_str()) {
            names.push(&s.name);
        }
    }

    let stats = names
        .into_iter()
        .map(|name| {
            let a = first.stat(name).unwrap_or(0);
            let b = second.stat(name).unwrap_or(0);
            StatDifference {
                name: name.to_string(),
                first: a,
                second: b,
                difference: i64::from(a) - i64::from(b),
                winner: match a.cmp(&b) {
                    std::cmp::Ordering::Greater => Some(Winner::First),
                    std::cmp::Ordering::Less => Some(Winner::Second),
                    std::cmp::Ordering::Equal => None,
                },
            }
        })
        .collect();

    let partition = |of: &Card, against: &Card| -> Vec<String> {
        of.types
            .iter()
            .filter(|t| !against.has_type(t))
            .cloned()
            .collect()
    };

    let types = TypeComparison {
        first: first.types.clone(),
        second: second.types.clone(),
        shared: first
            .types
            .iter()
            .filter(|t| second.has_type(t))
            .cloned()
            .collect(),
        unique_to_first: partition(first, second),
        unique_to_second: partition(second, first),
    };

    Comparison {
        first_id: first.id,
        second_id: second.id,
        stats,
        types,
        total_difference: i64::from(first.total_stats()) - i64::from(second.total_stats()),
    }
}
