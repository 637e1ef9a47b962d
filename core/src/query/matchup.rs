//! Defensive type matchups
//!
//! Collects every attacking type that hits a [`TypePair`] super-effectively, not
//! very effectively or not at all, then resolves dual-type overlaps: a resistance
//! cancels a weakness, and an immunity overrides both.

use std::collections::BTreeSet;

use crate::error::MatchupError;
use crate::types::{Effectiveness, Type, TypePair};

/// Weaknesses, resistances and immunities of a type pair
///
/// The three sets are pairwise disjoint and ordered by chart order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EffectivenessResult {
    pub weaknesses: BTreeSet<Type>,
    pub resistances: BTreeSet<Type>,
    pub immunities: BTreeSet<Type>,
}

impl EffectivenessResult {
    pub fn is_weak_to(&self, attacking: Type) -> bool {
        self.weaknesses.contains(&attacking)
    }

    pub fn resists(&self, attacking: Type) -> bool {
        self.resistances.contains(&attacking)
    }

    pub fn is_immune_to(&self, attacking: Type) -> bool {
        self.immunities.contains(&attacking)
    }

    /// Check if any of the attacking types is a weakness
    pub fn is_weak_to_any(&self, attacking_types: &[Type]) -> bool {
        attacking_types.iter().any(|t| self.is_weak_to(*t))
    }
}

/// Compute the defensive matchups of a type pair
pub fn compute_effectiveness(types: &TypePair) -> EffectivenessResult {
    let mut weak = BTreeSet::new();
    let mut resist = BTreeSet::new();
    let mut immune = BTreeSet::new();

    for defender in types.iter() {
        for attacker in Type::all() {
            match attacker.effectiveness_against(defender) {
                Effectiveness::SuperEffective => {
                    weak.insert(*attacker);
                }
                Effectiveness::NotVeryEffective => {
                    resist.insert(*attacker);
                }
                Effectiveness::NoEffect => {
                    immune.insert(*attacker);
                }
                Effectiveness::Neutral => {}
            }
        }
    }

    // Order matters: immunity is applied last so it always wins
    weak.retain(|t| !resist.contains(t));
    weak.retain(|t| !immune.contains(t));
    resist.retain(|t| !immune.contains(t));

    EffectivenessResult {
        weaknesses: weak,
        resistances: resist,
        immunities: immune,
    }
}

/// Validate raw type names, then compute their matchups
pub fn effectiveness_for_names<S: AsRef<str>>(
    names: &[S],
) -> Result<EffectivenessResult, MatchupError> {
    let pair = TypePair::from_names(names)?;
    Ok(compute_effectiveness(&pair))
}
