//! Evolution tree view types

use pokedex_protocol::{EvolutionChainResponse, EvolutionDetail, NamedResource};

use crate::error::EvolutionError;

use super::builder::build_evolution_tree;

/// Trigger name PokeAPI uses for trade evolutions
pub const TRADE_TRIGGER: &str = "trade";

/// Requirements for reaching a node from its parent
///
/// Every field is optional; an absent field is not a requirement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EvolutionCondition {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub min_level: Option<u32>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub item: Option<String>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub trigger: Option<String>,

    pub trade: bool,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub held_item: Option<String>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub min_happiness: Option<u32>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub time_of_day: Option<String>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub location: Option<String>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub known_move: Option<String>,
}

impl EvolutionCondition {
    /// Normalize one PokeAPI evolution detail record
    pub fn from_detail(detail: &EvolutionDetail) -> Self {
        let name = |resource: &Option<NamedResource>| resource.as_ref().map(|r| r.name.clone());
        let trigger = name(&detail.trigger);

        Self {
            min_level: detail.min_level,
            item: name(&detail.item),
            trade: trigger.as_deref() == Some(TRADE_TRIGGER),
            trigger,
            held_item: name(&detail.held_item),
            min_happiness: detail.min_happiness,
            // PokeAPI sends "" when time of day doesn't matter
            time_of_day: detail.time_of_day.clone().filter(|t| !t.is_empty()),
            location: name(&detail.location),
            known_move: name(&detail.known_move),
        }
    }

    /// True when no requirement is recorded
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Human readable requirement labels, e.g. `Level 16` or `Use thunder stone`
    pub fn labels(&self) -> Vec<String> {
        let mut labels = Vec::new();

        if let Some(level) = self.min_level.filter(|level| *level > 0) {
            labels.push(format!("Level {}", level));
        }
        if let Some(item) = &self.item {
            labels.push(format!("Use {}", spaced(item)));
        }
        if self.trade {
            labels.push("Trade".to_string());
        }
        if let Some(item) = &self.held_item {
            labels.push(format!("Hold {}", spaced(item)));
        }
        if self.min_happiness.is_some_and(|happiness| happiness > 0) {
            labels.push("High Friendship".to_string());
        }
        if let Some(time) = &self.time_of_day {
            labels.push(format!("During {}", time));
        }
        if let Some(location) = &self.location {
            labels.push(format!("At {}", spaced(location)));
        }
        if let Some(known_move) = &self.known_move {
            labels.push(format!("Knows {}", spaced(known_move)));
        }

        labels
    }
}

/// Only the first hyphen is shown as a space
fn spaced(name: &str) -> String {
    name.replacen('-', " ", 1)
}

/// One species in an evolution tree
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EvolutionNode {
    pub id: u32,
    pub name: String,
    pub sprite: String,

    /// None for the base of the tree
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub condition: Option<EvolutionCondition>,
}

/// A species' evolution family, flattened to three tiers
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EvolutionTree {
    pub base: EvolutionNode,
    pub second_stage: Vec<EvolutionNode>,
    pub final_stage: Vec<EvolutionNode>,
}

impl EvolutionTree {
    /// Build the tree from a whole `/evolution-chain` response
    pub fn from_response(response: &EvolutionChainResponse) -> Result<Self, EvolutionError> {
        build_evolution_tree(&response.chain)
    }

    /// All nodes, base first, then second stage, then final stage
    pub fn nodes(&self) -> impl Iterator<Item = &EvolutionNode> {
        std::iter::once(&self.base)
            .chain(self.second_stage.iter())
            .chain(self.final_stage.iter())
    }

    /// The three tiers as slices; the first always holds just the base
    pub fn stages(&self) -> [&[EvolutionNode]; 3] {
        [
            std::slice::from_ref(&self.base),
            &self.second_stage,
            &self.final_stage,
        ]
    }

    pub fn len(&self) -> usize {
        1 + self.second_stage.len() + self.final_stage.len()
    }

    /// Always false; a tree has at least its base
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check whether the family includes this species id
    pub fn contains(&self, id: u32) -> bool {
        self.nodes().any(|node| node.id == id)
    }

    /// True when the base species evolves at all
    pub fn has_evolutions(&self) -> bool {
        !self.second_stage.is_empty()
    }
}
