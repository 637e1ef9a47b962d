//! `/evolution-chain` responses
//!
//! The chain is a recursive tree of [`ChainLink`]s. Each link names a species and
//! the conditions under which its parent evolves into it.

use serde::Deserialize;

use crate::resource::NamedResource;

/// An `/evolution-chain/{id}` response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EvolutionChainResponse {
    #[serde(default)]
    pub id: u32,

    pub chain: ChainLink,
}

/// One node of the evolution graph
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ChainLink {
    #[serde(default)]
    pub is_baby: bool,

    pub species: NamedResource,

    /// How the parent link evolves into this one (empty for the root)
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,

    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

/// Requirements for one evolution edge
///
/// PokeAPI sends `null` for unused references and an empty string for an
/// unused `time_of_day`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct EvolutionDetail {
    pub item: Option<NamedResource>,
    pub trigger: Option<NamedResource>,
    pub held_item: Option<NamedResource>,
    pub known_move: Option<NamedResource>,
    pub location: Option<NamedResource>,
    pub min_level: Option<u32>,
    pub min_happiness: Option<u32>,
    pub time_of_day: Option<String>,
}
