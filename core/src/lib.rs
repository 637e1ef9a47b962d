//! Type matchups and evolution trees for a Pokemon catalog.
//!
//! This crate holds the two pure computations the catalog view relies on. Both take
//! plain data handed over by the fetch layer and return plain view data.
//!
//! # Overview
//!
//! ```text
//! pokedex-protocol (PokeAPI responses)
//!        │
//!        ▼
//! pokedex-core (type chart + evolution trees) ← THIS CRATE
//!        │
//!        ▼
//! pokedex-catalog (grid and detail view models)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - The 18 elemental types, with the compiled-in [`TYPE_CHART`]
//! - [`TypePair`] - A creature's one or two distinct types
//! - [`EffectivenessResult`] - Weaknesses, resistances and immunities of a pair
//! - [`EvolutionTree`] - Base form plus second and final stages with conditions
//!
//! # Example Usage
//!
//! ```ignore
//! use pokedex_core::{compute_effectiveness, Type, TypePair};
//!
//! let gliscor = TypePair::dual(Type::Ground, Type::Flying)?;
//! let result = compute_effectiveness(&gliscor);
//!
//! assert!(result.is_immune_to(Type::Electric));
//! assert!(!result.is_weak_to(Type::Electric));
//! ```

pub mod error;
pub mod evolution;
pub mod query;
pub mod types;

pub use error::{EvolutionError, MatchupError};
pub use evolution::{
    EvolutionCondition, EvolutionNode, EvolutionTree, SPRITE_URL_BASE, build_evolution_tree,
    sprite_url,
};
pub use query::{EffectivenessResult, compute_effectiveness, effectiveness_for_names};
pub use types::{Effectiveness, Matchups, TYPE_CHART, Type, TypePair};

// Re-export the wire types the builder consumes
pub use pokedex_protocol::{ChainLink, EvolutionChainResponse, EvolutionDetail};
