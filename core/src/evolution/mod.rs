//! Evolution trees
//!
//! Turns PokeAPI's recursive evolution chain into a fixed base / second stage /
//! final stage layout for display.

mod builder;
mod tree;

pub use builder::{SPRITE_URL_BASE, build_evolution_tree, sprite_url};
pub use tree::{EvolutionCondition, EvolutionNode, EvolutionTree, TRADE_TRIGGER};
