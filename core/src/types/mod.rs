//! Domain types for type matchups

mod pokemon_type;
mod type_pair;

pub use pokemon_type::{Effectiveness, Matchups, TYPE_CHART, Type};
pub use type_pair::TypePair;
