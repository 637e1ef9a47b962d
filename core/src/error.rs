//! Errors raised by the matchup engine and the evolution tree builder

use pokedex_protocol::ParseError;
use thiserror::Error;

use crate::types::Type;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchupError {
    #[error("Unknown type name: {0:?}")]
    UnknownType(String),

    #[error("A creature needs at least one type")]
    EmptyTypes,

    #[error("A creature has at most two types, got {0}")]
    TooManyTypes(usize),

    #[error("Type {0} listed twice")]
    DuplicateType(Type),
}

#[derive(Error, Debug)]
pub enum EvolutionError {
    #[error("Malformed evolution graph at species {species:?}: {source}")]
    MalformedGraph {
        species: String,
        #[source]
        source: ParseError,
    },
}
