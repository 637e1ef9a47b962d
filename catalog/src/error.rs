use pokedex_core::{EvolutionError, MatchupError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid types: {0}")]
    Matchup(#[from] MatchupError),

    #[error("Invalid evolution chain: {0}")]
    Evolution(#[from] EvolutionError),

    #[error("Unknown generation: {0}")]
    UnknownGeneration(String),

    #[error("Unknown game: {0}")]
    UnknownGame(String),
}
