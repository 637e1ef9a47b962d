//! PokeAPI response types
//!
//! These types mirror the JSON returned by `https://pokeapi.co/api/v2/`. Only the
//! fields the catalog consumes are modelled; everything else is ignored on decode.

use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod evolution;
pub mod location;
pub mod pokemon;
pub mod resource;
pub mod species;

mod tests;

pub use evolution::{ChainLink, EvolutionChainResponse, EvolutionDetail};
pub use location::{
    EncounterDetail, Location, LocationArea, PokemonEncounter, Region, VersionEncounterDetail,
};
pub use pokemon::{
    AbilityDetail, EffectEntry, FormSprites, MoveDetail, MoveVersionDetail, Pokemon,
    PokemonAbility, PokemonForm, PokemonMove, PokemonStat, PokemonTypeSlot, Sprites,
};
pub use resource::{ApiResource, NamedResource, resource_id};
pub use species::{FlavorTextEntry, PokemonSpecies};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid resource id in reference {url:?}")]
    InvalidResourceId { url: String },

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode a response body into one of the response types
pub fn parse<T: DeserializeOwned>(body: &str) -> Result<T, ParseError> {
    let body = body.trim();
    if body.is_empty() {
        return Err(ParseError::InvalidFormat("empty response body".to_string()));
    }
    Ok(serde_json::from_str(body)?)
}
