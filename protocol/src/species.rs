//! `/pokemon-species` responses

use serde::Deserialize;

use crate::resource::{ApiResource, NamedResource};

/// A `/pokemon-species/{id}` response
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PokemonSpecies {
    #[serde(default)]
    pub id: u32,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,

    /// Missing for a handful of event species
    pub evolution_chain: Option<ApiResource>,
}

impl PokemonSpecies {
    /// Flavor text entries written in the given language
    pub fn entries_in<'a>(&'a self, language: &'a str) -> impl Iterator<Item = &'a FlavorTextEntry> {
        self.flavor_text_entries
            .iter()
            .filter(move |entry| entry.language.name == language)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,

    #[serde(default)]
    pub version: NamedResource,
}
