//! `/region`, `/location` and `/location-area` responses

use serde::Deserialize;

use crate::resource::NamedResource;

/// A `/region/{id}` response
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Region {
    pub id: u32,
    pub name: String,

    #[serde(default)]
    pub locations: Vec<NamedResource>,
}

/// A `/location/{id}` response
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Location {
    pub id: u32,
    pub name: String,

    #[serde(default)]
    pub areas: Vec<NamedResource>,
}

/// A `/location-area/{id}` response
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct LocationArea {
    pub id: u32,
    pub name: String,

    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,

    #[serde(default)]
    pub version_details: Vec<VersionEncounterDetail>,
}

impl PokemonEncounter {
    /// Names of every encounter condition across all versions, e.g. `time-night`
    pub fn condition_names(&self) -> impl Iterator<Item = &str> {
        self.version_details
            .iter()
            .flat_map(|version| &version.encounter_details)
            .flat_map(|detail| &detail.condition_values)
            .map(|condition| condition.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VersionEncounterDetail {
    pub version: NamedResource,

    #[serde(default)]
    pub max_chance: u32,

    #[serde(default)]
    pub encounter_details: Vec<EncounterDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EncounterDetail {
    #[serde(default)]
    pub min_level: u32,

    #[serde(default)]
    pub max_level: u32,

    #[serde(default)]
    pub chance: u32,

    #[serde(default)]
    pub condition_values: Vec<NamedResource>,

    #[serde(default)]
    pub method: NamedResource,
}
