//! `/pokemon`, `/pokemon-form`, `/move` and `/ability` responses

use serde::Deserialize;

use crate::resource::NamedResource;

/// A `/pokemon/{id}` response
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,

    /// Height in decimetres
    #[serde(default)]
    pub height: u32,

    /// Weight in hectograms
    #[serde(default)]
    pub weight: u32,

    #[serde(default)]
    pub sprites: Sprites,

    #[serde(default)]
    pub types: Vec<PokemonTypeSlot>,

    #[serde(default)]
    pub moves: Vec<PokemonMove>,

    #[serde(default)]
    pub forms: Vec<NamedResource>,

    #[serde(default)]
    pub species: NamedResource,

    #[serde(default)]
    pub abilities: Vec<PokemonAbility>,

    #[serde(default)]
    pub stats: Vec<PokemonStat>,
}

impl Pokemon {
    /// Type names ordered by slot
    pub fn type_names(&self) -> Vec<&str> {
        let mut slots: Vec<&PokemonTypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|slot| slot.slot);
        slots.iter().map(|slot| slot.r#type.name.as_str()).collect()
    }

    /// Check whether any of the creature's types has this name
    pub fn has_type(&self, name: &str) -> bool {
        self.types.iter().any(|slot| slot.r#type.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
    pub other: Option<OtherSprites>,
}

impl Sprites {
    /// Default or shiny front sprite
    pub fn front(&self, shiny: bool) -> Option<&str> {
        if shiny {
            self.front_shiny.as_deref()
        } else {
            self.front_default.as_deref()
        }
    }

    /// High resolution artwork from Pokemon HOME
    pub fn home_front(&self, shiny: bool) -> Option<&str> {
        let home = self.other.as_ref()?.home.as_ref()?;
        if shiny {
            home.front_shiny.as_deref()
        } else {
            home.front_default.as_deref()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct OtherSprites {
    pub home: Option<FrontSprites>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct FrontSprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonTypeSlot {
    pub slot: u8,
    pub r#type: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonMove {
    pub r#move: NamedResource,

    #[serde(default)]
    pub version_group_details: Vec<MoveVersionDetail>,
}

impl PokemonMove {
    /// Level and learn method listed first for this move
    pub fn first_detail(&self) -> Option<&MoveVersionDetail> {
        self.version_group_details.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MoveVersionDetail {
    #[serde(default)]
    pub level_learned_at: u32,
    pub move_learn_method: NamedResource,
    pub version_group: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonAbility {
    pub ability: NamedResource,

    #[serde(default)]
    pub is_hidden: bool,

    #[serde(default)]
    pub slot: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,

    #[serde(default)]
    pub effort: u32,

    pub stat: NamedResource,
}

/// A `/pokemon-form/{id}` response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonForm {
    pub name: String,

    /// Empty for the default form
    #[serde(default)]
    pub form_name: String,

    #[serde(default)]
    pub sprites: FormSprites,

    #[serde(default)]
    pub types: Vec<PokemonTypeSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct FormSprites {
    pub front_default: Option<String>,
    pub front_shiny: Option<String>,
}

/// A `/move/{id}` response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MoveDetail {
    pub name: String,
    pub r#type: NamedResource,
    pub power: Option<u32>,
    pub accuracy: Option<u32>,
}

/// An `/ability/{id}` response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AbilityDetail {
    pub name: String,

    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
}

impl AbilityDetail {
    /// Short effect text in the given language
    pub fn short_effect(&self, language: &str) -> Option<&str> {
        self.effect_entries
            .iter()
            .find(|entry| entry.language.name == language)
            .map(|entry| entry.short_effect.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EffectEntry {
    #[serde(default)]
    pub effect: String,

    #[serde(default)]
    pub short_effect: String,

    pub language: NamedResource,
}
