//! Detail view assembly
//!
//! Joins everything fetched for one creature into a single view model and runs the
//! matchup engine and the evolution tree builder over it.

use std::collections::HashMap;

use pokedex_core::{
    EffectivenessResult, EvolutionTree, TypePair, build_evolution_tree, compute_effectiveness,
};
use pokedex_protocol::{
    AbilityDetail, EvolutionChainResponse, MoveDetail, Pokemon, PokemonForm, PokemonSpecies,
};
use serde::Serialize;

use crate::error::CatalogError;
use crate::flavor::{self, LANGUAGE};
use crate::forms::{FormView, collect_forms};
use crate::generation::Generation;
use crate::moves::{LearnMethod, MoveRow, move_rows};
use crate::display_name;

/// Everything fetched for one creature
#[derive(Debug, Clone, Copy)]
pub struct DetailSources<'a> {
    pub pokemon: &'a Pokemon,
    pub species: Option<&'a PokemonSpecies>,
    pub evolution_chain: Option<&'a EvolutionChainResponse>,
    pub forms: &'a [PokemonForm],
    pub move_details: &'a HashMap<String, MoveDetail>,
    pub ability_details: &'a HashMap<String, AbilityDetail>,
}

impl<'a> DetailSources<'a> {
    /// Sources with only the creature itself
    pub fn new(
        pokemon: &'a Pokemon,
        move_details: &'a HashMap<String, MoveDetail>,
        ability_details: &'a HashMap<String, AbilityDetail>,
    ) -> Self {
        Self {
            pokemon,
            species: None,
            evolution_chain: None,
            forms: &[],
            move_details,
            ability_details,
        }
    }
}

/// Viewer selections that change the detail view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailOptions {
    /// Game version of the pokedex entry; defaults to the first English one
    pub version: Option<String>,

    /// Learn method the move list is limited to
    pub method: Option<LearnMethod>,

    pub shiny: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatLine {
    pub name: String,
    pub base_stat: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbilityView {
    pub name: String,
    pub display_name: String,
    pub hidden: bool,
    pub short_effect: Option<String>,
}

/// View model of the detail panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub id: u32,
    pub name: String,
    pub types: TypePair,

    /// Generation the national dex id falls in
    pub generation: Option<&'static str>,

    pub sprite: Option<String>,
    pub artwork: Option<String>,
    pub height: String,
    pub weight: String,
    pub stats: Vec<StatLine>,
    pub abilities: Vec<AbilityView>,
    pub effectiveness: EffectivenessResult,
    pub versions: Vec<String>,
    pub version: Option<String>,
    pub flavor_text: Option<String>,
    pub evolution: Option<EvolutionTree>,
    pub forms: Vec<FormView>,
    pub moves: Vec<MoveRow>,
}

impl DetailView {
    pub fn assemble(
        sources: &DetailSources<'_>,
        options: &DetailOptions,
    ) -> Result<Self, CatalogError> {
        let pokemon = sources.pokemon;

        let types = TypePair::from_names(&pokemon.type_names())?;
        let effectiveness = compute_effectiveness(&types);

        let evolution = sources
            .evolution_chain
            .map(|response| build_evolution_tree(&response.chain))
            .transpose()?;

        let versions: Vec<String> = sources
            .species
            .map(flavor::english_versions)
            .unwrap_or_default()
            .into_iter()
            .map(str::to_string)
            .collect();
        if let Some(selected) = &options.version
            && !versions.contains(selected)
        {
            tracing::debug!(
                pokemon = %pokemon.name,
                version = %selected,
                "No English entry for version, using the first one"
            );
        }
        let version = options
            .version
            .clone()
            .filter(|selected| versions.contains(selected))
            .or_else(|| versions.first().cloned());
        let flavor_text = sources
            .species
            .and_then(|species| flavor::flavor_text(species, version.as_deref()));

        let abilities = pokemon
            .abilities
            .iter()
            .map(|entry| {
                let name = &entry.ability.name;
                AbilityView {
                    name: name.clone(),
                    display_name: display_name(name),
                    hidden: entry.is_hidden,
                    short_effect: sources
                        .ability_details
                        .get(name)
                        .and_then(|detail| detail.short_effect(LANGUAGE))
                        .map(str::to_string),
                }
            })
            .collect();

        let stats = pokemon
            .stats
            .iter()
            .map(|stat| StatLine {
                name: stat.stat.name.clone(),
                base_stat: stat.base_stat,
            })
            .collect();

        Ok(Self {
            id: pokemon.id,
            name: pokemon.name.clone(),
            types,
            generation: Generation::containing(pokemon.id).map(|generation| generation.name),
            sprite: pokemon.sprites.front(options.shiny).map(str::to_string),
            artwork: pokemon.sprites.home_front(options.shiny).map(str::to_string),
            height: format_height(pokemon.height),
            weight: format_weight(pokemon.weight),
            stats,
            abilities,
            effectiveness,
            versions,
            version,
            flavor_text,
            evolution,
            forms: collect_forms(sources.forms),
            moves: move_rows(pokemon, sources.move_details, options.method.as_ref()),
        })
    }
}

/// Decimetres to metres, one decimal
pub fn format_height(decimetres: u32) -> String {
    format!("{:.1}m", decimetres as f64 / 10.0)
}

/// Hectograms to kilograms, one decimal
pub fn format_weight(hectograms: u32) -> String {
    format!("{:.1}kg", hectograms as f64 / 10.0)
}
