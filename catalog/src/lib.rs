//! Grid and detail view models for a Pokemon catalog.
//!
//! Everything here is synchronous and works on responses the fetch layer already
//! holds. The grid side pages the national dex by generation and filters it by name
//! and type. The detail side joins one creature's responses into a [`DetailView`].
//! [`LocationView`] lists where pokemon are encountered in a game's region.
//!
//! # Overview
//!
//! ```text
//! pokedex-protocol ──► pokedex-core ──► pokedex-catalog ← THIS CRATE
//!                                            │
//!                                            ▼
//!                                     pokedex-client (fetch + CLI)
//! ```
//!
//! # Example Usage
//!
//! ```ignore
//! use pokedex_catalog::{CatalogFilter, Generation};
//! use pokedex_core::Type;
//!
//! let gen1 = Generation::by_number(1)?;
//! let filter = CatalogFilter::new().with_search("char").with_primary(Some(Type::Fire));
//! let visible = filter.apply(&loaded);
//! ```

pub mod detail;
pub mod error;
pub mod filter;
pub mod flavor;
pub mod forms;
pub mod generation;
pub mod locations;
pub mod moves;

pub use detail::{
    AbilityView, DetailOptions, DetailSources, DetailView, StatLine, format_height,
    format_weight,
};
pub use error::CatalogError;
pub use filter::CatalogFilter;
pub use flavor::{LANGUAGE, english_versions, flavor_text, version_label};
pub use forms::{FormView, collect_forms, form_label};
pub use generation::{GENERATIONS, Generation};
pub use locations::{
    EncounterTimes, EncounterView, GAMES, Game, LocationKind, LocationView, encounter_times,
    location_kind, sort_locations, unique_encounters,
};
pub use moves::{LearnMethod, MoveRow, move_rows};

/// API names read with the first hyphen as a space (`lightning-rod` → `lightning rod`)
pub fn display_name(name: &str) -> String {
    name.replacen('-', " ", 1)
}
