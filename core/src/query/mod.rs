//! Query helpers for the detail view
//!
//! This module derives a creature's defensive matchups from its types.

mod matchup;

pub use matchup::{EffectivenessResult, compute_effectiveness, effectiveness_for_names};
