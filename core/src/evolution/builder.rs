//! Flattening of the raw evolution graph
//!
//! Only three tiers are modelled: the root species, its direct evolutions and their
//! evolutions. Links deeper than that are dropped.

use pokedex_protocol::ChainLink;

use crate::error::EvolutionError;

use super::tree::{EvolutionCondition, EvolutionNode, EvolutionTree};

/// Base URL of the official-style front sprites, one PNG per species id
pub const SPRITE_URL_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// Front sprite URL for a species id
pub fn sprite_url(id: u32) -> String {
    format!("{}/{}.png", SPRITE_URL_BASE, id)
}

/// Build a three-tier evolution tree from the root of an evolution chain
pub fn build_evolution_tree(root: &ChainLink) -> Result<EvolutionTree, EvolutionError> {
    let base = node(root, None)?;

    let mut second_stage = Vec::with_capacity(root.evolves_to.len());
    let mut final_stage = Vec::new();

    for child in &root.evolves_to {
        second_stage.push(staged_node(child)?);

        for grandchild in &child.evolves_to {
            final_stage.push(staged_node(grandchild)?);

            if !grandchild.evolves_to.is_empty() {
                tracing::trace!(
                    species = %grandchild.species.name,
                    dropped = grandchild.evolves_to.len(),
                    "Ignoring evolutions past the final stage"
                );
            }
        }
    }

    Ok(EvolutionTree {
        base,
        second_stage,
        final_stage,
    })
}

/// A non-root node; only the first detail record of the edge is used
fn staged_node(link: &ChainLink) -> Result<EvolutionNode, EvolutionError> {
    if link.evolution_details.len() > 1 {
        tracing::debug!(
            species = %link.species.name,
            records = link.evolution_details.len(),
            "Using first of several evolution detail records"
        );
    }

    let condition = link
        .evolution_details
        .first()
        .map(EvolutionCondition::from_detail)
        .unwrap_or_default();

    node(link, Some(condition))
}

fn node(
    link: &ChainLink,
    condition: Option<EvolutionCondition>,
) -> Result<EvolutionNode, EvolutionError> {
    let id = link
        .species
        .id()
        .map_err(|source| EvolutionError::MalformedGraph {
            species: link.species.name.clone(),
            source,
        })?;

    Ok(EvolutionNode {
        id,
        name: link.species.name.clone(),
        sprite: sprite_url(id),
        condition,
    })
}
