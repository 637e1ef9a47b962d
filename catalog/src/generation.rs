//! National dex ranges used to page the grid

use std::ops::RangeInclusive;

use serde::Serialize;

use crate::error::CatalogError;

/// A contiguous range of national dex ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Generation {
    pub name: &'static str,
    pub start: u32,
    pub end: u32,
}

/// Every selectable range, "All Gens" first
pub const GENERATIONS: [Generation; 10] = [
    Generation::new("All Gens", 1, 1010),
    Generation::new("Gen 1", 1, 151),
    Generation::new("Gen 2", 152, 251),
    Generation::new("Gen 3", 252, 386),
    Generation::new("Gen 4", 387, 493),
    Generation::new("Gen 5", 494, 649),
    Generation::new("Gen 6", 650, 721),
    Generation::new("Gen 7", 722, 809),
    Generation::new("Gen 8", 810, 905),
    Generation::new("Gen 9", 906, 1010),
];

impl Generation {
    pub const fn new(name: &'static str, start: u32, end: u32) -> Self {
        Self { name, start, end }
    }

    /// The full national dex
    pub fn all() -> &'static Generation {
        &GENERATIONS[0]
    }

    /// Look up by display name, e.g. `"Gen 3"` (case-insensitive)
    pub fn by_name(name: &str) -> Result<&'static Generation, CatalogError> {
        let wanted = name.trim();
        GENERATIONS
            .iter()
            .find(|generation| generation.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CatalogError::UnknownGeneration(name.to_string()))
    }

    /// Look up by generation number, 1 through 9
    pub fn by_number(number: u8) -> Result<&'static Generation, CatalogError> {
        match number {
            1..=9 => Ok(&GENERATIONS[number as usize]),
            _ => Err(CatalogError::UnknownGeneration(number.to_string())),
        }
    }

    /// The numbered generation a species id belongs to
    pub fn containing(id: u32) -> Option<&'static Generation> {
        GENERATIONS[1..].iter().find(|generation| generation.contains(id))
    }

    pub fn ids(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids().contains(&id)
    }

    pub fn len(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Loading every species is slow, so the whole dex needs explicit confirmation
    pub fn requires_confirmation(&self) -> bool {
        self == Generation::all()
    }
}

impl Default for Generation {
    fn default() -> Self {
        GENERATIONS[1]
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
