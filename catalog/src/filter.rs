//! Grid search and type filters

use pokedex_core::Type;
use pokedex_protocol::Pokemon;

/// Search box and type dropdown state for the grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    search: String,
    primary: Option<Type>,
    secondary: Option<Type>,
}

impl CatalogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive name substring
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.set_search(search);
        self
    }

    pub fn with_primary(mut self, primary: Option<Type>) -> Self {
        self.set_primary(primary);
        self
    }

    pub fn with_secondary(mut self, secondary: Option<Type>) -> Self {
        self.set_secondary(secondary);
        self
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into().to_lowercase();
    }

    /// Choosing the current secondary type as primary clears the secondary
    pub fn set_primary(&mut self, primary: Option<Type>) {
        if primary.is_some() && primary == self.secondary {
            self.secondary = None;
        }
        self.primary = primary;
    }

    pub fn set_secondary(&mut self, secondary: Option<Type>) {
        self.secondary = secondary;
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn primary(&self) -> Option<Type> {
        self.primary
    }

    pub fn secondary(&self) -> Option<Type> {
        self.secondary
    }

    /// True when every creature passes
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.primary.is_none() && self.secondary.is_none()
    }

    pub fn matches(&self, pokemon: &Pokemon) -> bool {
        self.matches_parts(&pokemon.name, &pokemon.type_names())
    }

    /// Match a name and its type names against the filter
    pub fn matches_parts(&self, name: &str, type_names: &[&str]) -> bool {
        if !name.to_lowercase().contains(&self.search) {
            return false;
        }

        if let Some(primary) = self.primary
            && !type_names.contains(&primary.as_str())
        {
            return false;
        }

        if let Some(secondary) = self.secondary {
            let excluded = self.primary.map(|primary| primary.as_str());
            let found = type_names
                .iter()
                .any(|name| *name == secondary.as_str() && Some(*name) != excluded);
            if !found {
                return false;
            }
        }

        true
    }

    /// Keep the matching creatures, preserving order
    pub fn apply<'a>(&self, pokemon: &'a [Pokemon]) -> Vec<&'a Pokemon> {
        pokemon.iter().filter(|p| self.matches(p)).collect()
    }
}
