//! A creature's one or two types

use crate::error::MatchupError;

use super::pokemon_type::Type;

/// One or two distinct types, in slot order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypePair {
    primary: Type,
    secondary: Option<Type>,
}

impl TypePair {
    /// Single-typed creature
    pub fn single(primary: Type) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    /// Dual-typed creature; both types must differ
    pub fn dual(primary: Type, secondary: Type) -> Result<Self, MatchupError> {
        if primary == secondary {
            return Err(MatchupError::DuplicateType(primary));
        }
        Ok(Self {
            primary,
            secondary: Some(secondary),
        })
    }

    /// Build from an ordered slice of 1 or 2 types
    pub fn new(types: &[Type]) -> Result<Self, MatchupError> {
        match types {
            [] => Err(MatchupError::EmptyTypes),
            [primary] => Ok(Self::single(*primary)),
            [primary, secondary] => Self::dual(*primary, *secondary),
            _ => Err(MatchupError::TooManyTypes(types.len())),
        }
    }

    /// Build from PokeAPI type names, failing on the first unknown name
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, MatchupError> {
        let types = names
            .iter()
            .map(|name| name.as_ref().parse::<Type>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&types)
    }

    pub fn primary(&self) -> Type {
        self.primary
    }

    pub fn secondary(&self) -> Option<Type> {
        self.secondary
    }

    /// Check if either slot holds this type
    pub fn contains(&self, t: Type) -> bool {
        self.primary == t || self.secondary == Some(t)
    }

    /// Iterate the types in slot order
    pub fn iter(&self) -> impl Iterator<Item = Type> {
        std::iter::once(self.primary).chain(self.secondary)
    }

    pub fn len(&self) -> usize {
        if self.secondary.is_some() { 2 } else { 1 }
    }

    /// Always false; a pair holds at least one type
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl From<Type> for TypePair {
    fn from(t: Type) -> Self {
        Self::single(t)
    }
}

impl std::fmt::Display for TypePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.secondary {
            Some(secondary) => write!(f, "{}/{}", self.primary, secondary),
            None => write!(f, "{}", self.primary),
        }
    }
}
