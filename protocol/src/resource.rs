//! Resource references
//!
//! PokeAPI links resources to each other by URL, e.g.
//! `https://pokeapi.co/api/v2/pokemon-species/25/`. The numeric id lives in the
//! path segment just before the trailing one.

use serde::Deserialize;

use crate::ParseError;

/// A named link to another resource
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct NamedResource {
    pub name: String,

    /// Absent or empty when the response omits the link
    #[serde(default)]
    pub url: String,
}

impl NamedResource {
    /// Numeric id of the referenced resource
    pub fn id(&self) -> Result<u32, ParseError> {
        resource_id(&self.url)
    }
}

/// An unnamed link to another resource
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ApiResource {
    pub url: String,
}

impl ApiResource {
    pub fn id(&self) -> Result<u32, ParseError> {
        resource_id(&self.url)
    }
}

/// Extract the numeric id from a resource URL.
///
/// The id is the second-to-last `/`-delimited segment, so reference URLs are
/// expected to keep their trailing slash.
pub fn resource_id(url: &str) -> Result<u32, ParseError> {
    if url.trim().is_empty() {
        return Err(ParseError::MissingField("resource url".to_string()));
    }

    let segments: Vec<&str> = url.split('/').collect();
    if segments.len() < 2 {
        return Err(ParseError::InvalidResourceId {
            url: url.to_string(),
        });
    }

    segments[segments.len() - 2]
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidResourceId {
            url: url.to_string(),
        })
}
