//! Pokedex entry text

use pokedex_protocol::PokemonSpecies;

/// Language the viewer shows
pub const LANGUAGE: &str = "en";

/// Game versions with an English entry, in first-seen order, without repeats
pub fn english_versions(species: &PokemonSpecies) -> Vec<&str> {
    let mut versions: Vec<&str> = Vec::new();
    for entry in species.entries_in(LANGUAGE) {
        let version = entry.version.name.as_str();
        if !versions.contains(&version) {
            versions.push(version);
        }
    }
    versions
}

/// English entry for a version, falling back to the first English entry
///
/// Form feeds in the raw game text become spaces.
pub fn flavor_text(species: &PokemonSpecies, version: Option<&str>) -> Option<String> {
    let selected = version.and_then(|version| {
        species
            .entries_in(LANGUAGE)
            .find(|entry| entry.version.name == version)
    });

    selected
        .or_else(|| species.entries_in(LANGUAGE).next())
        .map(|entry| entry.flavor_text.replace('\u{c}', " "))
}

/// `alpha-sapphire` becomes `Alpha Sapphire`
pub fn version_label(version: &str) -> String {
    version
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn species() -> PokemonSpecies {
        serde_json::from_value(json!({
            "id": 1,
            "name": "bulbasaur",
            "flavor_text_entries": [
                { "flavor_text": "Eine Saat", "language": { "name": "de", "url": "" }, "version": { "name": "red", "url": "" } },
                { "flavor_text": "A strange seed was\nplanted on its\u{c}back at birth.", "language": { "name": "en", "url": "" }, "version": { "name": "red", "url": "" } },
                { "flavor_text": "It can go for days\u{c}without eating.", "language": { "name": "en", "url": "" }, "version": { "name": "alpha-sapphire", "url": "" } },
                { "flavor_text": "Duplicate red entry", "language": { "name": "en", "url": "" }, "version": { "name": "red", "url": "" } }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_english_versions_unique_in_order() {
        assert_eq!(english_versions(&species()), vec!["red", "alpha-sapphire"]);
    }

    #[test]
    fn test_flavor_text_for_version() {
        let text = flavor_text(&species(), Some("alpha-sapphire")).unwrap();
        assert_eq!(text, "It can go for days without eating.");
    }

    #[test]
    fn test_flavor_text_falls_back_to_first_english() {
        let text = flavor_text(&species(), Some("sword")).unwrap();
        assert_eq!(text, "A strange seed was\nplanted on its back at birth.");
        assert_eq!(flavor_text(&species(), None), Some(text));
    }

    #[test]
    fn test_no_english_entries() {
        assert_eq!(flavor_text(&PokemonSpecies::default(), None), None);
        assert!(english_versions(&PokemonSpecies::default()).is_empty());
    }

    #[test]
    fn test_version_label() {
        assert_eq!(version_label("alpha-sapphire"), "Alpha Sapphire");
        assert_eq!(version_label("red"), "Red");
        assert_eq!(version_label("lets-go-pikachu"), "Lets Go Pikachu");
    }
}
