//! Move list of the detail view

use std::collections::HashMap;

use pokedex_protocol::{MoveDetail, Pokemon, PokemonMove};
use serde::Serialize;

use crate::display_name;

/// How a move is learned
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LearnMethod {
    LevelUp,
    Machine,
    Egg,
    Tutor,
    Other(String),
}

impl LearnMethod {
    /// Parse a PokeAPI `move-learn-method` name
    pub fn from_name(name: &str) -> Self {
        match name {
            "level-up" => LearnMethod::LevelUp,
            "machine" => LearnMethod::Machine,
            "egg" => LearnMethod::Egg,
            "tutor" => LearnMethod::Tutor,
            other => LearnMethod::Other(other.to_string()),
        }
    }

    /// Parse a move list filter; `all` (or nothing) means no filter
    pub fn parse_filter(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "" | "all" => None,
            other => Some(Self::from_name(other)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LearnMethod::LevelUp => "level-up",
            LearnMethod::Machine => "machine",
            LearnMethod::Egg => "egg",
            LearnMethod::Tutor => "tutor",
            LearnMethod::Other(name) => name,
        }
    }

    /// Dropdown label
    pub fn label(&self) -> &str {
        match self {
            LearnMethod::LevelUp => "Level Up",
            LearnMethod::Machine => "TM/TR",
            LearnMethod::Egg => "Egg Move",
            LearnMethod::Tutor => "Move Tutor",
            LearnMethod::Other(name) => name,
        }
    }
}

impl std::fmt::Display for LearnMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One line of the move list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRow {
    /// API name, used to look up details
    pub name: String,
    pub display_name: String,
    pub move_type: Option<String>,
    pub power: Option<u32>,
    pub accuracy: Option<u32>,
    pub method: Option<LearnMethod>,
    pub level: u32,
}

impl MoveRow {
    /// `Lvl 16` for level-up moves, otherwise the method name
    pub fn method_label(&self) -> String {
        match &self.method {
            Some(LearnMethod::LevelUp) => format!("Lvl {}", self.level),
            Some(method) => method.to_string(),
            None => String::new(),
        }
    }
}

fn learned_with(entry: &PokemonMove, method: &LearnMethod) -> bool {
    entry
        .version_group_details
        .iter()
        .any(|detail| LearnMethod::from_name(&detail.move_learn_method.name) == *method)
}

fn first_level(entry: &PokemonMove) -> u32 {
    entry
        .first_detail()
        .map(|detail| detail.level_learned_at)
        .unwrap_or(0)
}

/// Build the move list, optionally keeping one learn method, sorted by level.
///
/// A move matches a method if any version group teaches it that way. Rows are
/// sorted by the level of the first version group; ties keep API order.
pub fn move_rows(
    pokemon: &Pokemon,
    details: &HashMap<String, MoveDetail>,
    method: Option<&LearnMethod>,
) -> Vec<MoveRow> {
    let mut entries: Vec<&PokemonMove> = pokemon
        .moves
        .iter()
        .filter(|entry| method.is_none_or(|method| learned_with(entry, method)))
        .collect();

    entries.sort_by_key(|entry| first_level(entry));

    entries
        .into_iter()
        .map(|entry| {
            let name = &entry.r#move.name;
            let detail = details.get(name);
            let first = entry.first_detail();

            MoveRow {
                name: name.clone(),
                display_name: display_name(name),
                move_type: detail.map(|d| d.r#type.name.clone()),
                power: detail.and_then(|d| d.power),
                accuracy: detail.and_then(|d| d.accuracy),
                method: first.map(|d| LearnMethod::from_name(&d.move_learn_method.name)),
                level: first.map(|d| d.level_learned_at).unwrap_or(0),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn learned(method: &str, level: u32) -> Value {
        json!({
            "level_learned_at": level,
            "move_learn_method": { "name": method, "url": "" },
            "version_group": { "name": "red-blue", "url": "" }
        })
    }

    fn fixture() -> Pokemon {
        serde_json::from_value(json!({
            "id": 25,
            "name": "pikachu",
            "moves": [
                { "move": { "name": "thunder-punch", "url": "" }, "version_group_details": [learned("tutor", 0)] },
                { "move": { "name": "thunderbolt", "url": "" }, "version_group_details": [learned("level-up", 26), learned("machine", 0)] },
                { "move": { "name": "thunder-shock", "url": "" }, "version_group_details": [learned("level-up", 1)] },
                { "move": { "name": "volt-tackle", "url": "" }, "version_group_details": [learned("egg", 0)] }
            ]
        }))
        .unwrap()
    }

    fn details() -> HashMap<String, MoveDetail> {
        let detail: MoveDetail = serde_json::from_value(json!({
            "name": "thunderbolt",
            "type": { "name": "electric", "url": "" },
            "power": 90,
            "accuracy": 100
        }))
        .unwrap();
        HashMap::from([(detail.name.clone(), detail)])
    }

    #[test]
    fn test_all_methods_sorted_by_level() {
        let rows = move_rows(&fixture(), &details(), None);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();

        // Level 0 entries keep their API order ahead of level 1 and 26
        assert_eq!(
            names,
            vec!["thunder-punch", "volt-tackle", "thunder-shock", "thunderbolt"]
        );
    }

    #[test]
    fn test_filter_matches_any_version_group() {
        let rows = move_rows(&fixture(), &details(), Some(&LearnMethod::Machine));

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "thunderbolt");
        // The label still reflects the first version group
        assert_eq!(rows[0].method_label(), "Lvl 26");
    }

    #[test]
    fn test_row_uses_fetched_details() {
        let rows = move_rows(&fixture(), &details(), Some(&LearnMethod::LevelUp));
        let thunderbolt = rows.iter().find(|r| r.name == "thunderbolt").unwrap();
        let shock = rows.iter().find(|r| r.name == "thunder-shock").unwrap();

        assert_eq!(thunderbolt.move_type.as_deref(), Some("electric"));
        assert_eq!(thunderbolt.power, Some(90));
        assert_eq!(shock.move_type, None);
        assert_eq!(shock.display_name, "thunder shock");
    }

    #[test]
    fn test_all_filter_keeps_every_move() {
        let method = LearnMethod::parse_filter("all");
        let rows = move_rows(&fixture(), &details(), method.as_ref());

        assert_eq!(method, None);
        assert_eq!(rows.len(), 4);
        assert_eq!(LearnMethod::parse_filter(" "), None);
        assert_eq!(LearnMethod::parse_filter("Egg"), Some(LearnMethod::Egg));
        assert_eq!(
            LearnMethod::parse_filter("level-up"),
            Some(LearnMethod::LevelUp)
        );
    }

    #[test]
    fn test_method_labels() {
        let rows = move_rows(&fixture(), &HashMap::new(), Some(&LearnMethod::Egg));

        assert_eq!(rows[0].method_label(), "egg");
        assert_eq!(LearnMethod::from_name("machine").label(), "TM/TR");
        assert_eq!(
            LearnMethod::from_name("form-change"),
            LearnMethod::Other("form-change".to_string())
        );
    }
}
