//! Games & Maps: where each pokemon can be encountered in a game's region

use pokedex_core::sprite_url;
use pokedex_protocol::{Location, LocationArea, PokemonEncounter};
use serde::Serialize;

use crate::error::CatalogError;

/// A selectable game and the region it takes place in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Game {
    pub id: &'static str,
    pub name: &'static str,
    pub region: &'static str,
}

pub const GAMES: [Game; 9] = [
    Game::new("red-blue", "Red & Blue", "kanto"),
    Game::new("gold-silver", "Gold & Silver", "johto"),
    Game::new("ruby-sapphire", "Ruby & Sapphire", "hoenn"),
    Game::new("diamond-pearl", "Diamond & Pearl", "sinnoh"),
    Game::new("black-white", "Black & White", "unova"),
    Game::new("x-y", "X & Y", "kalos"),
    Game::new("sun-moon", "Sun & Moon", "alola"),
    Game::new("sword-shield", "Sword & Shield", "galar"),
    Game::new("scarlet-violet", "Scarlet & Violet", "paldea"),
];

impl Game {
    pub const fn new(id: &'static str, name: &'static str, region: &'static str) -> Self {
        Self { id, name, region }
    }

    /// Look up by id, e.g. `"sword-shield"` (case-insensitive)
    pub fn by_id(id: &str) -> Result<&'static Game, CatalogError> {
        let wanted = id.trim();
        GAMES
            .iter()
            .find(|game| game.id.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CatalogError::UnknownGame(id.to_string()))
    }

    /// Path segment of the `/region` endpoint; Galar and Paldea go by number
    pub fn region_key(&self) -> &'static str {
        match self.region {
            "galar" => "8",
            "paldea" => "9",
            region => region,
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Route,
    Cave,
    Water,
    City,
}

impl LocationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationKind::Route => "route",
            LocationKind::Cave => "cave",
            LocationKind::Water => "water",
            LocationKind::City => "city",
        }
    }
}

impl std::fmt::Display for LocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a location by its API name; anything unrecognised is a city
pub fn location_kind(name: &str) -> LocationKind {
    if name.contains("route") {
        LocationKind::Route
    } else if name.contains("cave") || name.contains("tunnel") {
        LocationKind::Cave
    } else if name.contains("sea") || name.contains("lake") {
        LocationKind::Water
    } else {
        LocationKind::City
    }
}

/// Times of day an encounter happens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EncounterTimes {
    pub day: bool,
    pub night: bool,
}

/// Derive day/night from `time-*` encounter conditions
///
/// Without any time condition the encounter counts as daytime only.
pub fn encounter_times(encounter: &PokemonEncounter) -> EncounterTimes {
    let mut times = EncounterTimes::default();
    let mut timed = false;

    for condition in encounter.condition_names() {
        let Some(time) = condition.strip_prefix("time-") else {
            continue;
        };
        timed = true;
        if time.contains("day") || time.contains("morning") {
            times.day = true;
        }
        if time.contains("night") {
            times.night = true;
        }
    }

    if !timed {
        times.day = true;
    }
    times
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncounterView {
    pub id: u32,
    pub name: String,
    pub display_name: String,
    pub sprite: String,
    pub day: bool,
    pub night: bool,
}

/// One pokemon per name across all areas, in first-seen order
///
/// The first occurrence decides the times. Encounters whose pokemon link has no
/// numeric id are dropped.
pub fn unique_encounters(areas: &[LocationArea]) -> Vec<EncounterView> {
    let mut views: Vec<EncounterView> = Vec::new();

    for encounter in areas.iter().flat_map(|area| &area.pokemon_encounters) {
        let name = &encounter.pokemon.name;
        if name.is_empty() || views.iter().any(|view| &view.name == name) {
            continue;
        }

        let id = match encounter.pokemon.id() {
            Ok(id) => id,
            Err(e) => {
                tracing::debug!(pokemon = %name, error = %e, "Dropping encounter without id");
                continue;
            }
        };

        let times = encounter_times(encounter);
        views.push(EncounterView {
            id,
            name: name.clone(),
            display_name: name.replace('-', " "),
            sprite: sprite_url(id),
            day: times.day,
            night: times.night,
        });
    }

    views
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationView {
    pub id: u32,

    /// API name with every hyphen as a space
    pub name: String,

    pub kind: LocationKind,
    pub encounters: Vec<EncounterView>,
}

impl LocationView {
    pub fn assemble(location: &Location, areas: &[LocationArea]) -> Self {
        Self {
            id: location.id,
            name: location.name.replace('-', " "),
            kind: location_kind(&location.name),
            encounters: unique_encounters(areas),
        }
    }
}

/// Sort locations by display name
pub fn sort_locations(locations: &mut [LocationView]) {
    locations.sort_by(|a, b| a.name.cmp(&b.name));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn encounter(name: &str, id: u32, conditions: &[&str]) -> Value {
        let conditions: Vec<_> = conditions
            .iter()
            .map(|c| json!({ "name": c, "url": "" }))
            .collect();
        json!({
            "pokemon": { "name": name, "url": format!("https://pokeapi.co/api/v2/pokemon/{}/", id) },
            "version_details": [{
                "version": { "name": "red", "url": "" },
                "max_chance": 20,
                "encounter_details": [{
                    "chance": 20,
                    "condition_values": conditions,
                    "method": { "name": "walk", "url": "" }
                }]
            }]
        })
    }

    fn area(name: &str, encounters: Vec<Value>) -> LocationArea {
        serde_json::from_value(json!({ "id": 1, "name": name, "pokemon_encounters": encounters }))
            .unwrap()
    }

    #[test]
    fn test_game_lookup_and_region_key() {
        let game = Game::by_id("Sword-Shield").unwrap();

        assert_eq!(game.name, "Sword & Shield");
        assert_eq!(game.region_key(), "8");
        assert_eq!(Game::by_id("scarlet-violet").unwrap().region_key(), "9");
        assert_eq!(Game::by_id("red-blue").unwrap().region_key(), "kanto");
        assert!(matches!(
            Game::by_id("stadium"),
            Err(CatalogError::UnknownGame(ref id)) if id == "stadium"
        ));
    }

    #[test]
    fn test_location_kind() {
        assert_eq!(location_kind("kanto-route-1"), LocationKind::Route);
        assert_eq!(location_kind("rock-tunnel"), LocationKind::Cave);
        assert_eq!(location_kind("mt-moon-cave"), LocationKind::Cave);
        assert_eq!(location_kind("sea-route-19"), LocationKind::Route);
        assert_eq!(location_kind("lake-verity"), LocationKind::Water);
        assert_eq!(location_kind("pallet-town"), LocationKind::City);
    }

    #[test]
    fn test_encounter_times() {
        let areas = area(
            "route-29-area",
            vec![
                encounter("pidgey", 16, &[]),
                encounter("hoothoot", 163, &["time-night"]),
                encounter("sentret", 161, &["time-morning", "time-day"]),
                encounter("rattata", 19, &["time-day", "time-night"]),
                encounter("ledyba", 165, &["swarm-no"]),
            ],
        );
        let times: Vec<EncounterTimes> = areas
            .pokemon_encounters
            .iter()
            .map(encounter_times)
            .collect();

        assert_eq!(times[0], EncounterTimes { day: true, night: false });
        assert_eq!(times[1], EncounterTimes { day: false, night: true });
        assert_eq!(times[2], EncounterTimes { day: true, night: false });
        assert_eq!(times[3], EncounterTimes { day: true, night: true });
        assert_eq!(times[4], EncounterTimes { day: true, night: false });
    }

    #[test]
    fn test_unique_encounters_across_areas() {
        let areas = vec![
            area("viridian-forest-area", vec![
                encounter("caterpie", 10, &[]),
                encounter("pikachu", 25, &["time-night"]),
            ]),
            area("viridian-forest-deep", vec![
                encounter("pikachu", 25, &[]),
                encounter("weedle", 13, &[]),
            ]),
        ];

        let views = unique_encounters(&areas);
        let names: Vec<&str> = views.iter().map(|v| v.name.as_str()).collect();

        assert_eq!(names, vec!["caterpie", "pikachu", "weedle"]);
        // First occurrence wins
        assert!(views[1].night);
        assert!(!views[1].day);
        assert!(views[1].sprite.ends_with("/pokemon/25.png"));
    }

    #[test]
    fn test_encounter_without_id_dropped() {
        let mut broken = encounter("missingno", 0, &[]);
        broken["pokemon"]["url"] = json!("");
        let areas = vec![area("cinnabar-coast", vec![broken, encounter("tentacool", 72, &[])])];

        let views = unique_encounters(&areas);

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].display_name, "tentacool");
    }

    #[test]
    fn test_assemble_and_sort() {
        let tunnel: Location =
            serde_json::from_value(json!({ "id": 232, "name": "rock-tunnel", "areas": [] })).unwrap();
        let forest: Location =
            serde_json::from_value(json!({ "id": 155, "name": "viridian-forest", "areas": [] }))
                .unwrap();
        let town: Location =
            serde_json::from_value(json!({ "id": 86, "name": "pallet-town", "areas": [] })).unwrap();

        let mut locations = vec![
            LocationView::assemble(&forest, &[area("viridian-forest-area", vec![encounter("mr-mime", 122, &[])])]),
            LocationView::assemble(&tunnel, &[]),
            LocationView::assemble(&town, &[]),
        ];
        sort_locations(&mut locations);

        let names: Vec<&str> = locations.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["pallet town", "rock tunnel", "viridian forest"]);
        assert_eq!(locations[1].kind, LocationKind::Cave);
        assert_eq!(locations[2].encounters[0].display_name, "mr mime");
    }
}
