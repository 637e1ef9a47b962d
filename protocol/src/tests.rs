#[cfg(test)]
mod tests {
    use crate::{
        AbilityDetail, EvolutionChainResponse, LocationArea, MoveDetail, ParseError, Pokemon,
        PokemonSpecies, Region, parse, resource_id,
    };

    #[test]
    fn test_resource_id_trailing_slash() {
        let url = "https://pokeapi.co/api/v2/pokemon-species/25/";
        assert_eq!(resource_id(url).unwrap(), 25);
    }

    #[test]
    fn test_resource_id_without_trailing_slash() {
        // The id must sit before the trailing segment
        let url = "https://pokeapi.co/api/v2/pokemon-species/25";
        let result = resource_id(url);

        assert!(matches!(result, Err(ParseError::InvalidResourceId { .. })));
    }

    #[test]
    fn test_resource_id_empty() {
        let result = resource_id("");

        assert!(matches!(result, Err(ParseError::MissingField(_))));
    }

    #[test]
    fn test_resource_id_not_numeric() {
        let result = resource_id("https://pokeapi.co/api/v2/pokemon-species/pikachu/");

        assert!(matches!(result, Err(ParseError::InvalidResourceId { .. })));
    }

    #[test]
    fn test_parse_empty_body() {
        let result = parse::<Pokemon>("   ");

        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse::<Pokemon>("{\"id\": ");

        assert!(matches!(result, Err(ParseError::Json(_))));
    }

    #[test]
    fn test_parse_pokemon() {
        let body = r#"{
            "id": 6,
            "name": "charizard",
            "height": 17,
            "weight": 905,
            "sprites": {
                "front_default": "https://example.test/6.png",
                "front_shiny": null,
                "other": { "home": { "front_default": "https://example.test/home/6.png", "front_shiny": null } }
            },
            "types": [
                { "slot": 2, "type": { "name": "flying", "url": "https://pokeapi.co/api/v2/type/3/" } },
                { "slot": 1, "type": { "name": "fire", "url": "https://pokeapi.co/api/v2/type/10/" } }
            ],
            "moves": [
                {
                    "move": { "name": "mega-punch", "url": "https://pokeapi.co/api/v2/move/5/" },
                    "version_group_details": [
                        {
                            "level_learned_at": 0,
                            "move_learn_method": { "name": "machine", "url": "https://pokeapi.co/api/v2/move-learn-method/4/" },
                            "version_group": { "name": "red-blue", "url": "https://pokeapi.co/api/v2/version-group/1/" }
                        }
                    ]
                }
            ],
            "species": { "name": "charizard", "url": "https://pokeapi.co/api/v2/pokemon-species/6/" },
            "stats": [ { "base_stat": 78, "effort": 0, "stat": { "name": "hp", "url": "" } } ],
            "abilities": [ { "ability": { "name": "blaze", "url": "" }, "is_hidden": false, "slot": 1 } ]
        }"#;

        let pokemon: Pokemon = parse(body).unwrap();

        assert_eq!(pokemon.id, 6);
        assert_eq!(pokemon.type_names(), vec!["fire", "flying"]);
        assert!(pokemon.has_type("flying"));
        assert_eq!(pokemon.species.id().unwrap(), 6);
        assert_eq!(pokemon.sprites.front(true), None);
        assert_eq!(
            pokemon.sprites.home_front(false),
            Some("https://example.test/home/6.png")
        );
        assert_eq!(
            pokemon.moves[0].first_detail().unwrap().move_learn_method.name,
            "machine"
        );
        assert!(pokemon.forms.is_empty());
    }

    #[test]
    fn test_parse_species_without_chain() {
        let body = r#"{
            "id": 151,
            "name": "mew",
            "flavor_text_entries": [
                { "flavor_text": "So rare that it\fis still said to be a mirage.", "language": { "name": "en", "url": "" }, "version": { "name": "red", "url": "" } },
                { "flavor_text": "Wegen seiner Seltenheit", "language": { "name": "de", "url": "" }, "version": { "name": "x", "url": "" } }
            ]
        }"#;

        let species: PokemonSpecies = parse(body).unwrap();

        assert!(species.evolution_chain.is_none());
        assert_eq!(species.entries_in("en").count(), 1);
    }

    #[test]
    fn test_parse_evolution_chain() {
        let body = r#"{
            "id": 1,
            "chain": {
                "is_baby": false,
                "species": { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon-species/1/" },
                "evolution_details": [],
                "evolves_to": [
                    {
                        "is_baby": false,
                        "species": { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon-species/2/" },
                        "evolution_details": [
                            {
                                "item": null,
                                "trigger": { "name": "level-up", "url": "https://pokeapi.co/api/v2/evolution-trigger/1/" },
                                "held_item": null,
                                "known_move": null,
                                "location": null,
                                "min_level": 16,
                                "min_happiness": null,
                                "time_of_day": ""
                            }
                        ],
                        "evolves_to": []
                    }
                ]
            }
        }"#;

        let response: EvolutionChainResponse = parse(body).unwrap();
        let child = &response.chain.evolves_to[0];

        assert_eq!(response.chain.evolves_to.len(), 1);
        assert!(child.evolves_to.is_empty());
        assert_eq!(child.evolution_details[0].min_level, Some(16));
        assert_eq!(child.evolution_details[0].time_of_day.as_deref(), Some(""));
        assert!(child.evolution_details[0].item.is_none());
    }

    #[test]
    fn test_parse_move_without_power() {
        let body = r#"{ "name": "growl", "type": { "name": "normal", "url": "" }, "power": null, "accuracy": 100 }"#;

        let detail: MoveDetail = parse(body).unwrap();

        assert_eq!(detail.r#type.name, "normal");
        assert_eq!(detail.power, None);
        assert_eq!(detail.accuracy, Some(100));
    }

    #[test]
    fn test_ability_short_effect() {
        let body = r#"{
            "name": "overgrow",
            "effect_entries": [
                { "effect": "Lang", "short_effect": "Kurz", "language": { "name": "de", "url": "" } },
                { "effect": "Long", "short_effect": "Powers up Grass moves in a pinch.", "language": { "name": "en", "url": "" } }
            ]
        }"#;

        let ability: AbilityDetail = parse(body).unwrap();

        assert_eq!(
            ability.short_effect("en"),
            Some("Powers up Grass moves in a pinch.")
        );
        assert_eq!(ability.short_effect("fr"), None);
    }

    #[test]
    fn test_parse_region_locations() {
        let body = r#"{
            "id": 1,
            "name": "kanto",
            "locations": [
                { "name": "viridian-forest", "url": "https://pokeapi.co/api/v2/location/155/" },
                { "name": "rock-tunnel", "url": "https://pokeapi.co/api/v2/location/232/" }
            ],
            "main_generation": { "name": "generation-i", "url": "" }
        }"#;

        let region: Region = parse(body).unwrap();

        assert_eq!(region.name, "kanto");
        assert_eq!(region.locations[1].id().unwrap(), 232);
    }

    #[test]
    fn test_parse_location_area_conditions() {
        let body = r#"{
            "id": 321,
            "name": "viridian-forest-area",
            "pokemon_encounters": [
                {
                    "pokemon": { "name": "hoothoot", "url": "https://pokeapi.co/api/v2/pokemon/163/" },
                    "version_details": [
                        {
                            "version": { "name": "heartgold", "url": "" },
                            "max_chance": 10,
                            "encounter_details": [
                                {
                                    "min_level": 3,
                                    "max_level": 5,
                                    "chance": 10,
                                    "condition_values": [{ "name": "time-night", "url": "" }],
                                    "method": { "name": "walk", "url": "" }
                                }
                            ]
                        }
                    ]
                }
            ]
        }"#;

        let area: LocationArea = parse(body).unwrap();
        let encounter = &area.pokemon_encounters[0];

        assert_eq!(encounter.pokemon.id().unwrap(), 163);
        assert_eq!(encounter.condition_names().collect::<Vec<_>>(), vec!["time-night"]);
        assert_eq!(encounter.version_details[0].encounter_details[0].method.name, "walk");
    }
}
