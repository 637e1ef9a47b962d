//! Pokemon type system and effectiveness chart

use std::str::FromStr;

use crate::error::MatchupError;

/// Pokemon types (18 types as of Gen 6+)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

/// How well one attacking type hits one defending type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effectiveness {
    SuperEffective,
    NotVeryEffective,
    NoEffect,
    Neutral,
}

impl Type {
    /// All 18 Pokemon types, in chart order
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Chart row for this type as the attacker
    pub fn matchups(&self) -> &'static Matchups {
        &TYPE_CHART[*self as usize]
    }

    /// Get type effectiveness against a single defending type
    pub fn effectiveness_against(&self, defender: Type) -> Effectiveness {
        let row = self.matchups();
        if row.super_effective.contains(&defender) {
            Effectiveness::SuperEffective
        } else if row.not_very_effective.contains(&defender) {
            Effectiveness::NotVeryEffective
        } else if row.no_effect.contains(&defender) {
            Effectiveness::NoEffect
        } else {
            Effectiveness::Neutral
        }
    }

    /// Parse a PokeAPI type name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Some(Type::Normal),
            "fire" => Some(Type::Fire),
            "water" => Some(Type::Water),
            "electric" => Some(Type::Electric),
            "grass" => Some(Type::Grass),
            "ice" => Some(Type::Ice),
            "fighting" => Some(Type::Fighting),
            "poison" => Some(Type::Poison),
            "ground" => Some(Type::Ground),
            "flying" => Some(Type::Flying),
            "psychic" => Some(Type::Psychic),
            "bug" => Some(Type::Bug),
            "rock" => Some(Type::Rock),
            "ghost" => Some(Type::Ghost),
            "dragon" => Some(Type::Dragon),
            "dark" => Some(Type::Dark),
            "steel" => Some(Type::Steel),
            "fairy" => Some(Type::Fairy),
            _ => None,
        }
    }

    /// PokeAPI name, always lowercase
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "normal",
            Type::Fire => "fire",
            Type::Water => "water",
            Type::Electric => "electric",
            Type::Grass => "grass",
            Type::Ice => "ice",
            Type::Fighting => "fighting",
            Type::Poison => "poison",
            Type::Ground => "ground",
            Type::Flying => "flying",
            Type::Psychic => "psychic",
            Type::Bug => "bug",
            Type::Rock => "rock",
            Type::Ghost => "ghost",
            Type::Dragon => "dragon",
            Type::Dark => "dark",
            Type::Steel => "steel",
            Type::Fairy => "fairy",
        }
    }

    /// Capitalized label for display
    pub fn label(&self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Type {
    type Err = MatchupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Type::from_name(s).ok_or_else(|| MatchupError::UnknownType(s.to_string()))
    }
}

/// One chart row: the defending types an attacking type is strong, weak or useless against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matchups {
    pub super_effective: &'static [Type],
    pub not_very_effective: &'static [Type],
    pub no_effect: &'static [Type],
}

use Type::*;

/// Type chart, one row per attacking type
///
/// Indexed by `Type as usize`. Types not listed in a row take neutral damage.
pub static TYPE_CHART: [Matchups; 18] = [
    // Normal attacking
    Matchups {
        super_effective: &[],
        not_very_effective: &[Rock, Steel],
        no_effect: &[Ghost],
    },
    // Fire attacking
    Matchups {
        super_effective: &[Grass, Ice, Bug, Steel],
        not_very_effective: &[Fire, Water, Rock, Dragon],
        no_effect: &[],
    },
    // Water attacking
    Matchups {
        super_effective: &[Fire, Ground, Rock],
        not_very_effective: &[Water, Grass, Dragon],
        no_effect: &[],
    },
    // Electric attacking
    Matchups {
        super_effective: &[Water, Flying],
        not_very_effective: &[Electric, Grass, Dragon],
        no_effect: &[Ground],
    },
    // Grass attacking
    Matchups {
        super_effective: &[Water, Ground, Rock],
        not_very_effective: &[Fire, Grass, Poison, Flying, Bug, Dragon, Steel],
        no_effect: &[],
    },
    // Ice attacking
    Matchups {
        super_effective: &[Grass, Ground, Flying, Dragon],
        not_very_effective: &[Fire, Water, Ice, Steel],
        no_effect: &[],
    },
    // Fighting attacking
    Matchups {
        super_effective: &[Normal, Ice, Rock, Dark, Steel],
        not_very_effective: &[Poison, Flying, Psychic, Bug, Fairy],
        no_effect: &[Ghost],
    },
    // Poison attacking
    Matchups {
        super_effective: &[Grass, Fairy],
        not_very_effective: &[Poison, Ground, Rock, Ghost],
        no_effect: &[Steel],
    },
    // Ground attacking
    Matchups {
        super_effective: &[Fire, Electric, Poison, Rock, Steel],
        not_very_effective: &[Grass, Bug],
        no_effect: &[Flying],
    },
    // Flying attacking
    Matchups {
        super_effective: &[Grass, Fighting, Bug],
        not_very_effective: &[Electric, Rock, Steel],
        no_effect: &[],
    },
    // Psychic attacking
    Matchups {
        super_effective: &[Fighting, Poison],
        not_very_effective: &[Psychic, Steel],
        no_effect: &[Dark],
    },
    // Bug attacking
    Matchups {
        super_effective: &[Grass, Psychic, Dark],
        not_very_effective: &[Fire, Fighting, Poison, Flying, Ghost, Steel, Fairy],
        no_effect: &[],
    },
    // Rock attacking
    Matchups {
        super_effective: &[Fire, Ice, Flying, Bug],
        not_very_effective: &[Fighting, Ground, Steel],
        no_effect: &[],
    },
    // Ghost attacking
    Matchups {
        super_effective: &[Psychic, Ghost],
        not_very_effective: &[Dark],
        no_effect: &[Normal],
    },
    // Dragon attacking
    Matchups {
        super_effective: &[Dragon],
        not_very_effective: &[Steel],
        no_effect: &[Fairy],
    },
    // Dark attacking
    Matchups {
        super_effective: &[Psychic, Ghost],
        not_very_effective: &[Fighting, Dark, Fairy],
        no_effect: &[],
    },
    // Steel attacking
    Matchups {
        super_effective: &[Ice, Rock, Fairy],
        not_very_effective: &[Fire, Water, Electric, Steel],
        no_effect: &[],
    },
    // Fairy attacking
    Matchups {
        super_effective: &[Fighting, Dragon, Dark],
        not_very_effective: &[Fire, Poison, Steel],
        no_effect: &[],
    },
];
