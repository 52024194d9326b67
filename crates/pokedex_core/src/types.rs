//! Type definitions and the static type-effectiveness chart.
//!
//! The chart uses a 4-scale fixed-point encoding so every legal multiplier
//! is an exact integer: 0 = immune, 1 = 0.25x, 2 = 0.5x, 4 = 1x, 8 = 2x,
//! 16 = 4x. Pairs not listed in the reference chart are genuinely neutral.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Number of types in the chart (Gen 6+ chart, Normal through Fairy).
pub const TYPE_COUNT: usize = 18;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Type {
    #[default]
    Normal = 0,
    Fighting = 1,
    Flying = 2,
    Poison = 3,
    Ground = 4,
    Rock = 5,
    Bug = 6,
    Ghost = 7,
    Steel = 8,
    Fire = 9,
    Water = 10,
    Grass = 11,
    Electric = 12,
    Psychic = 13,
    Ice = 14,
    Dragon = 15,
    Dark = 16,
    Fairy = 17,
}

static TYPE_LOOKUP: phf::Map<&'static str, Type> = phf::phf_map! {
    "normal" => Type::Normal,
    "fighting" => Type::Fighting,
    "flying" => Type::Flying,
    "poison" => Type::Poison,
    "ground" => Type::Ground,
    "rock" => Type::Rock,
    "bug" => Type::Bug,
    "ghost" => Type::Ghost,
    "steel" => Type::Steel,
    "fire" => Type::Fire,
    "water" => Type::Water,
    "grass" => Type::Grass,
    "electric" => Type::Electric,
    "psychic" => Type::Psychic,
    "ice" => Type::Ice,
    "dragon" => Type::Dragon,
    "dark" => Type::Dark,
    "fairy" => Type::Fairy,
};

impl Type {
    /// All types, in chart order.
    pub const ALL: [Type; TYPE_COUNT] = [
        Type::Normal,
        Type::Fighting,
        Type::Flying,
        Type::Poison,
        Type::Ground,
        Type::Rock,
        Type::Bug,
        Type::Ghost,
        Type::Steel,
        Type::Fire,
        Type::Water,
        Type::Grass,
        Type::Electric,
        Type::Psychic,
        Type::Ice,
        Type::Dragon,
        Type::Dark,
        Type::Fairy,
    ];

    /// Case-insensitive name lookup. Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Type> {
        TYPE_LOOKUP
            .get(name)
            .or_else(|| TYPE_LOOKUP.get(name.to_ascii_lowercase().as_str()))
            .copied()
    }

    /// Lowercase name as used by the public data API.
    pub const fn name(self) -> &'static str {
        match self {
            Type::Normal => "normal",
            Type::Fighting => "fighting",
            Type::Flying => "flying",
            Type::Poison => "poison",
            Type::Ground => "ground",
            Type::Rock => "rock",
            Type::Bug => "bug",
            Type::Ghost => "ghost",
            Type::Steel => "steel",
            Type::Fire => "fire",
            Type::Water => "water",
            Type::Grass => "grass",
            Type::Electric => "electric",
            Type::Psychic => "psychic",
            Type::Ice => "ice",
            Type::Dragon => "dragon",
            Type::Dark => "dark",
            Type::Fairy => "fairy",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown type names fail loudly; only pairs absent from the chart are
/// allowed to default to neutral.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown type name: {0:?}")]
pub struct ParseTypeError(pub String);

impl FromStr for Type {
    type Err = ParseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Type::from_name(s).ok_or_else(|| ParseTypeError(s.to_string()))
    }
}

/// A defender's one or two types.
///
/// A dual typing never repeats a type, so constructing a pair from two equal
/// types collapses to a mono typing. This keeps effectiveness products from
/// double-counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypePair {
    primary: Type,
    secondary: Option<Type>,
}

impl TypePair {
    pub const fn mono(primary: Type) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    pub fn dual(primary: Type, secondary: Type) -> Self {
        Self {
            primary,
            secondary: (secondary != primary).then_some(secondary),
        }
    }

    pub const fn primary(self) -> Type {
        self.primary
    }

    pub const fn secondary(self) -> Option<Type> {
        self.secondary
    }

    pub fn contains(self, t: Type) -> bool {
        self.primary == t || self.secondary == Some(t)
    }

    /// Combined effectiveness of `attack` against this typing.
    pub fn effectiveness_against(self, attack: Type) -> Effectiveness {
        match self.secondary {
            Some(second) => resolve_effectiveness(attack, &[self.primary, second]),
            None => resolve_effectiveness(attack, &[self.primary]),
        }
    }
}

/// Type effectiveness on the 4-scale fixed-point encoding.
///
/// Legal values are 0 (immune), 1 (0.25x), 2 (0.5x), 4 (1x), 8 (2x),
/// 16 (4x).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct Effectiveness(u8);

impl Effectiveness {
    pub const IMMUNE: Self = Self(0);
    pub const QUARTER: Self = Self(1);
    pub const HALF: Self = Self(2);
    pub const NEUTRAL: Self = Self(4);
    pub const DOUBLE: Self = Self(8);
    pub const QUADRUPLE: Self = Self(16);

    /// Raw 4-scale value.
    pub const fn scale(self) -> u8 {
        self.0
    }

    /// Real multiplier in {0, 0.25, 0.5, 1, 2, 4}.
    pub fn multiplier(self) -> f64 {
        f64::from(self.0) / 4.0
    }

    pub const fn is_immune(self) -> bool {
        self.0 == 0
    }

    /// Multiply two effectiveness values (4-scale: 4 * 4 / 4 = 4).
    pub const fn combine(self, other: Self) -> Self {
        Self((self.0 as u16 * other.0 as u16 / 4) as u8)
    }

    /// UI label for this multiplier.
    pub const fn label(self) -> &'static str {
        match self.0 {
            0 => "No Effect",
            1 => "0.25x - Very Weak",
            2 => "0.5x - Not Very Effective",
            8 => "2x - Super Effective!",
            16 => "4x - Extremely Effective!",
            _ => "1x - Normal Damage",
        }
    }
}

/// Static chart indexed `[attacker][defender]`, 4-scale values.
///
/// Transcribed from the reference Gen 6+ chart; entries the reference leaves
/// unlisted are neutral (4).
pub static TYPE_CHART: [[u8; TYPE_COUNT]; TYPE_COUNT] = [
    // defender:
    // Nor Fig Fly Poi Gro Roc Bug Gho Ste Fir Wat Gra Ele Psy Ice Dra Dar Fai
    [4, 4, 4, 4, 4, 2, 4, 0, 2, 4, 4, 4, 4, 4, 4, 4, 4, 4], // Normal
    [8, 4, 2, 2, 4, 8, 2, 0, 8, 4, 4, 4, 4, 2, 8, 4, 8, 2], // Fighting
    [4, 8, 4, 4, 4, 2, 8, 4, 2, 4, 4, 8, 2, 4, 4, 4, 4, 4], // Flying
    [4, 4, 4, 2, 2, 2, 4, 2, 0, 4, 4, 8, 4, 4, 4, 4, 4, 8], // Poison
    [4, 4, 0, 8, 4, 8, 2, 4, 8, 8, 4, 2, 8, 4, 4, 4, 4, 4], // Ground
    [4, 2, 8, 4, 2, 4, 8, 4, 2, 8, 4, 4, 4, 4, 8, 4, 4, 4], // Rock
    [4, 2, 2, 2, 4, 4, 4, 2, 2, 2, 4, 8, 4, 8, 4, 4, 8, 2], // Bug
    [0, 4, 4, 4, 4, 4, 4, 8, 4, 4, 4, 4, 4, 8, 4, 4, 2, 4], // Ghost
    [4, 4, 4, 4, 4, 8, 4, 4, 2, 2, 2, 4, 2, 4, 8, 4, 4, 8], // Steel
    [4, 4, 4, 4, 4, 2, 8, 4, 8, 2, 2, 8, 4, 4, 8, 2, 4, 4], // Fire
    [4, 4, 4, 4, 8, 8, 4, 4, 4, 8, 2, 2, 4, 4, 4, 2, 4, 4], // Water
    [4, 4, 2, 2, 8, 8, 2, 4, 2, 2, 8, 2, 4, 4, 4, 2, 4, 4], // Grass
    [4, 4, 8, 4, 0, 4, 4, 4, 4, 4, 8, 2, 2, 4, 4, 2, 4, 4], // Electric
    [4, 8, 4, 8, 4, 4, 4, 4, 2, 4, 4, 4, 4, 2, 4, 4, 0, 4], // Psychic
    [4, 4, 8, 4, 8, 4, 4, 4, 2, 2, 2, 8, 4, 4, 2, 8, 4, 4], // Ice
    [4, 4, 4, 4, 4, 4, 4, 4, 2, 4, 4, 4, 4, 4, 4, 8, 4, 0], // Dragon
    [4, 2, 4, 4, 4, 4, 4, 8, 4, 4, 4, 4, 4, 8, 4, 4, 2, 2], // Dark
    [4, 8, 4, 2, 4, 4, 4, 4, 2, 2, 4, 4, 4, 4, 4, 8, 8, 4], // Fairy
];

/// Effectiveness of `attack` against a single defending type.
pub const fn type_effectiveness(attack: Type, defend: Type) -> Effectiveness {
    Effectiveness(TYPE_CHART[attack as usize][defend as usize])
}

/// Combined effectiveness of `attack` against one or more defending types.
///
/// The product is commutative over the defending types, and an immunity is
/// absorbing: once the product reaches 0 no further entry can raise it.
pub fn resolve_effectiveness(attack: Type, defend_types: &[Type]) -> Effectiveness {
    let mut combined = Effectiveness::NEUTRAL;
    for &defend in defend_types {
        combined = combined.combine(type_effectiveness(attack, defend));
        if combined.is_immune() {
            break;
        }
    }
    combined
}
