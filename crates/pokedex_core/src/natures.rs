//! Nature definitions and stat modifiers.
//!
//! A nature raises one battle stat by 10% and lowers another by 10%; five
//! natures are neutral. HP is never affected. Modifiers are expressed in
//! tenths (9 / 10 / 11) so stat math stays in exact integers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stats a nature can affect (HP is excluded by the game rules).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleStat {
    Atk,
    Def,
    SpA,
    SpD,
    Spe,
}

/// Effect of a nature on one particular stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NatureEffect {
    Boosting,
    Neutral,
    Hindering,
}

impl NatureEffect {
    /// Modifier in tenths: 11 = +10%, 10 = neutral, 9 = -10%.
    pub const fn modifier_tenths(self) -> u32 {
        match self {
            NatureEffect::Boosting => 11,
            NatureEffect::Neutral => 10,
            NatureEffect::Hindering => 9,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nature {
    Adamant,
    Bashful,
    Bold,
    Brave,
    Calm,
    Careful,
    Docile,
    Gentle,
    #[default]
    Hardy,
    Hasty,
    Impish,
    Jolly,
    Lax,
    Lonely,
    Mild,
    Modest,
    Naive,
    Naughty,
    Quiet,
    Quirky,
    Rash,
    Relaxed,
    Sassy,
    Serious,
    Timid,
}

static NATURE_LOOKUP: phf::Map<&'static str, Nature> = phf::phf_map! {
    "adamant" => Nature::Adamant,
    "bashful" => Nature::Bashful,
    "bold" => Nature::Bold,
    "brave" => Nature::Brave,
    "calm" => Nature::Calm,
    "careful" => Nature::Careful,
    "docile" => Nature::Docile,
    "gentle" => Nature::Gentle,
    "hardy" => Nature::Hardy,
    "hasty" => Nature::Hasty,
    "impish" => Nature::Impish,
    "jolly" => Nature::Jolly,
    "lax" => Nature::Lax,
    "lonely" => Nature::Lonely,
    "mild" => Nature::Mild,
    "modest" => Nature::Modest,
    "naive" => Nature::Naive,
    "naughty" => Nature::Naughty,
    "quiet" => Nature::Quiet,
    "quirky" => Nature::Quirky,
    "rash" => Nature::Rash,
    "relaxed" => Nature::Relaxed,
    "sassy" => Nature::Sassy,
    "serious" => Nature::Serious,
    "timid" => Nature::Timid,
};

impl Nature {
    pub const ALL: [Nature; 25] = [
        Nature::Adamant,
        Nature::Bashful,
        Nature::Bold,
        Nature::Brave,
        Nature::Calm,
        Nature::Careful,
        Nature::Docile,
        Nature::Gentle,
        Nature::Hardy,
        Nature::Hasty,
        Nature::Impish,
        Nature::Jolly,
        Nature::Lax,
        Nature::Lonely,
        Nature::Mild,
        Nature::Modest,
        Nature::Naive,
        Nature::Naughty,
        Nature::Quiet,
        Nature::Quirky,
        Nature::Rash,
        Nature::Relaxed,
        Nature::Sassy,
        Nature::Serious,
        Nature::Timid,
    ];

    /// Case-insensitive name lookup. Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Nature> {
        NATURE_LOOKUP
            .get(name)
            .or_else(|| NATURE_LOOKUP.get(name.to_ascii_lowercase().as_str()))
            .copied()
    }

    /// The stat this nature raises by 10%, if any.
    pub const fn raised(self) -> Option<BattleStat> {
        match self {
            Nature::Adamant | Nature::Brave | Nature::Lonely | Nature::Naughty => {
                Some(BattleStat::Atk)
            }
            Nature::Bold | Nature::Impish | Nature::Lax | Nature::Relaxed => Some(BattleStat::Def),
            Nature::Mild | Nature::Modest | Nature::Quiet | Nature::Rash => Some(BattleStat::SpA),
            Nature::Calm | Nature::Careful | Nature::Gentle | Nature::Sassy => {
                Some(BattleStat::SpD)
            }
            Nature::Hasty | Nature::Jolly | Nature::Naive | Nature::Timid => Some(BattleStat::Spe),
            _ => None,
        }
    }

    /// The stat this nature lowers by 10%, if any.
    pub const fn lowered(self) -> Option<BattleStat> {
        match self {
            Nature::Bold | Nature::Calm | Nature::Modest | Nature::Timid => Some(BattleStat::Atk),
            Nature::Gentle | Nature::Hasty | Nature::Lonely | Nature::Mild => Some(BattleStat::Def),
            Nature::Adamant | Nature::Careful | Nature::Impish | Nature::Jolly => {
                Some(BattleStat::SpA)
            }
            Nature::Lax | Nature::Naive | Nature::Naughty | Nature::Rash => Some(BattleStat::SpD),
            Nature::Brave | Nature::Quiet | Nature::Relaxed | Nature::Sassy => {
                Some(BattleStat::Spe)
            }
            _ => None,
        }
    }

    /// Effect of this nature on `stat`.
    pub fn effect_on(self, stat: BattleStat) -> NatureEffect {
        if self.raised() == Some(stat) {
            NatureEffect::Boosting
        } else if self.lowered() == Some(stat) {
            NatureEffect::Hindering
        } else {
            NatureEffect::Neutral
        }
    }

    /// Modifier in tenths for `stat` (9 = -10%, 10 = neutral, 11 = +10%).
    pub fn stat_modifier(self, stat: BattleStat) -> u8 {
        self.effect_on(stat).modifier_tenths() as u8
    }

    pub fn is_neutral(self) -> bool {
        self.raised().is_none()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Nature::Adamant => "Adamant",
            Nature::Bashful => "Bashful",
            Nature::Bold => "Bold",
            Nature::Brave => "Brave",
            Nature::Calm => "Calm",
            Nature::Careful => "Careful",
            Nature::Docile => "Docile",
            Nature::Gentle => "Gentle",
            Nature::Hardy => "Hardy",
            Nature::Hasty => "Hasty",
            Nature::Impish => "Impish",
            Nature::Jolly => "Jolly",
            Nature::Lax => "Lax",
            Nature::Lonely => "Lonely",
            Nature::Mild => "Mild",
            Nature::Modest => "Modest",
            Nature::Naive => "Naive",
            Nature::Naughty => "Naughty",
            Nature::Quiet => "Quiet",
            Nature::Quirky => "Quirky",
            Nature::Rash => "Rash",
            Nature::Relaxed => "Relaxed",
            Nature::Sassy => "Sassy",
            Nature::Serious => "Serious",
            Nature::Timid => "Timid",
        }
    }
}

impl fmt::Display for Nature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown nature name: {0:?}")]
pub struct ParseNatureError(pub String);

impl FromStr for Nature {
    type Err = ParseNatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Nature::from_name(s).ok_or_else(|| ParseNatureError(s.to_string()))
    }
}
