//! Battle context for a single damage estimate.
//!
//! Everything here is transient: constructed per calculation, discarded with
//! the result. There is no battle lifecycle behind it.

use bitflags::bitflags;

use crate::types::{Type, TypePair};

/// Default critical-hit multiplier.
///
/// Later generations use different crit rates and multipliers; any variation
/// is caller configuration via [`Field::crit_multiplier`], never inferred.
pub const DEFAULT_CRIT_MULTIPLIER: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

/// The move being estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveInput {
    /// Base power; `None` (or 0) marks a move with no direct damage.
    pub power: Option<u16>,

    pub move_type: Type,

    pub category: MoveCategory,
}

impl MoveInput {
    pub const fn new(power: u16, move_type: Type, category: MoveCategory) -> Self {
        Self {
            power: Some(power),
            move_type,
            category,
        }
    }

    /// A status move (no power).
    pub const fn status(move_type: Type) -> Self {
        Self {
            power: None,
            move_type,
            category: MoveCategory::Status,
        }
    }

    pub fn deals_direct_damage(&self) -> bool {
        self.category != MoveCategory::Status && self.power.unwrap_or(0) > 0
    }
}

/// The attacking side of the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attacker {
    /// Level (1-100)
    pub level: u8,

    /// Effective attacking stat (Atk or SpA, matching the move's category).
    pub attack: u16,

    pub types: TypePair,

    /// Attack stat stage (-6 to +6)
    pub boost: i8,
}

/// The defending side of the estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defender {
    /// Effective defending stat (Def or SpD, matching the move's category).
    pub defense: u16,

    pub max_hp: u16,

    pub types: TypePair,

    /// Defense stat stage (-6 to +6)
    pub boost: i8,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Weather {
    #[default]
    None,
    Sun,
    Rain,
    /// Accepted but damage-neutral in this calculator.
    Sand,
    /// Accepted but damage-neutral in this calculator.
    Hail,
}

/// Terrain is accepted as a parameter but never modifies damage; the source
/// calculator carries it without applying it, and that behavior is preserved
/// pending clarification.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Terrain {
    #[default]
    None,
    Electric,
    Grassy,
    Misty,
    Psychic,
}

bitflags! {
    /// Active damage-reducing screens on the defender's side.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct Screens: u8 {
        const REFLECT      = 1 << 0;
        const LIGHT_SCREEN = 1 << 1;
        const AURORA_VEIL  = 1 << 2;
    }
}

/// Situational flags for one estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub is_critical: bool,

    /// Whether the attacker is burned (halves physical damage).
    pub attacker_burned: bool,

    pub weather: Weather,

    pub terrain: Terrain,

    pub screens: Screens,

    /// Fixed x1.5 unless the caller opts into a different constant.
    pub crit_multiplier: f64,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            is_critical: false,
            attacker_burned: false,
            weather: Weather::None,
            terrain: Terrain::None,
            screens: Screens::empty(),
            crit_multiplier: DEFAULT_CRIT_MULTIPLIER,
        }
    }
}

impl Field {
    /// Weather modifier: sun boosts fire and dampens water, rain the
    /// reverse. Other weather leaves damage untouched.
    pub fn weather_modifier(&self, move_type: Type) -> f64 {
        match (self.weather, move_type) {
            (Weather::Sun, Type::Fire) | (Weather::Rain, Type::Water) => 1.5,
            (Weather::Sun, Type::Water) | (Weather::Rain, Type::Fire) => 0.5,
            _ => 1.0,
        }
    }

    /// Screen modifier for the move's category. Aurora Veil covers both
    /// categories.
    pub fn screen_modifier(&self, category: MoveCategory) -> f64 {
        let screened = self.screens.contains(Screens::AURORA_VEIL)
            || match category {
                MoveCategory::Physical => self.screens.contains(Screens::REFLECT),
                MoveCategory::Special => self.screens.contains(Screens::LIGHT_SCREEN),
                MoveCategory::Status => false,
            };
        if screened {
            0.5
        } else {
            1.0
        }
    }

    /// Burn modifier: physical moves from a burned attacker are halved.
    pub fn burn_modifier(&self, category: MoveCategory) -> f64 {
        if self.attacker_burned && category == MoveCategory::Physical {
            0.5
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_modifier() {
        let sun = Field {
            weather: Weather::Sun,
            ..Field::default()
        };
        assert_eq!(sun.weather_modifier(Type::Fire), 1.5);
        assert_eq!(sun.weather_modifier(Type::Water), 0.5);
        assert_eq!(sun.weather_modifier(Type::Electric), 1.0);

        let rain = Field {
            weather: Weather::Rain,
            ..Field::default()
        };
        assert_eq!(rain.weather_modifier(Type::Water), 1.5);
        assert_eq!(rain.weather_modifier(Type::Fire), 0.5);

        // Sand and hail are accepted but never modify damage
        let sand = Field {
            weather: Weather::Sand,
            ..Field::default()
        };
        assert_eq!(sand.weather_modifier(Type::Rock), 1.0);
    }

    #[test]
    fn test_screen_modifier() {
        let reflect = Field {
            screens: Screens::REFLECT,
            ..Field::default()
        };
        assert_eq!(reflect.screen_modifier(MoveCategory::Physical), 0.5);
        assert_eq!(reflect.screen_modifier(MoveCategory::Special), 1.0);

        let veil = Field {
            screens: Screens::AURORA_VEIL,
            ..Field::default()
        };
        assert_eq!(veil.screen_modifier(MoveCategory::Physical), 0.5);
        assert_eq!(veil.screen_modifier(MoveCategory::Special), 0.5);
    }

    #[test]
    fn test_burn_only_affects_physical() {
        let burned = Field {
            attacker_burned: true,
            ..Field::default()
        };
        assert_eq!(burned.burn_modifier(MoveCategory::Physical), 0.5);
        assert_eq!(burned.burn_modifier(MoveCategory::Special), 1.0);
    }

    #[test]
    fn test_status_move_has_no_direct_damage() {
        assert!(!MoveInput::status(Type::Grass).deals_direct_damage());
        assert!(!MoveInput {
            power: Some(0),
            move_type: Type::Normal,
            category: MoveCategory::Physical,
        }
        .deals_direct_damage());
        assert!(MoveInput::new(80, Type::Water, MoveCategory::Special).deals_direct_damage());
    }
}
