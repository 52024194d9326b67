//! Damage estimation.
//!
//! One pure entry point, [`estimate_damage`], consolidates the damage math
//! that was previously re-implemented inline by every calculator view. Given
//! an attacker, defender, move, and field it produces a min/max damage
//! range, an always-crit variant for comparison display, percent-of-max-HP
//! figures, a hits-to-KO estimate, and a summary line.
//!
//! Same inputs always produce the same outputs; there is no hidden
//! randomness. The random roll is modeled as the closed interval
//! [0.85, 1.0] of the modified base damage.

mod context;
mod formula;

pub use context::{
    Attacker, Defender, Field, MoveCategory, MoveInput, Screens, Terrain, Weather,
    DEFAULT_CRIT_MULTIPLIER,
};
pub use formula::{base_damage, MIN_ROLL};

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Effectiveness;

/// Hits needed to KO the defender at maximum damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KoEstimate {
    /// KO in exactly this many hits (1 to 4).
    Hits(u8),

    /// Anything beyond 4 hits is not computed exactly.
    FiveOrMore,
}

impl fmt::Display for KoEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KoEstimate::Hits(1) => write!(f, "OHKO"),
            KoEstimate::Hits(n) => write!(f, "{n} hits"),
            KoEstimate::FiveOrMore => write!(f, "5 or more hits"),
        }
    }
}

/// Result of one damage estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageEstimate {
    pub min_damage: u32,
    pub max_damage: u32,

    /// Damage as percent of the defender's max HP, one decimal.
    pub min_percent: f64,
    pub max_percent: f64,

    /// Always-critical variant, for comparison display.
    pub crit_min_damage: u32,
    pub crit_max_damage: u32,
    pub crit_min_percent: f64,
    pub crit_max_percent: f64,

    pub effectiveness: Effectiveness,

    /// `None` for moves with no direct damage.
    pub hits_to_ko: Option<KoEstimate>,

    /// Human-readable summary line.
    pub description: String,
}

impl DamageEstimate {
    /// Result for a move that deals no direct damage.
    fn non_damaging() -> Self {
        Self {
            min_damage: 0,
            max_damage: 0,
            min_percent: 0.0,
            max_percent: 0.0,
            crit_min_damage: 0,
            crit_max_damage: 0,
            crit_min_percent: 0.0,
            crit_max_percent: 0.0,
            effectiveness: Effectiveness::NEUTRAL,
            hits_to_ko: None,
            description: "This move does not deal direct damage".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    #[error("defender's effective defense stat must be positive")]
    ZeroDefense,
    #[error("defender's max HP must be positive")]
    ZeroMaxHp,
}

/// Percent of max HP, rounded to one decimal.
fn percent_of(damage: u32, max_hp: u16) -> f64 {
    (f64::from(damage) / f64::from(max_hp) * 1000.0).round() / 10.0
}

/// Format a one-decimal percent the way the UI shows it (no trailing ".0").
fn fmt_percent(percent: f64) -> String {
    if percent.fract() == 0.0 {
        format!("{}", percent as u32)
    } else {
        format!("{percent:.1}")
    }
}

/// Smallest n in 1..=4 such that `max_damage * n >= max_hp`, else 5+.
fn hits_to_ko(max_damage: u32, max_hp: u16) -> KoEstimate {
    let max_hp = u32::from(max_hp);
    for n in 1..=4 {
        if max_damage.saturating_mul(n) >= max_hp {
            return KoEstimate::Hits(n as u8);
        }
    }
    KoEstimate::FiveOrMore
}

/// Estimate the damage range for one attack.
///
/// Status moves (or power 0) yield a "no direct damage" result rather than
/// an error. Boost stages outside [-6, 6] are clamped; stats are expected to
/// be pre-validated effective stats (see [`crate::stats`]).
pub fn estimate_damage(
    attacker: &Attacker,
    defender: &Defender,
    mov: &MoveInput,
    field: &Field,
) -> Result<DamageEstimate, EstimateError> {
    if defender.defense == 0 {
        return Err(EstimateError::ZeroDefense);
    }
    if defender.max_hp == 0 {
        return Err(EstimateError::ZeroMaxHp);
    }

    if !mov.deals_direct_damage() {
        return Ok(DamageEstimate::non_damaging());
    }
    let power = mov.power.unwrap_or(0);

    let effectiveness = defender.types.effectiveness_against(mov.move_type);

    let base = formula::base_damage(
        attacker.level,
        power,
        attacker.attack,
        defender.defense,
        attacker.boost,
        defender.boost,
    );

    let stab = if attacker.types.contains(mov.move_type) {
        1.5
    } else {
        1.0
    };
    let eff = effectiveness.multiplier();
    let weather = field.weather_modifier(mov.move_type);
    let burn = field.burn_modifier(mov.category);
    let screen = field.screen_modifier(mov.category);
    let crit = if field.is_critical {
        field.crit_multiplier
    } else {
        1.0
    };

    // Same multiplication order as the reference calculator; terrain is
    // accepted on the field but intentionally absent here.
    let min_damage = formula::apply_factors(
        base,
        &[MIN_ROLL, stab, eff, weather, burn, screen, crit],
    );
    let max_damage = formula::apply_factors(base, &[stab, eff, weather, burn, screen, crit]);
    let crit_min_damage = formula::apply_factors(
        base,
        &[MIN_ROLL, stab, eff, weather, burn, screen, field.crit_multiplier],
    );
    let crit_max_damage = formula::apply_factors(
        base,
        &[stab, eff, weather, burn, screen, field.crit_multiplier],
    );

    let min_percent = percent_of(min_damage, defender.max_hp);
    let max_percent = percent_of(max_damage, defender.max_hp);

    let description = if effectiveness.is_immune() {
        "No effect!".to_string()
    } else {
        let range = format!(
            "{}-{} ({}% - {}%)",
            min_damage,
            max_damage,
            fmt_percent(min_percent),
            fmt_percent(max_percent)
        );
        if effectiveness > Effectiveness::NEUTRAL {
            format!("Super effective! {range}")
        } else if effectiveness < Effectiveness::NEUTRAL {
            format!("Not very effective... {range}")
        } else {
            range
        }
    };

    Ok(DamageEstimate {
        min_damage,
        max_damage,
        min_percent,
        max_percent,
        crit_min_damage,
        crit_max_damage,
        crit_min_percent: percent_of(crit_min_damage, defender.max_hp),
        crit_max_percent: percent_of(crit_max_damage, defender.max_hp),
        effectiveness,
        hits_to_ko: Some(hits_to_ko(max_damage, defender.max_hp)),
        description,
    })
}
