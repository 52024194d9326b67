//! Effective stat calculation from base stats, IVs, EVs, level, and nature.
//!
//! Out-of-range inputs are rejected with [`StatError`], never silently
//! clamped, so the formula contract stays precise.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::natures::{BattleStat, Nature, NatureEffect};

/// Maximum individual value per stat.
pub const MAX_IV: u8 = 31;

/// Maximum effort value per stat.
pub const MAX_EV: u8 = 252;

/// Conventional cap on the sum of all effort values.
pub const MAX_EV_TOTAL: u16 = 510;

/// A six-stat block, either base stats or fully derived in-battle stats.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

impl Stats {
    pub const fn new(hp: u16, atk: u16, def: u16, spa: u16, spd: u16, spe: u16) -> Self {
        Self {
            hp,
            atk,
            def,
            spa,
            spd,
            spe,
        }
    }

    /// Stats in canonical order [HP, Atk, Def, SpA, SpD, Spe].
    pub const fn as_array(self) -> [u16; 6] {
        [self.hp, self.atk, self.def, self.spa, self.spd, self.spe]
    }

    pub fn total(self) -> u32 {
        self.as_array().iter().map(|&s| u32::from(s)).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatError {
    #[error("level {0} out of range (1-100)")]
    LevelOutOfRange(u8),
    #[error("IV {0} out of range (0-31)")]
    IvOutOfRange(u8),
    #[error("EV {0} out of range (0-252)")]
    EvOutOfRange(u8),
    #[error("EV total {0} exceeds the conventional cap of 510")]
    EvTotalExceeded(u16),
    #[error("base stat must be positive")]
    ZeroBaseStat,
    #[error("computed stat {0} does not fit in a 16-bit stat value")]
    StatOverflow(u32),
}

fn validate(base: u16, iv: u8, ev: u8, level: u8) -> Result<(), StatError> {
    if base == 0 {
        return Err(StatError::ZeroBaseStat);
    }
    if !(1..=100).contains(&level) {
        return Err(StatError::LevelOutOfRange(level));
    }
    if iv > MAX_IV {
        return Err(StatError::IvOutOfRange(iv));
    }
    if ev > MAX_EV {
        return Err(StatError::EvOutOfRange(ev));
    }
    Ok(())
}

/// Effective HP stat.
///
/// `floor((2*base + IV + floor(EV/4)) * level / 100) + level + 10`, with the
/// base = 1 special case (single-HP species) always yielding 1.
pub fn effective_hp(base: u16, iv: u8, ev: u8, level: u8) -> Result<u16, StatError> {
    validate(base, iv, ev, level)?;

    if base == 1 {
        return Ok(1);
    }

    let base = u32::from(base);
    let iv = u32::from(iv);
    let ev = u32::from(ev);
    let level = u32::from(level);

    let hp = (2 * base + iv + ev / 4) * level / 100 + level + 10;
    u16::try_from(hp).map_err(|_| StatError::StatOverflow(hp))
}

/// Effective non-HP stat.
///
/// `floor((floor((2*base + IV + floor(EV/4)) * level / 100) + 5) * m)` where
/// m is the nature modifier. The multiplication runs in exact tenths
/// (11/10, 10/10, 9/10), which equals the floored 1.1/1.0/0.9 float formula
/// for every in-range input.
pub fn effective_stat(
    base: u16,
    iv: u8,
    ev: u8,
    level: u8,
    nature: NatureEffect,
) -> Result<u16, StatError> {
    validate(base, iv, ev, level)?;

    let base = u32::from(base);
    let iv = u32::from(iv);
    let ev = u32::from(ev);
    let level = u32::from(level);

    let raw = (2 * base + iv + ev / 4) * level / 100 + 5;
    let stat = raw * nature.modifier_tenths() / 10;
    u16::try_from(stat).map_err(|_| StatError::StatOverflow(stat))
}

/// Level, IVs, EVs, and nature for one individual.
///
/// Builder-style configuration; validation happens when stats are derived,
/// not while fields are being set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSpread {
    /// Level (1-100)
    pub level: u8,

    /// Individual values [HP, Atk, Def, SpA, SpD, Spe] (0-31)
    pub ivs: [u8; 6],

    /// Effort values [HP, Atk, Def, SpA, SpD, Spe] (0-252 each, 510 total)
    pub evs: [u8; 6],

    /// Nature (stat modifier lookup)
    pub nature: Nature,
}

impl Default for StatSpread {
    fn default() -> Self {
        Self {
            level: 50,
            ivs: [MAX_IV; 6],
            evs: [0; 6],
            nature: Nature::default(),
        }
    }
}

impl StatSpread {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn ivs(mut self, ivs: [u8; 6]) -> Self {
        self.ivs = ivs;
        self
    }

    pub fn evs(mut self, evs: [u8; 6]) -> Self {
        self.evs = evs;
        self
    }

    pub fn nature(mut self, nature: Nature) -> Self {
        self.nature = nature;
        self
    }

    /// Derive the full effective stat block for a species' base stats.
    pub fn stats(&self, base: Stats) -> Result<Stats, StatError> {
        let ev_total: u16 = self.evs.iter().map(|&ev| u16::from(ev)).sum();
        if ev_total > MAX_EV_TOTAL {
            return Err(StatError::EvTotalExceeded(ev_total));
        }

        let base = base.as_array();
        let nature_stats = [
            BattleStat::Atk,
            BattleStat::Def,
            BattleStat::SpA,
            BattleStat::SpD,
            BattleStat::Spe,
        ];

        let hp = effective_hp(base[0], self.ivs[0], self.evs[0], self.level)?;
        let mut others = [0u16; 5];
        for (i, stat) in nature_stats.into_iter().enumerate() {
            others[i] = effective_stat(
                base[i + 1],
                self.ivs[i + 1],
                self.evs[i + 1],
                self.level,
                self.nature.effect_on(stat),
            )?;
        }

        Ok(Stats::new(
            hp, others[0], others[1], others[2], others[3], others[4],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hp_formula() {
        // base 100, IV 31, EV 252, level 50:
        // floor((200 + 31 + 63) * 50 / 100) + 50 + 10 = 147 + 60 = 207
        assert_eq!(effective_hp(100, 31, 252, 50), Ok(207));

        // level 100, no investment: floor((90 + 0 + 0) * 100 / 100) + 110
        assert_eq!(effective_hp(45, 0, 0, 100), Ok(200));
    }

    #[test]
    fn test_single_hp_species() {
        // base HP 1 always yields 1, regardless of investment
        assert_eq!(effective_hp(1, 31, 252, 100), Ok(1));
        assert_eq!(effective_hp(1, 0, 0, 5), Ok(1));
    }

    #[test]
    fn test_non_hp_formula() {
        // base 100, IV 31, EV 252, level 50, boosting nature:
        // floor((floor(294 * 50 / 100) + 5) * 1.1) = floor(152 * 1.1) = 167
        assert_eq!(
            effective_stat(100, 31, 252, 50, NatureEffect::Boosting),
            Ok(167)
        );
        assert_eq!(
            effective_stat(100, 31, 252, 50, NatureEffect::Neutral),
            Ok(152)
        );
        assert_eq!(
            effective_stat(100, 31, 252, 50, NatureEffect::Hindering),
            Ok(136)
        );
    }

    #[test]
    fn test_out_of_range_is_rejected_not_clamped() {
        assert_eq!(
            effective_stat(100, 32, 0, 50, NatureEffect::Neutral),
            Err(StatError::IvOutOfRange(32))
        );
        assert_eq!(
            effective_stat(100, 0, 253, 50, NatureEffect::Neutral),
            Err(StatError::EvOutOfRange(253))
        );
        assert_eq!(
            effective_stat(100, 0, 0, 0, NatureEffect::Neutral),
            Err(StatError::LevelOutOfRange(0))
        );
        assert_eq!(
            effective_stat(100, 0, 0, 101, NatureEffect::Neutral),
            Err(StatError::LevelOutOfRange(101))
        );
        assert_eq!(
            effective_stat(0, 0, 0, 50, NatureEffect::Neutral),
            Err(StatError::ZeroBaseStat)
        );
        assert_eq!(effective_hp(100, 0, 255, 50), Err(StatError::EvOutOfRange(255)));
    }

    #[test]
    fn test_spread_derives_full_block() {
        // Garchomp-like base stats with an Adamant physical spread
        let base = Stats::new(108, 130, 95, 80, 85, 102);
        let spread = StatSpread::new()
            .level(50)
            .evs([4, 252, 0, 0, 0, 252])
            .nature(Nature::Adamant);

        let stats = spread.stats(base).unwrap();
        // HP: floor((216 + 31 + 1) * 50 / 100) + 60 = 124 + 60 = 184
        assert_eq!(stats.hp, 184);
        // Atk: floor((floor((260 + 31 + 63) * 50 / 100) + 5) * 1.1)
        //    = floor(182 * 1.1) = 200
        assert_eq!(stats.atk, 200);
        // SpA is hindered by Adamant
        assert_eq!(stats.spa, ((2 * 80 + 31) * 50 / 100 + 5) * 9 / 10);
    }

    #[test]
    fn test_oversized_result_is_rejected_not_wrapped() {
        // (2 * 60000) * 100 / 100 + 100 + 10 = 120110, which does not fit
        // in u16 and must not wrap to 54574
        assert_eq!(
            effective_hp(60000, 0, 0, 100),
            Err(StatError::StatOverflow(120110))
        );
        assert_eq!(
            effective_stat(60000, 0, 0, 100, NatureEffect::Neutral),
            Err(StatError::StatOverflow(120005))
        );
    }

    #[test]
    fn test_spread_enforces_ev_total() {
        let base = Stats::new(100, 100, 100, 100, 100, 100);
        let spread = StatSpread::new().evs([252, 252, 252, 0, 0, 0]);
        assert_eq!(spread.stats(base), Err(StatError::EvTotalExceeded(756)));
    }
}
