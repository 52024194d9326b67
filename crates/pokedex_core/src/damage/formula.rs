//! Core damage formula math.
//!
//! Base damage follows the generation-accurate formula with truncation at
//! each step:
//!
//! `floor(floor(floor(floor(2*Level/5 + 2) * Power * Atk*boost / Def) / 50) + 2)`
//!
//! where `boost = 2^clamp(atkStage, -6, 6) / 2^clamp(defStage, -6, 6)`.
//! Because the boost ratio is a power-of-two fraction, the whole base
//! computation stays in exact integer arithmetic.

/// Minimum random roll, as a fraction of the computed value. The maximum
/// roll (1.0) is implicit.
pub const MIN_ROLL: f64 = 0.85;

/// Boost stages are clamped to [-6, 6]; shifting by `stage + 6` keeps every
/// intermediate a non-negative exponent.
#[inline]
fn boost_shift(stage: i8) -> u32 {
    (stage.clamp(-6, 6) + 6) as u32
}

/// Base damage before the random roll and multiplicative modifiers.
///
/// Returns 0 when the defense stat is 0 (callers validate this away; the
/// guard only keeps the division total).
pub fn base_damage(
    level: u8,
    power: u16,
    attack: u16,
    defense: u16,
    attack_stage: i8,
    defense_stage: i8,
) -> u32 {
    if defense == 0 {
        return 0;
    }

    // floor(2 * level / 5 + 2)
    let level_factor = 2 * u64::from(level) / 5 + 2;

    // floor(level_factor * power * attack * 2^a / (defense * 2^d)); worst
    // case fits comfortably in u64 (42 * 65535 * 65535 * 4096 < 2^63)
    let numerator = (level_factor * u64::from(power) * u64::from(attack))
        << boost_shift(attack_stage);
    let denominator = u64::from(defense) << boost_shift(defense_stage);

    let damage = numerator / denominator / 50 + 2;
    u32::try_from(damage).unwrap_or(u32::MAX)
}

/// Multiply `base` by each factor left to right, then floor.
///
/// The factor order matches the reference calculator so results agree with
/// it bit for bit; mathematically the product is order-independent.
#[inline]
pub fn apply_factors(base: u32, factors: &[f64]) -> u32 {
    let mut value = f64::from(base);
    for &factor in factors {
        value *= factor;
    }
    value.floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_damage_no_boosts() {
        // Level 50, 90 power, 100/100 stats:
        // floor(22 * 90 * 100 / 100) / 50 + 2 = 39 + 2 = 41
        assert_eq!(base_damage(50, 90, 100, 100, 0, 0), 41);

        // Level 100: floor(42 * 90 * 100 / 100) / 50 + 2 = 75 + 2 = 77
        assert_eq!(base_damage(100, 90, 100, 100, 0, 0), 77);
    }

    #[test]
    fn test_reference_golden_value() {
        // Level 50 attacker with effective Attack 167 (base 100 / IV 31 /
        // EV 252 / boosting nature), 80 power, defense 100:
        // floor(floor(22 * 80 * 167 / 100) / 50) + 2 = 58 + 2 = 60
        assert_eq!(base_damage(50, 80, 167, 100, 0, 0), 60);
    }

    #[test]
    fn test_boost_stages() {
        let neutral = base_damage(50, 80, 100, 100, 0, 0);

        // +2 attack quadruples the attack term (2^2)
        let plus_two = base_damage(50, 80, 100, 100, 2, 0);
        assert!(plus_two > neutral);
        assert_eq!(plus_two, base_damage(50, 80, 400, 100, 0, 0));

        // -1 defense doubles relative to +1 defense direction: 2^-1 on the
        // defense side is equivalent to doubling attack
        assert_eq!(
            base_damage(50, 80, 100, 100, 0, -1),
            base_damage(50, 80, 200, 100, 0, 0)
        );

        // Stages are clamped to [-6, 6]
        assert_eq!(
            base_damage(50, 80, 100, 100, 9, 0),
            base_damage(50, 80, 100, 100, 6, 0)
        );
        assert_eq!(
            base_damage(50, 80, 100, 100, 0, -13),
            base_damage(50, 80, 100, 100, 0, -6)
        );
    }

    #[test]
    fn test_zero_defense_guard() {
        assert_eq!(base_damage(50, 80, 100, 0, 0, 0), 0);
    }

    #[test]
    fn test_extreme_inputs_saturate_instead_of_wrapping() {
        // 42 * 65535 * 65535 * 2^12 / 1 / 50 overflows u32; the result must
        // cap, not wrap around
        assert_eq!(base_damage(100, 65535, 65535, 1, 6, -6), u32::MAX);
    }

    #[test]
    fn test_roll_endpoints() {
        assert_eq!(apply_factors(60, &[]), 60);
        // floor(60 * 0.85) = 51 (the f64 product lands just above 51)
        assert_eq!(apply_factors(60, &[MIN_ROLL]), 51);
        assert_eq!(apply_factors(100, &[MIN_ROLL]), 85);
        // floor(60 * 0.85 * 1.5) = 76, the 0.85 product rounds up past 51
        assert_eq!(apply_factors(60, &[MIN_ROLL, 1.5]), 76);
    }
}
