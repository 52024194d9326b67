//! pokedex_core - Calculation and state core for a Pokédex application
//!
//! This library consolidates the stat math, type chart, and damage
//! estimation that the application's views all share, plus an explicit
//! state container for favorites, collections, teams, and the comparison
//! selection. The calculators are pure functions: no I/O, no hidden
//! randomness, no cross-call state.

/// Type definitions and type chart
pub mod types;

/// Nature definitions and stat modifiers
pub mod natures;

/// Effective stat calculation
pub mod stats;

/// Damage estimation
pub mod damage;

/// User state container (favorites, teams, comparison)
pub mod store;

// Re-export commonly used types
pub use damage::{
    estimate_damage, Attacker, DamageEstimate, Defender, EstimateError, Field, KoEstimate,
    MoveCategory, MoveInput, Screens, Terrain, Weather,
};
pub use natures::{BattleStat, Nature, NatureEffect};
pub use stats::{effective_hp, effective_stat, StatError, StatSpread, Stats};
pub use store::{DexStore, Preferences, StoreEvent, StoreState, Theme};
pub use types::{resolve_effectiveness, Effectiveness, Type, TypePair};
