//! Enemy state and spawn-time stat derivation.
//!
//! Stats are computed once from (species, rarity, player level) and then
//! frozen for the encounter; only HP and status effects change afterwards.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::types::{AbilityKind, Rarity, SpeciesClass, SpeciesDef};
use crate::core::constants::*;
use crate::core::dice::Dice;
use crate::entity::status::{StatusEffects, StatusKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Stable identity within an encounter; referenced by `swallowed`.
    pub spawn_id: u32,
    pub species: String,
    pub name: String,
    pub class: SpeciesClass,
    pub rarity: Rarity,
    pub max_hp: i32,
    pub hp: i32,
    pub strength: i32,
    pub damage: Dice,
    pub defense: i32,
    pub ability: Option<AbilityKind>,
    pub xp_reward: u64,
    pub gold_reward: u64,
    // Per-encounter lifecycle flags
    pub revived: bool,
    pub summoned_at_50: bool,
    pub summoned_at_10: bool,
    /// Current alive-again revive probability; halves per revival.
    pub revive_chance: f64,
    pub statuses: StatusEffects,
}

/// Derives a fresh enemy from its species and rarity, scaled by the
/// player's level. Pure apart from the HP variance roll.
pub fn spawn<R: Rng + ?Sized>(
    species: &SpeciesDef,
    rarity: Rarity,
    player_level: u32,
    rng: &mut R,
) -> Enemy {
    let level_bonus_hp = ENEMY_HP_PER_PLAYER_LEVEL * (player_level.saturating_sub(1) as i32);
    let level_bonus_str =
        ENEMY_STRENGTH_PER_TWO_LEVELS * (player_level.saturating_sub(1) as i32 / 2);

    let variance = rng.gen_range(ENEMY_HP_VARIANCE_MIN..ENEMY_HP_VARIANCE_MAX);
    let mult = rarity.stat_multiplier();

    let max_hp = (((species.base_hp + level_bonus_hp) as f64 * mult) * variance).max(1.0) as i32;
    let strength = ((species.base_strength + level_bonus_str) as f64 * mult) as i32;
    let defense = (species.defense as f64 * mult) as i32;

    let reward_mult = rarity.reward_multiplier();
    let xp_reward = (species.xp_reward as f64 * reward_mult) as u64;
    let gold_reward = (species.gold_reward as f64 * reward_mult) as u64;

    let name = if rarity == Rarity::Common {
        species.name.to_string()
    } else {
        format!("{} {}", rarity.name(), species.name)
    };

    Enemy {
        spawn_id: 0,
        species: species.key.to_string(),
        name,
        class: species.class,
        rarity,
        max_hp,
        hp: max_hp,
        strength,
        damage: species.damage,
        defense,
        ability: species.ability,
        xp_reward,
        gold_reward,
        revived: false,
        summoned_at_50: false,
        summoned_at_10: false,
        revive_chance: 1.0,
        statuses: StatusEffects::new(),
    }
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn is_incapacitated(&self) -> bool {
        self.statuses.has(StatusKind::Petrified) || self.statuses.has(StatusKind::Paralyzed)
    }

    /// Applies an incoming hit. Enrage doubles the raw amount before
    /// defense; living shield doubles defense; `ignore_defense` (0..1)
    /// scales the effective defense down. HP is not floored at zero.
    pub fn take_damage(&mut self, amount: i32, ignore_defense: f64) -> i32 {
        let mut raw = amount as f64;
        if self.statuses.has(StatusKind::Enrage) {
            raw *= 2.0;
        }
        let mut defense = self.defense as f64;
        if self.statuses.has(StatusKind::LivingShield) {
            defense *= 2.0;
        }
        defense *= 1.0 - ignore_defense.clamp(0.0, 1.0);
        let dealt = ((raw - defense).floor() as i32).max(0);
        self.hp -= dealt;
        dealt
    }

    pub fn heal(&mut self, amount: i32) -> i32 {
        let healed = amount.min(self.max_hp - self.hp).max(0);
        self.hp += healed;
        healed
    }

    /// Revives at the given fraction of max HP (rounded down, minimum 1).
    pub fn revive_at_fraction(&mut self, fraction: f64) {
        self.hp = ((self.max_hp as f64 * fraction) as i32).max(1);
    }
}
