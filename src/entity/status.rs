//! Status effects shared by the player and enemies.
//!
//! Effects are keyed by kind and tick exactly once per owner's
//! end-of-turn. The tick only recognizes a fixed list of kinds per side;
//! anything else is inert until some ability check consumes it. New
//! timed effects must be added both at their apply site and to the tick
//! list for their side.

use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::constants::{DIGESTION_DICE_COUNT, DIGESTION_DICE_SIDES};
use crate::core::dice::Dice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusKind {
    // Player-side
    Strength,
    Stonehide,
    Poison,
    Swallowed,
    // Enemy-side
    Enrage,
    LivingShield,
    UltraFocus,
    // Either side
    Petrified,
    Paralyzed,
}

impl StatusKind {
    pub fn name(&self) -> &'static str {
        match self {
            StatusKind::Strength => "strength",
            StatusKind::Stonehide => "stonehide",
            StatusKind::Poison => "poison",
            StatusKind::Swallowed => "swallowed",
            StatusKind::Enrage => "enrage",
            StatusKind::LivingShield => "living shield",
            StatusKind::UltraFocus => "ultra focus",
            StatusKind::Petrified => "petrified",
            StatusKind::Paralyzed => "paralyzed",
        }
    }
}

/// Kinds ticked at the player's end of turn, in order.
pub const PLAYER_TICK_KINDS: [StatusKind; 4] = [
    StatusKind::Strength,
    StatusKind::Stonehide,
    StatusKind::Poison,
    StatusKind::Swallowed,
];

/// Kinds ticked at an enemy's end of turn, in order.
pub const ENEMY_TICK_KINDS: [StatusKind; 5] = [
    StatusKind::Enrage,
    StatusKind::LivingShield,
    StatusKind::UltraFocus,
    StatusKind::Petrified,
    StatusKind::Paralyzed,
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StatusDuration {
    /// Removed when the counter hits zero.
    Turns(u32),
    /// Persists until a specific event removes it (e.g. the swallower dies).
    UntilEvent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub duration: StatusDuration,
    /// Effect-specific multiplier (damage scale for strength/stonehide).
    pub multiplier: f64,
    /// Per-tick damage dice (poison).
    pub dice: Option<Dice>,
    /// Enemy spawn id this effect is tied to (swallowed).
    pub source: Option<u32>,
}

impl StatusEffect {
    pub fn timed(turns: u32) -> Self {
        Self {
            duration: StatusDuration::Turns(turns),
            multiplier: 1.0,
            dice: None,
            source: None,
        }
    }

    pub fn timed_multiplier(turns: u32, multiplier: f64) -> Self {
        Self {
            multiplier,
            ..Self::timed(turns)
        }
    }

    pub fn timed_dice(turns: u32, dice: Dice) -> Self {
        Self {
            dice: Some(dice),
            ..Self::timed(turns)
        }
    }

    pub fn until_event(source: u32) -> Self {
        Self {
            duration: StatusDuration::UntilEvent,
            multiplier: 1.0,
            dice: None,
            source: Some(source),
        }
    }
}

/// Per-tick damage produced by a status (always ignores defense).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickDamage {
    pub kind: StatusKind,
    pub amount: i32,
}

/// Outcome of ticking one status kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    pub kind: StatusKind,
    pub damage: Option<TickDamage>,
    pub expired: bool,
}

type TickFn = fn(&StatusEffect, &mut dyn RngCore) -> Option<TickDamage>;

struct TickBehavior {
    kind: StatusKind,
    on_tick: TickFn,
}

fn tick_poison(effect: &StatusEffect, rng: &mut dyn RngCore) -> Option<TickDamage> {
    let dice = effect.dice?;
    Some(TickDamage {
        kind: StatusKind::Poison,
        amount: dice.roll(rng),
    })
}

fn tick_swallowed(_effect: &StatusEffect, rng: &mut dyn RngCore) -> Option<TickDamage> {
    let dice = Dice::new(DIGESTION_DICE_COUNT, DIGESTION_DICE_SIDES);
    Some(TickDamage {
        kind: StatusKind::Swallowed,
        amount: dice.roll(rng),
    })
}

/// Registry of kinds with a per-tick side effect. Kinds absent here only
/// count down.
const TICK_BEHAVIORS: [TickBehavior; 2] = [
    TickBehavior {
        kind: StatusKind::Poison,
        on_tick: tick_poison,
    },
    TickBehavior {
        kind: StatusKind::Swallowed,
        on_tick: tick_swallowed,
    },
];

fn tick_behavior(kind: StatusKind) -> Option<TickFn> {
    TICK_BEHAVIORS
        .iter()
        .find(|b| b.kind == kind)
        .map(|b| b.on_tick)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusEffects {
    effects: HashMap<StatusKind, StatusEffect>,
}

impl StatusEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, kind: StatusKind, effect: StatusEffect) {
        self.effects.insert(kind, effect);
    }

    pub fn has(&self, kind: StatusKind) -> bool {
        self.effects.contains_key(&kind)
    }

    pub fn get(&self, kind: StatusKind) -> Option<&StatusEffect> {
        self.effects.get(&kind)
    }

    pub fn remove(&mut self, kind: StatusKind) -> Option<StatusEffect> {
        self.effects.remove(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Multiplier for a kind, 1.0 when the status is absent.
    pub fn multiplier(&self, kind: StatusKind) -> f64 {
        self.effects.get(&kind).map_or(1.0, |e| e.multiplier)
    }

    /// Decrements one timed status by a turn, removing it at zero.
    /// Returns true if the status existed and is now gone.
    pub fn consume_turn(&mut self, kind: StatusKind) -> bool {
        let expired = match self.effects.get_mut(&kind) {
            Some(effect) => match effect.duration {
                StatusDuration::Turns(n) => {
                    let left = n.saturating_sub(1);
                    effect.duration = StatusDuration::Turns(left);
                    left == 0
                }
                StatusDuration::UntilEvent => false,
            },
            None => return false,
        };
        if expired {
            self.effects.remove(&kind);
        }
        expired
    }

    /// End-of-turn tick over a fixed kind list: roll any per-tick damage,
    /// decrement timed durations, drop expired effects.
    pub fn tick(&mut self, kinds: &[StatusKind], rng: &mut dyn RngCore) -> Vec<TickOutcome> {
        let mut outcomes = Vec::new();
        for &kind in kinds {
            let Some(effect) = self.effects.get(&kind) else {
                continue;
            };
            let duration = effect.duration;
            let damage = tick_behavior(kind).and_then(|f| f(effect, rng));
            let expired = match duration {
                StatusDuration::Turns(_) => self.consume_turn(kind),
                StatusDuration::UntilEvent => false,
            };
            outcomes.push(TickOutcome {
                kind,
                damage,
                expired,
            });
        }
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_timed_status_expires_after_duration() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut effects = StatusEffects::new();
        effects.apply(StatusKind::Enrage, StatusEffect::timed(3));

        for round in 0..2 {
            let outcomes = effects.tick(&ENEMY_TICK_KINDS, &mut rng);
            assert!(!outcomes[0].expired, "round {} should not expire", round);
            assert!(effects.has(StatusKind::Enrage));
        }
        let outcomes = effects.tick(&ENEMY_TICK_KINDS, &mut rng);
        assert!(outcomes[0].expired);
        assert!(!effects.has(StatusKind::Enrage));
    }

    #[test]
    fn test_poison_deals_dice_damage_each_tick() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut effects = StatusEffects::new();
        effects.apply(
            StatusKind::Poison,
            StatusEffect::timed_dice(3, Dice::new(2, 4)),
        );

        let outcomes = effects.tick(&PLAYER_TICK_KINDS, &mut rng);
        let damage = outcomes[0].damage.as_ref().expect("poison should damage");
        assert_eq!(damage.kind, StatusKind::Poison);
        assert!((2..=8).contains(&damage.amount));
    }

    #[test]
    fn test_swallowed_never_expires_from_ticks() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut effects = StatusEffects::new();
        effects.apply(StatusKind::Swallowed, StatusEffect::until_event(7));

        for _ in 0..20 {
            let outcomes = effects.tick(&PLAYER_TICK_KINDS, &mut rng);
            assert!(!outcomes[0].expired);
            assert!(outcomes[0].damage.is_some(), "digestion damage every tick");
        }
        assert!(effects.has(StatusKind::Swallowed));
        assert_eq!(effects.get(StatusKind::Swallowed).unwrap().source, Some(7));
    }

    #[test]
    fn test_unlisted_kind_is_inert_in_tick() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut effects = StatusEffects::new();
        // Enrage is an enemy-side kind; the player tick list ignores it.
        effects.apply(StatusKind::Enrage, StatusEffect::timed(1));
        let outcomes = effects.tick(&PLAYER_TICK_KINDS, &mut rng);
        assert!(outcomes.is_empty());
        assert!(effects.has(StatusKind::Enrage));
    }

    #[test]
    fn test_consume_turn_on_missing_status() {
        let mut effects = StatusEffects::new();
        assert!(!effects.consume_turn(StatusKind::Petrified));
    }

    #[test]
    fn test_multiplier_defaults_to_one() {
        let mut effects = StatusEffects::new();
        assert_eq!(effects.multiplier(StatusKind::Strength), 1.0);
        effects.apply(
            StatusKind::Strength,
            StatusEffect::timed_multiplier(3, 1.5),
        );
        assert_eq!(effects.multiplier(StatusKind::Strength), 1.5);
    }
}
