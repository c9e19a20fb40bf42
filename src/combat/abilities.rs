//! Enemy special-ability registry.
//!
//! Each active ability gets one roll per enemy per turn: the gate is
//! checked, the trigger chance rolled, and on success the handler runs
//! instead of the basic attack. Passive behaviors (`DoubleStrike`,
//! `AliveAgain`) live in the attack and death-check paths and have no
//! entry here, so carriers fall through to a basic attack.

use rand::RngCore;

use crate::catalog::types::{AbilityKind, Rarity};
use crate::catalog::ContentCatalog;
use crate::combat::encounter::Encounter;
use crate::core::constants::*;
use crate::core::dice::Dice;
use crate::core::events::Event;
use crate::entity::enemy;
use crate::entity::player::Player;
use crate::entity::status::{StatusEffect, StatusKind};

pub type ReadyFn = fn(&Player, &Encounter, usize) -> bool;
pub type PerformFn =
    fn(&mut Player, &mut Encounter, usize, &ContentCatalog, &mut dyn RngCore) -> Vec<Event>;

pub struct AbilityEntry {
    pub kind: AbilityKind,
    pub chance: f64,
    pub ready: ReadyFn,
    pub perform: PerformFn,
}

pub const REGISTRY: &[AbilityEntry] = &[
    AbilityEntry {
        kind: AbilityKind::Enrage,
        chance: ENRAGE_CHANCE,
        ready: ready_enrage,
        perform: perform_enrage,
    },
    AbilityEntry {
        kind: AbilityKind::PoisonWeb,
        chance: POISON_WEB_CHANCE,
        ready: ready_player_unpoisoned,
        perform: perform_poison_web,
    },
    AbilityEntry {
        kind: AbilityKind::Petrification,
        chance: PETRIFICATION_CHANCE,
        ready: ready_petrification,
        perform: perform_petrification,
    },
    AbilityEntry {
        kind: AbilityKind::Necromancy,
        chance: 1.0,
        ready: ready_necromancy,
        perform: perform_necromancy,
    },
    AbilityEntry {
        kind: AbilityKind::UltraFocus,
        chance: ULTRA_FOCUS_CHANCE,
        ready: ready_ultra_focus,
        perform: perform_ultra_focus,
    },
    AbilityEntry {
        kind: AbilityKind::Healing,
        chance: HEALING_CHANCE,
        ready: ready_healing,
        perform: perform_healing,
    },
    AbilityEntry {
        kind: AbilityKind::TruePoison,
        chance: TRUE_POISON_CHANCE,
        ready: ready_player_unpoisoned,
        perform: perform_true_poison,
    },
    AbilityEntry {
        kind: AbilityKind::LivingShield,
        chance: LIVING_SHIELD_CHANCE,
        ready: ready_living_shield,
        perform: perform_living_shield,
    },
    AbilityEntry {
        kind: AbilityKind::Swallow,
        chance: SWALLOW_CHANCE,
        ready: ready_swallow,
        perform: perform_swallow,
    },
    AbilityEntry {
        kind: AbilityKind::ScorchEarth,
        chance: SCORCH_EARTH_CHANCE,
        ready: ready_always,
        perform: perform_scorch_earth,
    },
];

pub fn entry(kind: AbilityKind) -> Option<&'static AbilityEntry> {
    REGISTRY.iter().find(|e| e.kind == kind)
}

fn ready_always(_player: &Player, _enc: &Encounter, _idx: usize) -> bool {
    true
}

fn ready_enrage(_player: &Player, enc: &Encounter, idx: usize) -> bool {
    !enc.enemies[idx].statuses.has(StatusKind::Enrage)
}

fn ready_player_unpoisoned(player: &Player, _enc: &Encounter, _idx: usize) -> bool {
    !player.statuses.has(StatusKind::Poison)
}

fn ready_petrification(player: &Player, _enc: &Encounter, _idx: usize) -> bool {
    !player.statuses.has(StatusKind::Petrified)
}

fn ready_necromancy(_player: &Player, enc: &Encounter, idx: usize) -> bool {
    let enemy = &enc.enemies[idx];
    let half = (enemy.max_hp as f64 * NECROMANCY_FIRST_THRESHOLD) as i32;
    let tenth = (enemy.max_hp as f64 * NECROMANCY_SECOND_THRESHOLD) as i32;
    (!enemy.summoned_at_50 && enemy.hp <= half) || (!enemy.summoned_at_10 && enemy.hp <= tenth)
}

fn ready_ultra_focus(_player: &Player, enc: &Encounter, idx: usize) -> bool {
    !enc.enemies[idx].statuses.has(StatusKind::UltraFocus)
}

fn ready_healing(_player: &Player, enc: &Encounter, _idx: usize) -> bool {
    enc.enemies
        .iter()
        .any(|e| e.is_alive() && e.hp < e.max_hp)
}

fn ready_living_shield(_player: &Player, enc: &Encounter, idx: usize) -> bool {
    !enc.enemies[idx].statuses.has(StatusKind::LivingShield)
}

fn ready_swallow(player: &Player, _enc: &Encounter, _idx: usize) -> bool {
    !player.statuses.has(StatusKind::Swallowed)
}

fn perform_enrage(
    _player: &mut Player,
    enc: &mut Encounter,
    idx: usize,
    _catalog: &ContentCatalog,
    _rng: &mut dyn RngCore,
) -> Vec<Event> {
    let enemy = &mut enc.enemies[idx];
    enemy
        .statuses
        .apply(StatusKind::Enrage, StatusEffect::timed(ENRAGE_DURATION));
    vec![Event::status(format!("{} flies into a rage!", enemy.name))]
}

fn perform_poison_web(
    player: &mut Player,
    enc: &mut Encounter,
    idx: usize,
    _catalog: &ContentCatalog,
    _rng: &mut dyn RngCore,
) -> Vec<Event> {
    let enemy = &enc.enemies[idx];
    let dice = Dice::new(1 + enemy.rarity.tier(), 4);
    player.statuses.apply(
        StatusKind::Poison,
        StatusEffect::timed_dice(POISON_DURATION, dice),
    );
    vec![Event::status(format!(
        "{} snares you in a poisonous web!",
        enemy.name
    ))]
}

fn perform_petrification(
    player: &mut Player,
    enc: &mut Encounter,
    idx: usize,
    _catalog: &ContentCatalog,
    _rng: &mut dyn RngCore,
) -> Vec<Event> {
    player.statuses.apply(
        StatusKind::Petrified,
        StatusEffect::timed(PETRIFY_DURATION),
    );
    vec![Event::status(format!(
        "{}'s gaze turns your flesh to stone!",
        enc.enemies[idx].name
    ))]
}

fn perform_necromancy(
    player: &mut Player,
    enc: &mut Encounter,
    idx: usize,
    catalog: &ContentCatalog,
    rng: &mut dyn RngCore,
) -> Vec<Event> {
    let mut events = Vec::new();
    {
        let enemy = &mut enc.enemies[idx];
        let half = (enemy.max_hp as f64 * NECROMANCY_FIRST_THRESHOLD) as i32;
        if !enemy.summoned_at_50 && enemy.hp <= half {
            enemy.summoned_at_50 = true;
        } else {
            enemy.summoned_at_10 = true;
        }
        events.push(Event::status(format!(
            "{} chants, and the ground stirs...",
            enemy.name
        )));
    }
    if let Ok(species) = catalog.species(NECROMANCY_SUMMON_SPECIES) {
        for _ in 0..NECROMANCY_SUMMON_COUNT {
            let summon = enemy::spawn(species, Rarity::Common, player.level, rng);
            let name = summon.name.clone();
            enc.add_enemy(summon);
            events.push(Event::combat(format!("A {} claws out of the earth!", name)));
        }
    }
    events
}

fn perform_ultra_focus(
    _player: &mut Player,
    enc: &mut Encounter,
    idx: usize,
    _catalog: &ContentCatalog,
    _rng: &mut dyn RngCore,
) -> Vec<Event> {
    let enemy = &mut enc.enemies[idx];
    enemy.statuses.apply(
        StatusKind::UltraFocus,
        StatusEffect::timed(ULTRA_FOCUS_DURATION),
    );
    vec![Event::status(format!(
        "{} focuses with deadly precision!",
        enemy.name
    ))]
}

fn perform_healing(
    _player: &mut Player,
    enc: &mut Encounter,
    idx: usize,
    _catalog: &ContentCatalog,
    rng: &mut dyn RngCore,
) -> Vec<Event> {
    let healer_name = enc.enemies[idx].name.clone();
    let dice = Dice::new(1 + enc.enemies[idx].rarity.tier(), 8);
    let amount = dice.roll(rng);
    let mut healed_total = 0;
    for enemy in enc.enemies.iter_mut().filter(|e| e.is_alive()) {
        healed_total += enemy.heal(amount);
    }
    vec![Event::status(format!(
        "{} chants a mending prayer, restoring {} health to its allies!",
        healer_name, healed_total
    ))]
}

fn perform_true_poison(
    player: &mut Player,
    enc: &mut Encounter,
    idx: usize,
    _catalog: &ContentCatalog,
    _rng: &mut dyn RngCore,
) -> Vec<Event> {
    let enemy = &enc.enemies[idx];
    let dice = Dice::new(2 + enemy.rarity.tier(), 6);
    player.statuses.apply(
        StatusKind::Poison,
        StatusEffect::timed_dice(POISON_DURATION, dice),
    );
    vec![Event::status(format!(
        "{} afflicts you with virulent poison!",
        enemy.name
    ))]
}

fn perform_living_shield(
    _player: &mut Player,
    enc: &mut Encounter,
    idx: usize,
    _catalog: &ContentCatalog,
    _rng: &mut dyn RngCore,
) -> Vec<Event> {
    let enemy = &mut enc.enemies[idx];
    enemy.statuses.apply(
        StatusKind::LivingShield,
        StatusEffect::timed(LIVING_SHIELD_DURATION),
    );
    vec![Event::status(format!(
        "{}'s hide hardens into a living shield!",
        enemy.name
    ))]
}

fn perform_swallow(
    player: &mut Player,
    enc: &mut Encounter,
    idx: usize,
    _catalog: &ContentCatalog,
    _rng: &mut dyn RngCore,
) -> Vec<Event> {
    let enemy = &enc.enemies[idx];
    player.statuses.apply(
        StatusKind::Swallowed,
        StatusEffect::until_event(enemy.spawn_id),
    );
    vec![Event::status(format!(
        "{} swallows you whole!",
        enemy.name
    ))]
}

fn perform_scorch_earth(
    player: &mut Player,
    enc: &mut Encounter,
    idx: usize,
    catalog: &ContentCatalog,
    rng: &mut dyn RngCore,
) -> Vec<Event> {
    let enemy = &enc.enemies[idx];
    let amount = (enemy.strength as f64 * enemy.rarity.stat_multiplier()) as i32;
    let name = enemy.name.clone();
    let result = player.take_damage(amount, true, catalog, rng);
    vec![Event::combat(format!(
        "{} scorches the earth! Searing flames deal {} damage!",
        name, result.dealt
    ))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::enemy::spawn;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn setup(species_key: &str) -> (Player, Encounter, ContentCatalog, ChaCha8Rng) {
        let catalog = ContentCatalog::default_content();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let enemy = spawn(
            catalog.species(species_key).unwrap(),
            Rarity::Common,
            1,
            &mut rng,
        );
        let enc = Encounter::from_enemies(vec![enemy]);
        (Player::new("Hero"), enc, catalog, rng)
    }

    #[test]
    fn test_passive_abilities_have_no_registry_entry() {
        assert!(entry(AbilityKind::DoubleStrike).is_none());
        assert!(entry(AbilityKind::AliveAgain).is_none());
        assert!(entry(AbilityKind::Enrage).is_some());
    }

    #[test]
    fn test_enrage_gate_blocks_reapplication() {
        let (player, mut enc, catalog, mut rng) = setup("ghoul");
        assert!(ready_enrage(&player, &enc, 0));
        let mut p = player;
        perform_enrage(&mut p, &mut enc, 0, &catalog, &mut rng);
        assert!(enc.enemies[0].statuses.has(StatusKind::Enrage));
        assert!(!ready_enrage(&p, &enc, 0));
    }

    #[test]
    fn test_swallow_ties_status_to_spawn_id() {
        let (mut player, mut enc, catalog, mut rng) = setup("swamp_maw");
        perform_swallow(&mut player, &mut enc, 0, &catalog, &mut rng);
        let effect = player.statuses.get(StatusKind::Swallowed).unwrap();
        assert_eq!(effect.source, Some(enc.enemies[0].spawn_id));
    }

    #[test]
    fn test_necromancy_summons_two_skeletons_per_threshold() {
        let (mut player, mut enc, catalog, mut rng) = setup("necromancer");
        let max = enc.enemies[0].max_hp;

        // Above half HP the gate stays closed.
        assert!(!ready_necromancy(&player, &enc, 0));

        enc.enemies[0].hp = max / 2;
        assert!(ready_necromancy(&player, &enc, 0));
        perform_necromancy(&mut player, &mut enc, 0, &catalog, &mut rng);
        assert_eq!(enc.enemies.len(), 3);
        assert!(enc.enemies[0].summoned_at_50);

        // HP fluctuating back up never re-opens the first threshold.
        enc.enemies[0].hp = max;
        assert!(!ready_necromancy(&player, &enc, 0));

        enc.enemies[0].hp = max / 10;
        assert!(ready_necromancy(&player, &enc, 0));
        perform_necromancy(&mut player, &mut enc, 0, &catalog, &mut rng);
        assert_eq!(enc.enemies.len(), 5);
        assert!(enc.enemies[0].summoned_at_10);

        // Both thresholds spent: never more than twice total.
        enc.enemies[0].hp = 1;
        assert!(!ready_necromancy(&player, &enc, 0));
    }

    #[test]
    fn test_summons_get_distinct_spawn_ids() {
        let (mut player, mut enc, catalog, mut rng) = setup("necromancer");
        enc.enemies[0].hp = 1;
        perform_necromancy(&mut player, &mut enc, 0, &catalog, &mut rng);
        let mut ids: Vec<u32> = enc.enemies.iter().map(|e| e.spawn_id).collect();
        ids.dedup();
        assert_eq!(ids.len(), enc.enemies.len());
    }

    #[test]
    fn test_healing_restores_hurt_allies() {
        let (mut player, mut enc, catalog, mut rng) = setup("shrine_keeper");
        assert!(!ready_healing(&player, &enc, 0), "full HP gate");
        enc.enemies[0].hp -= 5;
        assert!(ready_healing(&player, &enc, 0));
        perform_healing(&mut player, &mut enc, 0, &catalog, &mut rng);
        assert!(enc.enemies[0].hp > enc.enemies[0].max_hp - 5);
    }

    #[test]
    fn test_scorch_earth_ignores_defense() {
        let (mut player, mut enc, catalog, mut rng) = setup("ember_drake");
        player.equipped.armor = Some("dragonscale_mail".to_string());
        let hp_before = player.hp;
        let expected = (enc.enemies[0].strength as f64
            * enc.enemies[0].rarity.stat_multiplier()) as i32;
        perform_scorch_earth(&mut player, &mut enc, 0, &catalog, &mut rng);
        assert_eq!(hp_before - player.hp, expected);
    }

    #[test]
    fn test_poison_web_scales_dice_with_rarity() {
        let catalog = ContentCatalog::default_content();
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let enemy = spawn(
            catalog.species("cave_spider").unwrap(),
            Rarity::Legendary,
            1,
            &mut rng,
        );
        let mut enc = Encounter::from_enemies(vec![enemy]);
        let mut player = Player::new("Hero");
        perform_poison_web(&mut player, &mut enc, 0, &catalog, &mut rng);
        let effect = player.statuses.get(StatusKind::Poison).unwrap();
        // Legendary tier 4 -> 5d4
        assert_eq!(effect.dice.unwrap(), Dice::new(5, 4));
    }
}
