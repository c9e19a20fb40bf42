//! Encounter turn state machine.
//!
//! A battle is a sequence of discrete, synchronous steps: the player
//! resolves one action, then the enemy phase advances one step at a time
//! in strict spawn order. Callers that want dramatic pacing advance the
//! phase step by step; tests drain it immediately.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::types::{AbilityKind, Rarity, SpeciesClass, ALL_RARITIES};
use crate::catalog::ContentCatalog;
use crate::combat::abilities;
use crate::core::constants::*;
use crate::core::dice;
use crate::core::errors::EngineError;
use crate::core::events::Event;
use crate::core::session::GameSession;
use crate::entity::enemy::{self, Enemy};
use crate::entity::player::Player;
use crate::entity::status::{StatusKind, ENEMY_TICK_KINDS, PLAYER_TICK_KINDS};
use crate::progression::{leveling, quests};
use crate::save::DeathRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    Player,
    EnemyTurn,
    Victory,
    Defeat,
    Escaped,
}

/// The next pending step of the enemy phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum EnemyStep {
    TickPlayerStatuses,
    Act(usize),
    EndOfRound,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Encounter {
    pub enemies: Vec<Enemy>,
    pub phase: TurnPhase,
    pub round: u32,
    next_spawn_id: u32,
    next_step: Option<EnemyStep>,
    /// Roster size when the enemy phase began; summons appearing
    /// mid-phase wait for the next round.
    actors_this_round: usize,
}

impl Encounter {
    pub fn new() -> Self {
        Self {
            enemies: Vec::new(),
            phase: TurnPhase::Player,
            round: 1,
            next_spawn_id: 0,
            next_step: None,
            actors_this_round: 0,
        }
    }

    /// Builds an encounter from pre-spawned enemies, assigning ids.
    pub fn from_enemies(enemies: Vec<Enemy>) -> Self {
        let mut enc = Self::new();
        for enemy in enemies {
            enc.add_enemy(enemy);
        }
        enc
    }

    pub fn add_enemy(&mut self, mut enemy: Enemy) {
        enemy.spawn_id = self.next_spawn_id;
        self.next_spawn_id += 1;
        self.enemies.push(enemy);
    }

    pub fn is_over(&self) -> bool {
        matches!(
            self.phase,
            TurnPhase::Victory | TurnPhase::Defeat | TurnPhase::Escaped
        )
    }

    pub(crate) fn begin_enemy_phase(&mut self) {
        self.phase = TurnPhase::EnemyTurn;
        self.next_step = Some(EnemyStep::TickPlayerStatuses);
        self.actors_this_round = self.enemies.len();
    }
}

impl Default for Encounter {
    fn default() -> Self {
        Self::new()
    }
}

fn roll_rarity<R: Rng + ?Sized>(rng: &mut R, weights: &[f64; 5]) -> Rarity {
    let total: f64 = weights.iter().sum();
    let mut pick = rng.gen::<f64>() * total;
    for (i, w) in weights.iter().enumerate() {
        if pick < *w {
            return ALL_RARITIES[i];
        }
        pick -= w;
    }
    Rarity::Legendary
}

fn enemy_count_for_level<R: Rng + ?Sized>(rng: &mut R, level: u32) -> usize {
    if level < ENCOUNTER_MID_LEVEL {
        1
    } else if level < ENCOUNTER_HIGH_LEVEL {
        if dice::chance(rng, ENCOUNTER_TWO_ENEMY_CHANCE) {
            2
        } else {
            1
        }
    } else {
        let roll = rng.gen::<f64>();
        if roll < ENCOUNTER_THREE_ENEMY_CHANCE {
            3
        } else if roll < ENCOUNTER_THREE_ENEMY_CHANCE + ENCOUNTER_TWO_ENEMY_CHANCE {
            2
        } else {
            1
        }
    }
}

/// Rolls a fresh 1-3 enemy encounter for the player's level and stores it
/// on the session. An equipped lure with remaining uses is spent to take
/// the better of two rarity rolls per enemy.
pub fn start_encounter<R: Rng>(
    session: &mut GameSession,
    rng: &mut R,
) -> Result<Vec<Event>, EngineError> {
    let GameSession {
        player,
        catalog,
        encounter,
        log,
        ..
    } = session;

    let mut events = Vec::new();
    let count = enemy_count_for_level(rng, player.level);

    let lured = match player.equipped.lure.clone() {
        Some(lure_key) if player.inventory.spend_lure_use(&lure_key) => {
            let name = catalog.display_name(&lure_key).to_string();
            events.push(Event::system(format!("Your {} draws out richer prey.", name)));
            true
        }
        _ => false,
    };

    let mut enc = Encounter::new();
    for _ in 0..count {
        let keys = catalog.species_keys();
        let key = keys[rng.gen_range(0..keys.len())];
        let species = catalog.species(key)?;
        let weights = if species.class == SpeciesClass::Monstrosity {
            &RARITY_WEIGHTS_MONSTROSITY
        } else {
            &RARITY_WEIGHTS
        };
        let mut rarity = roll_rarity(rng, weights);
        if lured {
            rarity = rarity.max(roll_rarity(rng, weights));
        }
        let enemy = enemy::spawn(species, rarity, player.level, rng);
        events.push(Event::combat(format!("A {} appears!", enemy.name)));
        enc.add_enemy(enemy);
    }

    *encounter = Some(enc);
    log.extend(&events);
    Ok(events)
}

/// Evaluates every downed enemy for revival, then finalizes deaths:
/// rewards, loot, quest and legacy bookkeeping, roster removal. Sets
/// `Victory` when the roster empties.
pub(crate) fn check_battle_status<R: Rng>(
    player: &mut Player,
    enc: &mut Encounter,
    catalog: &ContentCatalog,
    rng: &mut R,
) -> Vec<Event> {
    let mut events = Vec::new();
    let mut i = 0;
    while i < enc.enemies.len() {
        if enc.enemies[i].hp > 0 {
            i += 1;
            continue;
        }

        let enemy = &mut enc.enemies[i];

        // Undead rise once, unless they already cheat death on their own.
        if enemy.class == SpeciesClass::Undead
            && !enemy.revived
            && enemy.ability != Some(AbilityKind::AliveAgain)
        {
            enemy.revived = true;
            enemy.revive_at_fraction(REVIVE_HP_FRACTION);
            events.push(Event::combat(format!(
                "{} collapses... then rises again!",
                enemy.name
            )));
            i += 1;
            continue;
        }

        // Alive-again: geometric decay, never capped.
        if enemy.ability == Some(AbilityKind::AliveAgain)
            && dice::chance(rng, enemy.revive_chance)
        {
            enemy.revive_at_fraction(REVIVE_HP_FRACTION);
            enemy.revive_chance /= 2.0;
            events.push(Event::combat(format!(
                "{} knits itself back together!",
                enemy.name
            )));
            i += 1;
            continue;
        }

        let enemy = enc.enemies.remove(i);
        events.push(Event::combat(format!("{} is defeated!", enemy.name)));

        // Being digested ends with the digester.
        if player
            .statuses
            .get(StatusKind::Swallowed)
            .and_then(|e| e.source)
            == Some(enemy.spawn_id)
        {
            player.statuses.remove(StatusKind::Swallowed);
            events.push(Event::status(
                "You cut your way free of the fallen beast!",
            ));
        }

        events.extend(leveling::grant_xp(player, enemy.xp_reward));
        player.gold += enemy.gold_reward;
        events.push(Event::loot(format!(
            "You gain {} XP and {} gold.",
            enemy.xp_reward, enemy.gold_reward
        )));

        if enemy.rarity == Rarity::Legendary && player.legacy_kills.insert(enemy.species.clone())
        {
            events.push(Event::progress(format!(
                "The fall of the legendary {} will be remembered.",
                enemy.name
            )));
        }

        if let Ok(species) = catalog.species(&enemy.species) {
            for (item_key, base_chance) in species.loot {
                let drop_chance = if enemy.rarity == Rarity::Legendary {
                    base_chance * LEGENDARY_LOOT_MULTIPLIER
                } else {
                    *base_chance
                };
                if dice::chance(rng, drop_chance)
                    && player.inventory.add_item(catalog, item_key).is_ok()
                {
                    events.push(Event::loot(format!(
                        "{} dropped: {}",
                        enemy.name,
                        catalog.display_name(item_key)
                    )));
                }
            }
        }

        events.extend(quests::record_kill(player, catalog, &enemy.species));
    }

    if enc.enemies.is_empty() {
        enc.phase = TurnPhase::Victory;
        enc.next_step = None;
        events.push(Event::combat("Victory! The field is yours."));
    }
    events
}

/// One enemy hit, with the player's ranged-weapon dodge and shield rules
/// applied on the receiving side.
fn enemy_strike<R: Rng>(
    player: &mut Player,
    enemy: &Enemy,
    catalog: &ContentCatalog,
    rng: &mut R,
) -> Vec<Event> {
    let mut events = Vec::new();

    let dodge_chance = player
        .equipped
        .weapon
        .as_deref()
        .and_then(|k| catalog.weapon(k).ok())
        .map_or(0.0, |w| w.dodge_chance);
    if dice::chance(rng, dodge_chance) {
        events.push(Event::combat(format!(
            "You sidestep {}'s attack!",
            enemy.name
        )));
        return events;
    }

    let amount = enemy.damage.roll(rng) + enemy.strength;
    let ignores_defense = enemy.statuses.has(StatusKind::UltraFocus);
    let result = player.take_damage(amount, ignores_defense, catalog, rng);
    if result.blocked {
        events.push(Event::combat(format!(
            "Your shield turns aside {}'s attack!",
            enemy.name
        )));
    } else {
        events.push(Event::combat(format!(
            "{} hits you for {} damage.",
            enemy.name, result.dealt
        )));
    }
    events
}

fn enemy_attack<R: Rng>(
    player: &mut Player,
    enemy: &Enemy,
    catalog: &ContentCatalog,
    rng: &mut R,
) -> Vec<Event> {
    let mut events = enemy_strike(player, enemy, catalog, rng);
    if enemy.ability == Some(AbilityKind::DoubleStrike)
        && dice::chance(rng, DOUBLE_STRIKE_CHANCE)
    {
        events.push(Event::combat(format!("{} strikes again!", enemy.name)));
        events.extend(enemy_strike(player, enemy, catalog, rng));
    }
    events
}

/// Handles the player hitting zero HP: the one-shot revive charge saves
/// them once, otherwise the run ends and a death record is produced.
fn handle_player_death(
    player: &mut Player,
    enc: &mut Encounter,
    cause: &str,
    death_record: &mut Option<DeathRecord>,
) -> Vec<Event> {
    let mut events = Vec::new();
    if player.revive_charge {
        player.revive_charge = false;
        player.hp = ((player.max_hp as f64 * REVIVE_HP_FRACTION) as i32).max(1);
        events.push(Event::status(
            "The phoenix feather flares! You are pulled back from death.",
        ));
        return events;
    }
    enc.phase = TurnPhase::Defeat;
    enc.next_step = None;
    *death_record = Some(DeathRecord::now(player, cause));
    events.push(Event::combat(format!(
        "{} has fallen. The tale ends here.",
        player.name
    )));
    events
}

/// Advances the enemy phase by one discrete step. Returns `Ok(None)` when
/// no enemy-phase step is pending (it is the player's turn, or the battle
/// is over).
pub fn advance_enemy_turn<R: Rng>(
    session: &mut GameSession,
    rng: &mut R,
) -> Result<Option<Vec<Event>>, EngineError> {
    let GameSession {
        player,
        catalog,
        encounter,
        log,
        death_record,
    } = session;
    let enc = encounter.as_mut().ok_or(EngineError::NoActiveEncounter)?;
    if enc.phase != TurnPhase::EnemyTurn {
        return Ok(None);
    }
    let Some(step) = enc.next_step else {
        return Ok(None);
    };

    let mut events = Vec::new();
    match step {
        EnemyStep::TickPlayerStatuses => {
            for outcome in player.statuses.tick(&PLAYER_TICK_KINDS, rng) {
                if let Some(damage) = &outcome.damage {
                    player.hp -= damage.amount;
                    let text = match damage.kind {
                        StatusKind::Swallowed => format!(
                            "Digestive acids burn you for {} damage!",
                            damage.amount
                        ),
                        _ => format!(
                            "The {} takes its toll: {} damage.",
                            damage.kind.name(),
                            damage.amount
                        ),
                    };
                    events.push(Event::status(text));
                }
                if outcome.expired {
                    events.push(Event::status(format!(
                        "The {} wears off.",
                        outcome.kind.name()
                    )));
                }
            }
            if !player.is_alive() {
                events.extend(handle_player_death(player, enc, "succumbed to wounds", death_record));
                if enc.phase == TurnPhase::Defeat {
                    log.extend(&events);
                    return Ok(Some(events));
                }
            }
            enc.next_step = Some(EnemyStep::Act(0));
        }
        EnemyStep::Act(idx) => {
            let bound = enc.actors_this_round.min(enc.enemies.len());
            if idx >= bound {
                enc.next_step = Some(EnemyStep::EndOfRound);
                return Ok(Some(events));
            }
            enc.next_step = if idx + 1 < bound {
                Some(EnemyStep::Act(idx + 1))
            } else {
                Some(EnemyStep::EndOfRound)
            };

            if enc.enemies[idx].is_incapacitated() {
                let enemy = &enc.enemies[idx];
                let held_by = if enemy.statuses.has(StatusKind::Petrified) {
                    "petrified"
                } else {
                    "paralyzed"
                };
                events.push(Event::status(format!(
                    "{} is {} and cannot act.",
                    enemy.name, held_by
                )));
            } else {
                let mut acted = false;
                if let Some(kind) = enc.enemies[idx].ability {
                    if let Some(entry) = abilities::entry(kind) {
                        if (entry.ready)(player, enc, idx) && dice::chance(rng, entry.chance) {
                            events.extend((entry.perform)(player, enc, idx, catalog, rng));
                            acted = true;
                        }
                    }
                }
                if !acted {
                    let name = enc.enemies[idx].name.clone();
                    events.extend(enemy_attack(player, &enc.enemies[idx], catalog, rng));
                    if !player.is_alive() {
                        let cause = format!("slain by {}", name);
                        events.extend(handle_player_death(player, enc, &cause, death_record));
                    }
                } else if !player.is_alive() {
                    let cause = format!("slain by {}", enc.enemies[idx].name);
                    events.extend(handle_player_death(player, enc, &cause, death_record));
                }
            }
        }
        EnemyStep::EndOfRound => {
            for enemy in enc.enemies.iter_mut() {
                for outcome in enemy.statuses.tick(&ENEMY_TICK_KINDS, rng) {
                    if outcome.expired {
                        events.push(Event::status(format!(
                            "{}'s {} fades.",
                            enemy.name,
                            outcome.kind.name()
                        )));
                    }
                }
            }

            enc.round += 1;
            let mut lost_turn = false;
            for kind in [StatusKind::Petrified, StatusKind::Paralyzed] {
                if player.statuses.has(kind) {
                    let cleared = player.statuses.consume_turn(kind);
                    let mut text = format!("You are {} and lose your turn!", kind.name());
                    if cleared {
                        text.push_str(" The affliction passes.");
                    }
                    events.push(Event::status(text));
                    lost_turn = true;
                    break;
                }
            }
            if lost_turn {
                enc.begin_enemy_phase();
            } else {
                enc.phase = TurnPhase::Player;
                enc.next_step = None;
            }
        }
    }

    log.extend(&events);
    Ok(Some(events))
}

/// Drains the whole enemy phase synchronously.
pub fn run_enemy_phase<R: Rng>(
    session: &mut GameSession,
    rng: &mut R,
) -> Result<Vec<Event>, EngineError> {
    let mut events = Vec::new();
    while let Some(step_events) = advance_enemy_turn(session, rng)? {
        events.extend(step_events);
        // An incapacitated player chains straight into another enemy
        // phase; keep draining until control actually returns.
    }
    Ok(events)
}
