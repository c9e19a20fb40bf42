//! Player combat actions: attack, spells, items, flee.
//!
//! Every action validates fully before mutating anything, resolves
//! against a single explicit target when several enemies are alive, then
//! runs the battle-status check and hands the turn to the enemies.

use rand::Rng;

use crate::catalog::types::{ConsumableEffect, SpellEffect, WeaponProc};
use crate::combat::encounter::{check_battle_status, Encounter, TurnPhase};
use crate::core::constants::*;
use crate::core::dice::{self, Dice};
use crate::core::errors::EngineError;
use crate::core::events::Event;
use crate::core::session::GameSession;
use crate::entity::status::{StatusEffect, StatusKind};

/// Weapon numbers for the attack pipeline, either from the equipped
/// weapon definition or the unarmed fallback.
struct WeaponProfile {
    dice: Dice,
    crit_chance: f64,
    crit_multiplier: f64,
    ignore_defense: f64,
    bane: Option<(&'static str, f64)>,
    proc: Option<WeaponProc>,
}

fn weapon_profile(session: &GameSession) -> WeaponProfile {
    match session
        .player
        .equipped
        .weapon
        .as_deref()
        .and_then(|k| session.catalog.weapon(k).ok())
    {
        Some(def) => WeaponProfile {
            dice: def.dice,
            crit_chance: def.crit_chance,
            crit_multiplier: def.crit_multiplier,
            ignore_defense: def.ignore_defense,
            bane: def.bane,
            proc: def.proc.clone(),
        },
        None => WeaponProfile {
            dice: Dice::new(UNARMED_DICE_COUNT, UNARMED_DICE_SIDES),
            crit_chance: UNARMED_CRIT_CHANCE,
            crit_multiplier: UNARMED_CRIT_MULTIPLIER,
            ignore_defense: 0.0,
            bane: None,
            proc: None,
        },
    }
}

fn require_player_turn(enc: &Encounter) -> Result<(), EngineError> {
    if enc.phase != TurnPhase::Player {
        return Err(EngineError::NotPlayersTurn);
    }
    Ok(())
}

/// Resolves the acting target. With one enemy alive the target is
/// implicit; with several, an explicit in-range index is required.
fn resolve_target(enc: &Encounter, target: Option<usize>) -> Result<usize, EngineError> {
    if enc.enemies.len() == 1 {
        return match target {
            None | Some(0) => Ok(0),
            Some(_) => Err(EngineError::InvalidTarget),
        };
    }
    let idx = target.ok_or(EngineError::InvalidTarget)?;
    if idx >= enc.enemies.len() || !enc.enemies[idx].is_alive() {
        return Err(EngineError::InvalidTarget);
    }
    Ok(idx)
}

/// Weapon attack: damage roll plus strength, scaled by the strength
/// status, crit, and species bane; defense is applied once on the
/// primary hit, then any weapon proc resolves.
pub fn player_attack<R: Rng>(
    session: &mut GameSession,
    target: Option<usize>,
    rng: &mut R,
) -> Result<Vec<Event>, EngineError> {
    let profile = weapon_profile(session);
    let enc_ref = session
        .encounter
        .as_ref()
        .ok_or(EngineError::NoActiveEncounter)?;
    require_player_turn(enc_ref)?;
    let idx = resolve_target(enc_ref, target)?;

    let GameSession {
        player,
        catalog,
        encounter,
        log,
        ..
    } = session;
    let enc = encounter.as_mut().ok_or(EngineError::NoActiveEncounter)?;

    let mut events = Vec::new();
    let mut amount = profile.dice.roll(rng) + player.strength;
    amount = (amount as f64 * player.statuses.multiplier(StatusKind::Strength)) as i32;

    let mut crit = false;
    if dice::chance(rng, profile.crit_chance) {
        amount = (amount as f64 * profile.crit_multiplier) as i32;
        crit = true;
    }
    if let Some((species, mult)) = profile.bane {
        if enc.enemies[idx].species == species {
            amount = (amount as f64 * mult) as i32;
        }
    }

    let target_name = enc.enemies[idx].name.clone();
    let dealt = enc.enemies[idx].take_damage(amount, profile.ignore_defense);
    events.push(Event::combat(if crit {
        format!("Critical hit! You strike {} for {} damage!", target_name, dealt)
    } else {
        format!("You strike {} for {} damage.", target_name, dealt)
    }));

    // Secondary procs resolve strictly after the primary hit.
    match &profile.proc {
        Some(WeaponProc::Elemental { element, dice }) => {
            let bonus = dice.roll(rng);
            enc.enemies[idx].take_damage(bonus, 1.0);
            events.push(Event::combat(format!(
                "{} {} damage sears {}!",
                bonus,
                element.name(),
                target_name
            )));
        }
        Some(WeaponProc::Lifesteal { fraction }) => {
            let healed = player.heal((dealt as f64 * fraction) as i32);
            if healed > 0 {
                events.push(Event::status(format!(
                    "Your weapon drinks deep, restoring {} health.",
                    healed
                )));
            }
        }
        Some(WeaponProc::Paralyze { proc_chance }) => {
            if dice::chance(rng, *proc_chance) {
                enc.enemies[idx]
                    .statuses
                    .apply(StatusKind::Paralyzed, StatusEffect::timed(PARALYZE_DURATION));
                events.push(Event::status(format!("{} is paralyzed!", target_name)));
            }
        }
        Some(WeaponProc::Petrify { proc_chance }) => {
            if dice::chance(rng, *proc_chance) {
                enc.enemies[idx]
                    .statuses
                    .apply(StatusKind::Petrified, StatusEffect::timed(PETRIFY_DURATION));
                events.push(Event::status(format!("{} turns to stone!", target_name)));
            }
        }
        None => {}
    }

    events.extend(check_battle_status(player, enc, catalog, rng));
    if !enc.is_over() {
        enc.begin_enemy_phase();
    }
    log.extend(&events);
    Ok(events)
}

/// Casts a learned spell. Damage spells need a target and are halved
/// while swallowed; heals and buffs always target the caster.
pub fn player_cast<R: Rng>(
    session: &mut GameSession,
    spell_key: &str,
    target: Option<usize>,
    rng: &mut R,
) -> Result<Vec<Event>, EngineError> {
    let spell = session.catalog.spell(spell_key)?.clone();
    if !session.player.spells.contains(spell_key) {
        return Err(EngineError::InsufficientResource(format!(
            "the spell {} is not learned",
            spell.name
        )));
    }
    let enc_ref = session
        .encounter
        .as_ref()
        .ok_or(EngineError::NoActiveEncounter)?;
    require_player_turn(enc_ref)?;
    // Validate the target before any deduction.
    let target_idx = match spell.effect {
        SpellEffect::Damage(_) => Some(resolve_target(enc_ref, target)?),
        _ => None,
    };
    if session.player.mp < spell.mp_cost {
        return Err(EngineError::InsufficientResource(format!(
            "{} MP (have {})",
            spell.mp_cost, session.player.mp
        )));
    }

    let GameSession {
        player,
        catalog,
        encounter,
        log,
        ..
    } = session;
    let enc = encounter.as_mut().ok_or(EngineError::NoActiveEncounter)?;

    player.spend_mp(spell.mp_cost)?;
    let mut events = Vec::new();
    match spell.effect {
        SpellEffect::Damage(spell_dice) => {
            let idx = target_idx.expect("damage spells resolve a target");
            let mut amount = spell_dice.roll(rng) + player.intelligence;
            if player.statuses.has(StatusKind::Swallowed) {
                amount /= 2;
                events.push(Event::status(
                    "Your incantation is muffled from inside the beast.",
                ));
            }
            let name = enc.enemies[idx].name.clone();
            let dealt = enc.enemies[idx].take_damage(amount, 0.0);
            events.push(Event::combat(format!(
                "{} blasts {} for {} damage!",
                spell.name, name, dealt
            )));
        }
        SpellEffect::Heal(heal_dice) => {
            let healed = player.heal(heal_dice.roll(rng) + player.intelligence);
            events.push(Event::status(format!(
                "{} mends you for {} health.",
                spell.name, healed
            )));
        }
        SpellEffect::Buff {
            kind,
            duration,
            multiplier,
        } => {
            player
                .statuses
                .apply(kind, StatusEffect::timed_multiplier(duration, multiplier));
            events.push(Event::status(format!("{} takes hold.", spell.name)));
        }
    }

    events.extend(check_battle_status(player, enc, catalog, rng));
    if !enc.is_over() {
        enc.begin_enemy_phase();
    }
    log.extend(&events);
    Ok(events)
}

/// Uses one consumable from the inventory as the turn's action.
pub fn player_use_item<R: Rng>(
    session: &mut GameSession,
    item_key: &str,
    target: Option<usize>,
    rng: &mut R,
) -> Result<Vec<Event>, EngineError> {
    let item = session.catalog.item(item_key)?.clone();
    let effect = item.effect.clone().ok_or_else(|| {
        EngineError::InsufficientResource(format!("{} has no use in battle", item.name))
    })?;
    let enc_ref = session
        .encounter
        .as_ref()
        .ok_or(EngineError::NoActiveEncounter)?;
    require_player_turn(enc_ref)?;
    let target_idx = match effect {
        ConsumableEffect::Bomb(_) => Some(resolve_target(enc_ref, target)?),
        _ => None,
    };
    if session.player.inventory.consumable_count(item_key) == 0 {
        return Err(EngineError::InsufficientResource(format!(
            "no {} remaining",
            item.name
        )));
    }
    if matches!(effect, ConsumableEffect::GrantRevive) && session.player.revive_charge {
        return Err(EngineError::InsufficientResource(
            "a revival charm is already active".to_string(),
        ));
    }

    let GameSession {
        player,
        catalog,
        encounter,
        log,
        ..
    } = session;
    let enc = encounter.as_mut().ok_or(EngineError::NoActiveEncounter)?;

    player.inventory.remove_consumables(item_key, 1)?;
    let mut events = Vec::new();
    match effect {
        ConsumableEffect::Heal(heal_dice) => {
            let healed = player.heal(heal_dice.roll(rng));
            events.push(Event::status(format!(
                "The {} restores {} health.",
                item.name, healed
            )));
        }
        ConsumableEffect::RestoreMp(mp_dice) => {
            let restored = player.restore_mp(mp_dice.roll(rng));
            events.push(Event::status(format!(
                "The {} restores {} mana.",
                item.name, restored
            )));
        }
        ConsumableEffect::CureStatus(kind) => {
            if player.statuses.remove(kind).is_some() {
                events.push(Event::status(format!(
                    "The {} purges the {}.",
                    item.name,
                    kind.name()
                )));
            } else {
                events.push(Event::status(format!(
                    "The {} fizzles; nothing to cure.",
                    item.name
                )));
            }
        }
        ConsumableEffect::Bomb(bomb_dice) => {
            let idx = target_idx.expect("bombs resolve a target");
            let name = enc.enemies[idx].name.clone();
            let dealt = enc.enemies[idx].take_damage(bomb_dice.roll(rng), 1.0);
            events.push(Event::combat(format!(
                "The {} engulfs {} for {} damage!",
                item.name, name, dealt
            )));
        }
        ConsumableEffect::GrantRevive => {
            player.revive_charge = true;
            events.push(Event::status(format!(
                "The {} glows with protective warmth.",
                item.name
            )));
        }
    }

    events.extend(check_battle_status(player, enc, catalog, rng));
    if !enc.is_over() {
        enc.begin_enemy_phase();
    }
    log.extend(&events);
    Ok(events)
}

/// Attempts to flee: success ends the encounter, failure forfeits the
/// turn to the enemies.
pub fn player_flee<R: Rng>(
    session: &mut GameSession,
    rng: &mut R,
) -> Result<Vec<Event>, EngineError> {
    let GameSession {
        encounter, log, ..
    } = session;
    let enc = encounter.as_mut().ok_or(EngineError::NoActiveEncounter)?;
    require_player_turn(enc)?;

    let mut events = Vec::new();
    if dice::chance(rng, FLEE_SUCCESS_CHANCE) {
        enc.phase = TurnPhase::Escaped;
        events.push(Event::combat("You slip away from the fight!"));
    } else {
        events.push(Event::combat("You fail to escape!"));
        enc.begin_enemy_phase();
    }
    log.extend(&events);
    Ok(events)
}
