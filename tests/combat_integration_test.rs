//! Combat integration tests
//!
//! End-to-end battles with a seeded rng: exact damage arithmetic,
//! turn sequencing, revival mechanics, and permanent-death bookkeeping.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use saga::catalog::types::Rarity;
use saga::combat::encounter::{run_enemy_phase, Encounter, TurnPhase};
use saga::combat::player_attack;
use saga::core::dice;
use saga::entity::enemy::{spawn, Enemy};
use saga::EngineError;
use saga::GameSession;

fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn spawn_enemy(session: &GameSession, species: &str, seed: u64) -> Enemy {
    let mut rng = seeded(seed);
    spawn(
        session.catalog.species(species).unwrap(),
        Rarity::Common,
        session.player.level,
        &mut rng,
    )
}

/// Predicts the next attack's damage by replaying the engine's draw
/// order on a cloned rng: weapon dice roll, then the crit roll.
fn predict_attack_damage(session: &GameSession, rng: &ChaCha8Rng) -> i32 {
    let weapon = session
        .catalog
        .weapon(session.player.equipped.weapon.as_deref().unwrap())
        .unwrap();
    let mut probe = rng.clone();
    let mut damage = weapon.dice.roll(&mut probe) + session.player.strength;
    if dice::chance(&mut probe, weapon.crit_chance) {
        damage = (damage as f64 * weapon.crit_multiplier) as i32;
    }
    damage
}

#[test]
fn test_seeded_battle_damage_is_exact() {
    let mut rng = seeded(1234);
    let mut session = GameSession::with_default_content("Hero");
    let enemy = spawn_enemy(&session, "meadow_rabbit", 99);
    let defense = enemy.defense;
    session.encounter = Some(Encounter::from_enemies(vec![enemy]));

    let hp_before = session.encounter.as_ref().unwrap().enemies[0].hp;
    let expected = (predict_attack_damage(&session, &rng) - defense).max(0);

    player_attack(&mut session, None, &mut rng).unwrap();

    let enc = session.encounter.as_ref().unwrap();
    if enc.enemies.is_empty() {
        assert_eq!(enc.phase, TurnPhase::Victory);
        assert!(expected >= hp_before);
    } else {
        assert_eq!(hp_before - enc.enemies[0].hp, expected);
    }
}

#[test]
fn test_battle_to_victory_grants_exact_rewards() {
    let mut rng = seeded(77);
    let mut session = GameSession::with_default_content("Hero");
    let enemy = spawn_enemy(&session, "meadow_rabbit", 42);
    let xp_reward = enemy.xp_reward;
    let gold_reward = enemy.gold_reward;
    session.encounter = Some(Encounter::from_enemies(vec![enemy]));

    let gold_before = session.player.gold;
    let xp_before = session.player.xp;

    for _ in 0..50 {
        let expected = {
            let enc = session.encounter.as_ref().unwrap();
            let defense = enc.enemies[0].defense;
            (predict_attack_damage(&session, &rng)
                - (defense as f64
                    * (1.0
                        - session
                            .catalog
                            .weapon("rusty_sword")
                            .unwrap()
                            .ignore_defense)) as i32)
                .max(0)
        };
        let hp_before = session.encounter.as_ref().unwrap().enemies[0].hp;
        player_attack(&mut session, None, &mut rng).unwrap();

        let enc = session.encounter.as_ref().unwrap();
        if enc.phase == TurnPhase::Victory {
            break;
        }
        assert_eq!(hp_before - enc.enemies[0].hp, expected);
        run_enemy_phase(&mut session, &mut rng).unwrap();
        assert!(
            session.player.is_alive(),
            "a rabbit should never down a fresh hero"
        );
    }

    let enc = session.encounter.as_ref().unwrap();
    assert_eq!(enc.phase, TurnPhase::Victory, "battle must end in victory");
    assert_eq!(session.player.xp - xp_before, xp_reward);
    assert_eq!(session.player.gold - gold_before, gold_reward);
}

#[test]
fn test_same_seed_replays_identically() {
    let run = |seed: u64| {
        let mut rng = seeded(seed);
        let mut session = GameSession::with_default_content("Hero");
        let enemy = spawn_enemy(&session, "forest_wolf", 5);
        session.encounter = Some(Encounter::from_enemies(vec![enemy]));
        let mut transcript = Vec::new();
        for _ in 0..30 {
            if session.encounter.as_ref().unwrap().is_over() {
                break;
            }
            for event in player_attack(&mut session, None, &mut rng).unwrap() {
                transcript.push(event.text);
            }
            for event in run_enemy_phase(&mut session, &mut rng).unwrap() {
                transcript.push(event.text);
            }
        }
        (transcript, session.player.hp, session.player.gold)
    };
    assert_eq!(run(31), run(31));
}

#[test]
fn test_undead_battle_takes_two_kills() {
    let mut rng = seeded(8);
    let mut session = GameSession::with_default_content("Hero");
    session.player.strength = 50; // one attack fells a skeleton outright
    let enemy = spawn_enemy(&session, "skeleton", 3);
    session.encounter = Some(Encounter::from_enemies(vec![enemy]));

    player_attack(&mut session, None, &mut rng).unwrap();
    {
        let enc = session.encounter.as_ref().unwrap();
        assert_eq!(enc.enemies.len(), 1, "the skeleton rises once");
        assert!(enc.enemies[0].revived);
        assert_ne!(enc.phase, TurnPhase::Victory);
    }
    run_enemy_phase(&mut session, &mut rng).unwrap();
    player_attack(&mut session, None, &mut rng).unwrap();
    let enc = session.encounter.as_ref().unwrap();
    assert_eq!(enc.phase, TurnPhase::Victory);
    assert!(enc.enemies.is_empty());
}

#[test]
fn test_defeat_produces_death_record_and_absorbs() {
    let mut rng = seeded(13);
    let mut session = GameSession::with_default_content("Hero");
    session.player.hp = 1;
    session.player.equipped.armor = None;
    let mut enemy = spawn_enemy(&session, "elder_wyrm", 7);
    enemy.strength = 100; // guarantee the kill through any roll
    session.encounter = Some(Encounter::from_enemies(vec![enemy]));

    player_attack(&mut session, None, &mut rng).unwrap();
    run_enemy_phase(&mut session, &mut rng).unwrap();

    assert!(!session.player.is_alive());
    assert!(session.is_run_over());
    let record = session.death_record.as_ref().expect("death must be recorded");
    assert_eq!(record.name, "Hero");
    assert_eq!(record.level, 1);
    assert!(record.cause.contains("Elder Wyrm"));

    // The defeat state absorbs: no further player actions resolve.
    let err = player_attack(&mut session, None, &mut rng).unwrap_err();
    assert_eq!(err, EngineError::NotPlayersTurn);
}

#[test]
fn test_multi_enemy_battle_requires_and_honors_targets() {
    let mut rng = seeded(21);
    let mut session = GameSession::with_default_content("Hero");
    let a = spawn_enemy(&session, "forest_wolf", 1);
    let b = spawn_enemy(&session, "cave_spider", 2);
    session.encounter = Some(Encounter::from_enemies(vec![a, b]));

    assert_eq!(
        player_attack(&mut session, None, &mut rng).unwrap_err(),
        EngineError::InvalidTarget
    );

    let spider_hp = session.encounter.as_ref().unwrap().enemies[1].hp;
    player_attack(&mut session, Some(1), &mut rng).unwrap();
    let enc = session.encounter.as_ref().unwrap();
    assert!(enc.enemies[1].hp < spider_hp, "chosen target takes the hit");
    assert_eq!(
        enc.enemies[0].hp, enc.enemies[0].max_hp,
        "the other enemy is untouched"
    );
}

#[test]
fn test_alive_again_decay_is_never_capped() {
    let mut rng = seeded(101);
    let mut session = GameSession::with_default_content("Hero");
    session.player.strength = 100;
    session.player.max_hp = 500;
    session.player.hp = 500;
    let enemy = spawn_enemy(&session, "revenant", 50);
    session.encounter = Some(Encounter::from_enemies(vec![enemy]));

    let mut revivals = 0u32;
    for _ in 0..200 {
        player_attack(&mut session, None, &mut rng).unwrap();
        let enc = session.encounter.as_ref().unwrap();
        if enc.phase == TurnPhase::Victory {
            break;
        }
        let chance = enc.enemies[0].revive_chance;
        revivals += 1;
        assert_eq!(chance, 1.0 / 2f64.powi(revivals as i32));
        run_enemy_phase(&mut session, &mut rng).unwrap();
    }
    assert!(revivals >= 1, "the first revival is certain");
    assert_eq!(
        session.encounter.as_ref().unwrap().phase,
        TurnPhase::Victory
    );
}
