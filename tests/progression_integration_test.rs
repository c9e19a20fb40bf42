//! Progression and persistence integration tests
//!
//! Quest lifecycles driven through real battles, crafting chains, and
//! the save/death-history contract.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use saga::catalog::types::Rarity;
use saga::combat::encounter::{run_enemy_phase, Encounter, TurnPhase};
use saga::combat::player_attack;
use saga::entity::enemy::spawn;
use saga::progression::{leveling, quests, recipes};
use saga::save::{DeathRecord, SaveManager};
use saga::GameSession;

fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Fights single wolves until the given number of final kills lands.
fn slay_wolves(session: &mut GameSession, rng: &mut ChaCha8Rng, kills: u32) {
    for _ in 0..kills {
        let enemy = spawn(
            session.catalog.species("forest_wolf").unwrap(),
            Rarity::Common,
            session.player.level,
            rng,
        );
        session.encounter = Some(Encounter::from_enemies(vec![enemy]));
        for _ in 0..100 {
            player_attack(session, None, rng).unwrap();
            if session.encounter.as_ref().unwrap().phase == TurnPhase::Victory {
                break;
            }
            run_enemy_phase(session, rng).unwrap();
            assert!(session.player.is_alive(), "wolves should not end the run");
        }
        assert_eq!(
            session.encounter.as_ref().unwrap().phase,
            TurnPhase::Victory
        );
        session.end_encounter();
    }
}

#[test]
fn test_extermination_quest_through_real_battles() {
    let mut rng = seeded(64);
    let mut session = GameSession::with_default_content("Hero");
    session.player.strength = 40; // keep the grind short
    session.player.max_hp = 300;
    session.player.hp = 300;

    quests::accept_quest(&mut session.player, &session.catalog, "quest_wolf_cull").unwrap();
    slay_wolves(&mut session, &mut rng, 5);

    assert_eq!(
        session.player.active_quest.as_ref().unwrap().progress,
        5,
        "every final wolf kill counts"
    );
    let gold_before = session.player.gold;
    quests::complete_quest(&mut session.player, &session.catalog).unwrap();
    assert_eq!(session.player.gold, gold_before + 50);
    assert!(session.player.active_quest.is_none());
}

#[test]
fn test_quest_cancel_penalty_scales_with_level() {
    let mut session = GameSession::with_default_content("Hero");
    leveling::grant_xp(&mut session.player, 250); // -> level 3
    assert_eq!(session.player.level, 3);
    session.player.gold = 44; // needs 45
    quests::accept_quest(&mut session.player, &session.catalog, "quest_wolf_cull").unwrap();
    assert!(quests::cancel_quest(&mut session.player, &session.catalog).is_err());

    session.player.gold = 45;
    quests::cancel_quest(&mut session.player, &session.catalog).unwrap();
    assert_eq!(session.player.gold, 0, "exactly 15 * level deducted");
    assert!(session.player.active_quest.is_none());
}

#[test]
fn test_loot_feeds_crafting() {
    let mut session = GameSession::with_default_content("Hero");
    session.player.gold = 30;
    // Stock the pantry as if looted from battles.
    session.player.inventory.add_consumable("rabbit_meat", 2);
    session.player.inventory.add_consumable("herb_bundle", 3);
    session.player.inventory.add_consumable("venom_sac", 1);

    recipes::craft(&mut session.player, &session.catalog, "recipe_rabbit_roast").unwrap();
    recipes::craft(&mut session.player, &session.catalog, "recipe_antidote").unwrap();

    assert_eq!(session.player.inventory.consumable_count("hearty_meal"), 1);
    assert_eq!(session.player.inventory.consumable_count("antidote"), 1);
    assert_eq!(session.player.gold, 30 - 5 - 10);
    // Third craft fails for want of ingredients, changing nothing.
    assert!(
        recipes::craft(&mut session.player, &session.catalog, "recipe_rabbit_roast").is_err()
    );
    assert_eq!(session.player.gold, 15);
}

#[test]
fn test_leveling_curve_matches_contract() {
    let mut session = GameSession::with_default_content("Hero");
    let mut threshold = session.player.xp_to_next_level;
    for expected_level in 2..6u32 {
        leveling::grant_xp(&mut session.player, threshold);
        assert_eq!(session.player.level, expected_level);
        let next = (threshold as f64 * 1.5) as u64;
        assert_eq!(session.player.xp_to_next_level, next);
        threshold = next - session.player.xp;
    }
}

#[test]
fn test_permanent_death_contract_with_save_manager() {
    let dir = std::env::temp_dir().join(format!("saga_it_{}", uuid_like()));
    let manager = SaveManager::with_dir(dir.clone()).unwrap();

    let mut rng = seeded(90);
    let mut session = GameSession::with_default_content("Doomed");
    manager.save_player(&session.player).unwrap();
    assert!(manager.save_exists());

    // A hopeless battle.
    session.player.hp = 1;
    session.player.equipped.armor = None;
    let mut enemy = spawn(
        session.catalog.species("elder_wyrm").unwrap(),
        Rarity::Legendary,
        1,
        &mut rng,
    );
    enemy.strength = 500;
    session.encounter = Some(Encounter::from_enemies(vec![enemy]));
    player_attack(&mut session, None, &mut rng).unwrap();
    run_enemy_phase(&mut session, &mut rng).unwrap();
    assert!(session.is_run_over());

    // The engine signals; the save boundary enforces.
    let record = session.death_record.clone().expect("death recorded");
    manager.record_death(&record).unwrap();
    assert!(!manager.save_exists(), "save deleted on permanent death");
    let history = manager.death_history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].name, "Doomed");

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn test_death_history_keeps_only_last_ten() {
    let dir = std::env::temp_dir().join(format!("saga_it_{}", uuid_like()));
    let manager = SaveManager::with_dir(dir.clone()).unwrap();
    for i in 0..13u32 {
        let record = DeathRecord {
            name: format!("Run {}", i),
            level: i,
            cause: "misadventure".to_string(),
            timestamp: 1_700_000_000 + i as i64,
        };
        manager.record_death(&record).unwrap();
    }
    let history = manager.death_history();
    assert_eq!(history.len(), 10);
    assert_eq!(history.first().unwrap().name, "Run 3");
    assert_eq!(history.last().unwrap().name, "Run 12");
    std::fs::remove_dir_all(dir).ok();
}

fn uuid_like() -> String {
    uuid::Uuid::new_v4().to_string()
}
