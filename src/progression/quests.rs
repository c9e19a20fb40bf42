//! Quest lifecycle: accept, progress, complete, cancel.
//!
//! One quest is active at a time. Extermination quests progress on
//! qualifying kills; fetch quests are settled from the inventory at
//! completion time.

use crate::catalog::types::QuestGoal;
use crate::catalog::ContentCatalog;
use crate::core::constants::QUEST_CANCEL_PENALTY_PER_LEVEL;
use crate::core::errors::EngineError;
use crate::core::events::Event;
use crate::entity::player::{ActiveQuest, Player};
use crate::progression::leveling;

pub fn accept_quest(
    player: &mut Player,
    catalog: &ContentCatalog,
    quest_key: &str,
) -> Result<Vec<Event>, EngineError> {
    let quest = catalog.quest(quest_key)?;
    if player.active_quest.is_some() {
        return Err(EngineError::InsufficientResource(
            "another quest is already underway".to_string(),
        ));
    }
    player.active_quest = Some(ActiveQuest {
        key: quest_key.to_string(),
        progress: 0,
    });
    Ok(vec![Event::progress(format!(
        "Quest accepted: {}.",
        quest.name
    ))])
}

/// Called by the combat engine on each final kill; advances a matching
/// extermination quest.
pub fn record_kill(
    player: &mut Player,
    catalog: &ContentCatalog,
    species_key: &str,
) -> Vec<Event> {
    let mut events = Vec::new();
    let Some(active) = player.active_quest.as_mut() else {
        return events;
    };
    let Ok(quest) = catalog.quest(&active.key) else {
        return events;
    };
    if let QuestGoal::Exterminate { species, count } = quest.goal {
        if species == species_key && active.progress < count {
            active.progress += 1;
            if active.progress >= count {
                events.push(Event::progress(format!(
                    "{}: goal complete! Return to claim your reward.",
                    quest.name
                )));
            } else {
                events.push(Event::progress(format!(
                    "{}: {}/{}.",
                    quest.name, active.progress, count
                )));
            }
        }
    }
    events
}

/// Turns in the active quest. Fetch quests consume the fetched goods;
/// rewards are granted only when the goal is actually met.
pub fn complete_quest(
    player: &mut Player,
    catalog: &ContentCatalog,
) -> Result<Vec<Event>, EngineError> {
    let active = player.active_quest.clone().ok_or_else(|| {
        EngineError::InsufficientResource("no quest is underway".to_string())
    })?;
    let quest = catalog.quest(&active.key)?.clone();

    match quest.goal {
        QuestGoal::Exterminate { count, .. } => {
            if active.progress < count {
                return Err(EngineError::InsufficientResource(format!(
                    "{}: {}/{} slain",
                    quest.name, active.progress, count
                )));
            }
        }
        QuestGoal::Fetch { item, count } => {
            // remove_consumables rejects when short, leaving state as-is.
            player.inventory.remove_consumables(item, count)?;
        }
    }

    let mut events = vec![Event::progress(format!("Quest complete: {}!", quest.name))];
    player.gold += quest.reward_gold;
    events.extend(leveling::grant_xp(player, quest.reward_xp));
    events.push(Event::loot(format!(
        "Reward: {} gold and {} XP.",
        quest.reward_gold, quest.reward_xp
    )));
    if let Some(item_key) = quest.reward_item {
        player.inventory.add_item(catalog, item_key)?;
        events.push(Event::loot(format!(
            "Reward: {}.",
            catalog.display_name(item_key)
        )));
    }
    player.active_quest = None;
    Ok(events)
}

/// Abandons the active quest for a gold penalty of 15 per player level.
/// Rejected outright when the penalty cannot be paid.
pub fn cancel_quest(
    player: &mut Player,
    catalog: &ContentCatalog,
) -> Result<Vec<Event>, EngineError> {
    let active = player.active_quest.clone().ok_or_else(|| {
        EngineError::InsufficientResource("no quest is underway".to_string())
    })?;
    let quest = catalog.quest(&active.key)?;
    let penalty = QUEST_CANCEL_PENALTY_PER_LEVEL * player.level as u64;
    player.spend_gold(penalty)?;
    player.active_quest = None;
    Ok(vec![Event::progress(format!(
        "You abandon {}, paying {} gold to smooth things over.",
        quest.name, penalty
    ))])
}
