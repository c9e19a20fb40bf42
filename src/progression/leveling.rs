//! XP accrual and level-ups.

use crate::core::constants::*;
use crate::core::events::Event;
use crate::entity::player::Player;

/// Adds XP and applies any level-ups: fixed stat increments, a 1.5x
/// threshold growth, and a full HP/MP restore per level gained.
pub fn grant_xp(player: &mut Player, amount: u64) -> Vec<Event> {
    let mut events = Vec::new();
    player.xp += amount;
    while player.xp >= player.xp_to_next_level {
        player.xp -= player.xp_to_next_level;
        player.xp_to_next_level =
            (player.xp_to_next_level as f64 * XP_THRESHOLD_GROWTH) as u64;
        player.level += 1;
        player.max_hp += LEVEL_UP_HP_GAIN;
        player.max_mp += LEVEL_UP_MP_GAIN;
        player.strength += LEVEL_UP_STRENGTH_GAIN;
        player.intelligence += LEVEL_UP_INTELLIGENCE_GAIN;
        player.hp = player.max_hp;
        player.mp = player.max_mp;
        events.push(Event::progress(format!(
            "Level up! {} reaches level {}.",
            player.name, player.level
        )));
    }
    events
}
