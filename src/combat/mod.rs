//! Combat engine: turn state machine, action resolution, enemy abilities.

pub mod abilities;
pub mod actions;
pub mod encounter;

pub use actions::{player_attack, player_cast, player_flee, player_use_item};
pub use encounter::{
    advance_enemy_turn, run_enemy_phase, start_encounter, Encounter, TurnPhase,
};
