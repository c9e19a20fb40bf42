//! Saga - rules engine for a single-player, turn-based RPG.
//!
//! This crate is the game's brain with no face: a combat resolver with a
//! status-effect engine, a card-game engine (blackjack and five-card
//! draw), and a data-driven content model. It consumes player intent,
//! mutates an explicit `GameSession`, and emits narrated events; all
//! randomness routes through an injected `rand::Rng` so seeded runs are
//! fully reproducible.

pub mod cards;
pub mod catalog;
pub mod combat;
pub mod core;
pub mod entity;
pub mod progression;
pub mod save;
pub mod utils;

pub use crate::catalog::ContentCatalog;
pub use crate::core::errors::EngineError;
pub use crate::core::events::{Event, EventCategory};
pub use crate::core::session::GameSession;
pub use crate::entity::player::Player;
