//! The game session: one explicit value owning the player, the content
//! catalog, and the active encounter. Every engine entry point takes the
//! session by reference; there are no ambient globals.

use serde::{Deserialize, Serialize};

use crate::catalog::ContentCatalog;
use crate::combat::encounter::{Encounter, TurnPhase};
use crate::core::events::EventLog;
use crate::entity::player::Player;
use crate::save::DeathRecord;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub player: Player,
    #[serde(skip, default = "ContentCatalog::default_content")]
    pub catalog: ContentCatalog,
    pub encounter: Option<Encounter>,
    /// Rolling log of recent narration, capped for display.
    #[serde(skip)]
    pub log: EventLog,
    /// Set once on permanent death; the caller hands it to SaveManager.
    pub death_record: Option<DeathRecord>,
}

impl GameSession {
    pub fn new(player: Player, catalog: ContentCatalog) -> Self {
        Self {
            player,
            catalog,
            encounter: None,
            log: EventLog::new(),
            death_record: None,
        }
    }

    pub fn with_default_content(name: impl Into<String>) -> Self {
        Self::new(Player::new(name), ContentCatalog::default_content())
    }

    /// True while a battle is in progress (not in an absorbing state).
    pub fn in_combat(&self) -> bool {
        self.encounter.as_ref().is_some_and(|enc| !enc.is_over())
    }

    /// Clears a finished encounter, returning it for inspection. Active
    /// battles are left in place.
    pub fn end_encounter(&mut self) -> Option<Encounter> {
        if self.encounter.as_ref().is_some_and(|enc| enc.is_over()) {
            self.encounter.take()
        } else {
            None
        }
    }

    /// The run is over once a defeat has been recorded.
    pub fn is_run_over(&self) -> bool {
        self.encounter
            .as_ref()
            .is_some_and(|enc| enc.phase == TurnPhase::Defeat)
            || self.death_record.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session() {
        let session = GameSession::with_default_content("Hero");
        assert!(!session.in_combat());
        assert!(!session.is_run_over());
        assert!(session.encounter.is_none());
        assert!(session.log.is_empty());
    }

    #[test]
    fn test_end_encounter_only_when_over() {
        let mut session = GameSession::with_default_content("Hero");
        let mut enc = Encounter::new();
        enc.phase = TurnPhase::Victory;
        session.encounter = Some(enc);
        assert!(session.end_encounter().is_some());
        assert!(session.encounter.is_none());

        session.encounter = Some(Encounter::new());
        assert!(session.end_encounter().is_none(), "active battles stay");
        assert!(session.encounter.is_some());
    }
}
