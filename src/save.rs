//! Save lifecycle and death bookkeeping.
//!
//! On permanent death the active save is deleted and a death record is
//! appended to a bounded history (the 10 most recent runs). The on-disk
//! format is plain JSON under ~/.saga/.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::core::constants::DEATH_LOG_CAPACITY;
use crate::entity::player::Player;
use crate::utils::persistence::{load_json_or_default, saga_dir, save_json};

const SAVE_FILE: &str = "save.json";
const DEATH_LOG_FILE: &str = "deaths.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeathRecord {
    pub name: String,
    pub level: u32,
    pub cause: String,
    pub timestamp: i64,
}

impl DeathRecord {
    pub fn now(player: &Player, cause: &str) -> Self {
        Self {
            name: player.name.clone(),
            level: player.level,
            cause: cause.to_string(),
            timestamp: Utc::now().timestamp(),
        }
    }
}

pub struct SaveManager {
    dir: PathBuf,
}

impl SaveManager {
    pub fn new() -> io::Result<Self> {
        Ok(Self { dir: saga_dir()? })
    }

    /// Uses an isolated directory instead of ~/.saga/.
    pub fn with_dir(dir: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn save_player(&self, player: &Player) -> io::Result<()> {
        save_json(&self.dir, SAVE_FILE, player)
    }

    pub fn load_player(&self) -> io::Result<Player> {
        let json = fs::read_to_string(self.dir.join(SAVE_FILE))?;
        serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn save_exists(&self) -> bool {
        self.dir.join(SAVE_FILE).exists()
    }

    pub fn delete_save(&self) -> io::Result<()> {
        let path = self.dir.join(SAVE_FILE);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    pub fn death_history(&self) -> Vec<DeathRecord> {
        load_json_or_default(&self.dir, DEATH_LOG_FILE)
    }

    /// Permanent-death handling: the active save is removed and the
    /// record joins the history, evicting the oldest past 10 entries.
    pub fn record_death(&self, record: &DeathRecord) -> io::Result<()> {
        self.delete_save()?;
        let mut history = self.death_history();
        history.push(record.clone());
        while history.len() > DEATH_LOG_CAPACITY {
            history.remove(0);
        }
        save_json(&self.dir, DEATH_LOG_FILE, &history)
    }
}
