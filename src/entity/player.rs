//! Player state: vitals, equipment references, inventory, progression
//! bookkeeping, and the player-side damage rules.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::catalog::{ContentCatalog, ItemCategory};
use crate::core::constants::*;
use crate::core::dice;
use crate::core::errors::EngineError;
use crate::entity::status::{StatusEffects, StatusKind};

/// Equipped item references into the catalog. The definitions stay owned
/// by the catalog; these are keys only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipped {
    pub weapon: Option<String>,
    pub armor: Option<String>,
    pub shield: Option<String>,
    pub lure: Option<String>,
}

/// Countable collections per item category. Consumables stack; owned
/// weapons/armors/shields are key lists; lures pool remaining uses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    consumables: HashMap<String, u32>,
    pub weapons: Vec<String>,
    pub armors: Vec<String>,
    pub shields: Vec<String>,
    lure_uses: HashMap<String, u32>,
}

impl Inventory {
    pub fn consumable_count(&self, key: &str) -> u32 {
        self.consumables.get(key).copied().unwrap_or(0)
    }

    pub fn add_consumable(&mut self, key: &str, count: u32) {
        *self.consumables.entry(key.to_string()).or_insert(0) += count;
    }

    /// Deducts `count` of a consumable, rejecting the whole operation if
    /// the stack is short. Counts never go negative.
    pub fn remove_consumables(&mut self, key: &str, count: u32) -> Result<(), EngineError> {
        let have = self.consumable_count(key);
        if have < count {
            return Err(EngineError::InsufficientResource(format!(
                "{} x{} (have {})",
                key, count, have
            )));
        }
        let left = have - count;
        if left == 0 {
            self.consumables.remove(key);
        } else {
            self.consumables.insert(key.to_string(), left);
        }
        Ok(())
    }

    pub fn lure_uses(&self, key: &str) -> u32 {
        self.lure_uses.get(key).copied().unwrap_or(0)
    }

    pub fn add_lure_uses(&mut self, key: &str, uses: u32) {
        *self.lure_uses.entry(key.to_string()).or_insert(0) += uses;
    }

    /// Spends one lure use; returns false when none remain.
    pub fn spend_lure_use(&mut self, key: &str) -> bool {
        match self.lure_uses.get_mut(key) {
            Some(uses) if *uses > 0 => {
                *uses -= 1;
                if *uses == 0 {
                    self.lure_uses.remove(key);
                }
                true
            }
            _ => false,
        }
    }

    /// Routes a new item into the right bucket by its catalog category.
    pub fn add_item(&mut self, catalog: &ContentCatalog, key: &str) -> Result<(), EngineError> {
        match catalog.category_of(key)? {
            ItemCategory::Consumable => self.add_consumable(key, 1),
            ItemCategory::Weapon => self.weapons.push(key.to_string()),
            ItemCategory::Armor => self.armors.push(key.to_string()),
            ItemCategory::Shield => self.shields.push(key.to_string()),
            ItemCategory::Lure => {
                let uses = catalog.lure(key)?.uses;
                self.add_lure_uses(key, uses);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveQuest {
    pub key: String,
    pub progress: u32,
}

/// Result of one incoming hit on the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerDamage {
    pub blocked: bool,
    pub dealt: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub xp: u64,
    pub xp_to_next_level: u64,
    pub hp: i32,
    pub max_hp: i32,
    pub mp: i32,
    pub max_mp: i32,
    pub strength: i32,
    pub intelligence: i32,
    pub gold: u64,
    pub equipped: Equipped,
    pub inventory: Inventory,
    pub spells: HashSet<String>,
    pub skills: HashSet<String>,
    pub active_quest: Option<ActiveQuest>,
    /// Legendary species defeated at least once.
    pub legacy_kills: HashSet<String>,
    /// One-shot auto-revive, armed by an item effect.
    pub revive_charge: bool,
    pub statuses: StatusEffects,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        let mut inventory = Inventory::default();
        inventory.add_consumable("health_potion", 2);
        inventory.weapons.push("rusty_sword".to_string());
        inventory.armors.push("cloth_tunic".to_string());

        let mut spells = HashSet::new();
        spells.insert("firebolt".to_string());
        spells.insert("healing_light".to_string());

        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            level: 1,
            xp: 0,
            xp_to_next_level: BASE_XP_TO_NEXT_LEVEL,
            hp: BASE_PLAYER_HP,
            max_hp: BASE_PLAYER_HP,
            mp: BASE_PLAYER_MP,
            max_mp: BASE_PLAYER_MP,
            strength: BASE_PLAYER_STRENGTH,
            intelligence: BASE_PLAYER_INTELLIGENCE,
            gold: 25,
            equipped: Equipped {
                weapon: Some("rusty_sword".to_string()),
                armor: Some("cloth_tunic".to_string()),
                shield: None,
                lure: None,
            },
            inventory,
            spells,
            skills: HashSet::new(),
            active_quest: None,
            legacy_kills: HashSet::new(),
            revive_charge: false,
            statuses: StatusEffects::new(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Total passive defense from equipped armor and shield.
    pub fn defense(&self, catalog: &ContentCatalog) -> i32 {
        let armor = self
            .equipped
            .armor
            .as_deref()
            .and_then(|k| catalog.armor(k).ok())
            .map_or(0, |d| d.defense);
        let shield = self
            .equipped
            .shield
            .as_deref()
            .and_then(|k| catalog.shield(k).ok())
            .map_or(0, |d| d.defense);
        armor + shield
    }

    /// Applies an incoming hit. An equipped shield may fully block it
    /// unless the source ignores defense; otherwise armor plus shield
    /// defense reduce it, and a stonehide buff scales down whatever gets
    /// through. HP is not floored at zero here: `is_alive` treats any
    /// non-positive HP as dead.
    pub fn take_damage<R: Rng + ?Sized>(
        &mut self,
        amount: i32,
        ignores_defense: bool,
        catalog: &ContentCatalog,
        rng: &mut R,
    ) -> PlayerDamage {
        if !ignores_defense {
            if let Some(shield) = self
                .equipped
                .shield
                .as_deref()
                .and_then(|k| catalog.shield(k).ok())
            {
                if dice::chance(rng, shield.block_chance) {
                    return PlayerDamage {
                        blocked: true,
                        dealt: 0,
                    };
                }
            }
        }

        let defense = if ignores_defense {
            0
        } else {
            self.defense(catalog)
        };
        let mut dealt = (amount - defense).max(0);
        if let Some(effect) = self.statuses.get(StatusKind::Stonehide) {
            dealt = (dealt as f64 * effect.multiplier) as i32;
        }
        self.hp -= dealt;
        PlayerDamage {
            blocked: false,
            dealt,
        }
    }

    pub fn heal(&mut self, amount: i32) -> i32 {
        let healed = amount.min(self.max_hp - self.hp).max(0);
        self.hp += healed;
        healed
    }

    pub fn restore_mp(&mut self, amount: i32) -> i32 {
        let restored = amount.min(self.max_mp - self.mp).max(0);
        self.mp += restored;
        restored
    }

    pub fn spend_gold(&mut self, amount: u64) -> Result<(), EngineError> {
        if self.gold < amount {
            return Err(EngineError::InsufficientResource(format!(
                "{} gold (have {})",
                amount, self.gold
            )));
        }
        self.gold -= amount;
        Ok(())
    }

    pub fn spend_mp(&mut self, amount: i32) -> Result<(), EngineError> {
        if self.mp < amount {
            return Err(EngineError::InsufficientResource(format!(
                "{} MP (have {})",
                amount, self.mp
            )));
        }
        self.mp -= amount;
        Ok(())
    }
}
