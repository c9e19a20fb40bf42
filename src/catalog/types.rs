//! Content definitions. These are read-only data the engine consults by
//! key; the catalog owns them and entities hold key references only.

use serde::{Deserialize, Serialize};

use crate::core::dice::Dice;
use crate::entity::status::StatusKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemCategory {
    Consumable,
    Weapon,
    Armor,
    Shield,
    Lure,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConsumableEffect {
    Heal(Dice),
    RestoreMp(Dice),
    CureStatus(StatusKind),
    /// Thrown damage, ignores defense.
    Bomb(Dice),
    /// Arms the one-shot auto-revive charge.
    GrantRevive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemDef {
    pub key: &'static str,
    pub name: &'static str,
    /// None for ingredients and fetch-quest goods.
    pub effect: Option<ConsumableEffect>,
    pub price: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Lightning,
}

impl Element {
    pub fn name(&self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Lightning => "lightning",
        }
    }
}

/// Secondary weapon effect, resolved strictly after the primary hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WeaponProc {
    Elemental { element: Element, dice: Dice },
    Lifesteal { fraction: f64 },
    Paralyze { proc_chance: f64 },
    Petrify { proc_chance: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeaponDef {
    pub key: &'static str,
    pub name: &'static str,
    pub dice: Dice,
    pub crit_chance: f64,
    pub crit_multiplier: f64,
    /// Fraction of the target's defense this weapon bypasses (0..1).
    pub ignore_defense: f64,
    /// Flat damage multiplier against one species.
    pub bane: Option<(&'static str, f64)>,
    pub proc: Option<WeaponProc>,
    /// Chance to sidestep an enemy attack while this ranged weapon is
    /// equipped.
    pub dodge_chance: f64,
    pub price: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmorDef {
    pub key: &'static str,
    pub name: &'static str,
    pub defense: i32,
    pub price: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShieldDef {
    pub key: &'static str,
    pub name: &'static str,
    pub defense: i32,
    pub block_chance: f64,
    pub price: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LureDef {
    pub key: &'static str,
    pub name: &'static str,
    pub uses: u32,
    pub price: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SpellEffect {
    Damage(Dice),
    Heal(Dice),
    Buff {
        kind: StatusKind,
        duration: u32,
        multiplier: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpellDef {
    pub key: &'static str,
    pub name: &'static str,
    pub mp_cost: i32,
    pub effect: SpellEffect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeciesClass {
    Beast,
    Undead,
    Monstrosity,
    Humanoid,
    Dragon,
}

/// Enemy special behaviors. Active abilities roll once per turn through
/// the ability registry; `DoubleStrike` and `AliveAgain` are passive and
/// consulted by the attack and death-check paths instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityKind {
    Enrage,
    PoisonWeb,
    Petrification,
    Necromancy,
    UltraFocus,
    Healing,
    TruePoison,
    LivingShield,
    Swallow,
    ScorchEarth,
    DoubleStrike,
    AliveAgain,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesDef {
    pub key: &'static str,
    pub name: &'static str,
    pub class: SpeciesClass,
    pub base_hp: i32,
    pub base_strength: i32,
    pub damage: Dice,
    pub defense: i32,
    pub ability: Option<AbilityKind>,
    pub xp_reward: u64,
    pub gold_reward: u64,
    /// item key -> drop probability
    pub loot: &'static [(&'static str, f64)],
}

/// Rarity tier scaling an enemy's stats and rewards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
}

pub const ALL_RARITIES: [Rarity; 5] = [
    Rarity::Common,
    Rarity::Uncommon,
    Rarity::Rare,
    Rarity::Epic,
    Rarity::Legendary,
];

impl Rarity {
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    pub fn tier(&self) -> u32 {
        *self as u32
    }

    pub fn stat_multiplier(&self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 1.2,
            Rarity::Rare => 1.5,
            Rarity::Epic => 2.0,
            Rarity::Legendary => 3.0,
        }
    }

    pub fn reward_multiplier(&self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 1.3,
            Rarity::Rare => 1.8,
            Rarity::Epic => 2.5,
            Rarity::Legendary => 4.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDef {
    pub key: &'static str,
    pub name: &'static str,
    /// ingredient item key -> required count
    pub ingredients: &'static [(&'static str, u32)],
    pub gold_cost: u64,
    pub output: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestGoal {
    Exterminate {
        species: &'static str,
        count: u32,
    },
    Fetch {
        item: &'static str,
        count: u32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestDef {
    pub key: &'static str,
    pub name: &'static str,
    pub goal: QuestGoal,
    pub reward_gold: u64,
    pub reward_xp: u64,
    pub reward_item: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialCardDef {
    pub id: &'static str,
    pub name: &'static str,
    pub weight: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckDef {
    pub key: &'static str,
    pub name: &'static str,
    /// Copies of each standard rank/suit combination.
    pub copies: u32,
    pub specials: &'static [SpecialCardDef],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDef {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}
