//! Immutable key -> definition content store, supplied at startup.

pub mod data;
pub mod types;

pub use types::*;

use std::collections::HashMap;

use crate::core::errors::EngineError;

/// Read-only content the engine consults by key. Definitions are owned
/// here; entities hold key references only.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    items: HashMap<&'static str, ItemDef>,
    weapons: HashMap<&'static str, WeaponDef>,
    armors: HashMap<&'static str, ArmorDef>,
    shields: HashMap<&'static str, ShieldDef>,
    lures: HashMap<&'static str, LureDef>,
    spells: HashMap<&'static str, SpellDef>,
    species: HashMap<&'static str, SpeciesDef>,
    recipes: HashMap<&'static str, RecipeDef>,
    quests: HashMap<&'static str, QuestDef>,
    decks: HashMap<&'static str, DeckDef>,
    skills: HashMap<&'static str, SkillDef>,
    /// Stable draw order for random species selection.
    species_keys: Vec<&'static str>,
}

impl ContentCatalog {
    /// Builds the catalog from the built-in content tables.
    pub fn default_content() -> Self {
        let species_keys: Vec<&'static str> = data::SPECIES.iter().map(|s| s.key).collect();
        Self {
            items: data::ITEMS.iter().map(|d| (d.key, d.clone())).collect(),
            weapons: data::WEAPONS.iter().map(|d| (d.key, d.clone())).collect(),
            armors: data::ARMORS.iter().map(|d| (d.key, d.clone())).collect(),
            shields: data::SHIELDS.iter().map(|d| (d.key, d.clone())).collect(),
            lures: data::LURES.iter().map(|d| (d.key, d.clone())).collect(),
            spells: data::SPELLS.iter().map(|d| (d.key, d.clone())).collect(),
            species: data::SPECIES.iter().map(|d| (d.key, d.clone())).collect(),
            recipes: data::RECIPES.iter().map(|d| (d.key, d.clone())).collect(),
            quests: data::QUESTS.iter().map(|d| (d.key, d.clone())).collect(),
            decks: data::DECKS.iter().map(|d| (d.key, d.clone())).collect(),
            skills: data::SKILLS.iter().map(|d| (d.key, d.clone())).collect(),
            species_keys,
        }
    }

    fn missing(key: &str) -> EngineError {
        EngineError::UnknownKey(key.to_string())
    }

    pub fn item(&self, key: &str) -> Result<&ItemDef, EngineError> {
        self.items.get(key).ok_or_else(|| Self::missing(key))
    }

    pub fn weapon(&self, key: &str) -> Result<&WeaponDef, EngineError> {
        self.weapons.get(key).ok_or_else(|| Self::missing(key))
    }

    pub fn armor(&self, key: &str) -> Result<&ArmorDef, EngineError> {
        self.armors.get(key).ok_or_else(|| Self::missing(key))
    }

    pub fn shield(&self, key: &str) -> Result<&ShieldDef, EngineError> {
        self.shields.get(key).ok_or_else(|| Self::missing(key))
    }

    pub fn lure(&self, key: &str) -> Result<&LureDef, EngineError> {
        self.lures.get(key).ok_or_else(|| Self::missing(key))
    }

    pub fn spell(&self, key: &str) -> Result<&SpellDef, EngineError> {
        self.spells.get(key).ok_or_else(|| Self::missing(key))
    }

    pub fn species(&self, key: &str) -> Result<&SpeciesDef, EngineError> {
        self.species.get(key).ok_or_else(|| Self::missing(key))
    }

    pub fn recipe(&self, key: &str) -> Result<&RecipeDef, EngineError> {
        self.recipes.get(key).ok_or_else(|| Self::missing(key))
    }

    pub fn quest(&self, key: &str) -> Result<&QuestDef, EngineError> {
        self.quests.get(key).ok_or_else(|| Self::missing(key))
    }

    pub fn deck(&self, key: &str) -> Result<&DeckDef, EngineError> {
        self.decks.get(key).ok_or_else(|| Self::missing(key))
    }

    pub fn skill(&self, key: &str) -> Result<&SkillDef, EngineError> {
        self.skills.get(key).ok_or_else(|| Self::missing(key))
    }

    pub fn species_keys(&self) -> &[&'static str] {
        &self.species_keys
    }

    /// Which inventory bucket an owned key belongs to. Checks every
    /// definition table since keys are namespaced by convention only.
    pub fn category_of(&self, key: &str) -> Result<ItemCategory, EngineError> {
        if self.items.contains_key(key) {
            Ok(ItemCategory::Consumable)
        } else if self.weapons.contains_key(key) {
            Ok(ItemCategory::Weapon)
        } else if self.armors.contains_key(key) {
            Ok(ItemCategory::Armor)
        } else if self.shields.contains_key(key) {
            Ok(ItemCategory::Shield)
        } else if self.lures.contains_key(key) {
            Ok(ItemCategory::Lure)
        } else {
            Err(Self::missing(key))
        }
    }

    /// Display name for any owned key.
    pub fn display_name<'a>(&self, key: &'a str) -> &'a str {
        if let Some(d) = self.items.get(key) {
            d.name
        } else if let Some(d) = self.weapons.get(key) {
            d.name
        } else if let Some(d) = self.armors.get(key) {
            d.name
        } else if let Some(d) = self.shields.get(key) {
            d.name
        } else if let Some(d) = self.lures.get(key) {
            d.name
        } else {
            key
        }
    }
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self::default_content()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_lookups() {
        let catalog = ContentCatalog::default_content();
        assert!(catalog.item("health_potion").is_ok());
        assert!(catalog.weapon("rusty_sword").is_ok());
        assert!(catalog.species("skeleton").is_ok());
        assert!(catalog.recipe("recipe_rabbit_roast").is_ok());
        assert!(catalog.deck("deck_standard").is_ok());
    }

    #[test]
    fn test_unknown_key_error() {
        let catalog = ContentCatalog::default_content();
        assert_eq!(
            catalog.item("not_a_thing"),
            Err(EngineError::UnknownKey("not_a_thing".to_string()))
        );
    }

    #[test]
    fn test_category_routing() {
        let catalog = ContentCatalog::default_content();
        assert_eq!(
            catalog.category_of("health_potion").unwrap(),
            ItemCategory::Consumable
        );
        assert_eq!(
            catalog.category_of("iron_sword").unwrap(),
            ItemCategory::Weapon
        );
        assert_eq!(
            catalog.category_of("shiny_lure").unwrap(),
            ItemCategory::Lure
        );
    }

    #[test]
    fn test_loot_tables_reference_real_items() {
        let catalog = ContentCatalog::default_content();
        for key in catalog.species_keys() {
            let species = catalog.species(key).unwrap();
            for (item_key, p) in species.loot {
                assert!(
                    catalog.item(item_key).is_ok(),
                    "{} drops unknown item {}",
                    key,
                    item_key
                );
                assert!(*p > 0.0 && *p <= 1.0);
            }
        }
    }

    #[test]
    fn test_recipes_reference_real_items() {
        let catalog = ContentCatalog::default_content();
        for recipe in data::RECIPES {
            assert!(catalog.item(recipe.output).is_ok());
            for (ingredient, count) in recipe.ingredients {
                assert!(catalog.item(ingredient).is_ok());
                assert!(*count > 0);
            }
        }
    }

    #[test]
    fn test_necromancy_summon_species_exists() {
        let catalog = ContentCatalog::default_content();
        let species = catalog
            .species(crate::core::constants::NECROMANCY_SUMMON_SPECIES)
            .unwrap();
        assert_eq!(species.class, SpeciesClass::Undead);
    }
}
