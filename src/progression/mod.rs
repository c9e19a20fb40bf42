//! Thin rule layer over the entity model: leveling, crafting, quests.

pub mod leveling;
pub mod quests;
pub mod recipes;
