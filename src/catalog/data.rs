//! Built-in content tables: the default catalog the engine ships with.

use crate::catalog::types::*;
use crate::core::dice::Dice;
use crate::entity::status::StatusKind;

pub const ITEMS: &[ItemDef] = &[
    ItemDef {
        key: "health_potion",
        name: "Health Potion",
        effect: Some(ConsumableEffect::Heal(Dice::new(2, 8))),
        price: 10,
    },
    ItemDef {
        key: "greater_health_potion",
        name: "Greater Health Potion",
        effect: Some(ConsumableEffect::Heal(Dice::new(4, 8))),
        price: 25,
    },
    ItemDef {
        key: "mana_potion",
        name: "Mana Potion",
        effect: Some(ConsumableEffect::RestoreMp(Dice::new(2, 6))),
        price: 12,
    },
    ItemDef {
        key: "antidote",
        name: "Antidote",
        effect: Some(ConsumableEffect::CureStatus(StatusKind::Poison)),
        price: 8,
    },
    ItemDef {
        key: "stone_salve",
        name: "Stone Salve",
        effect: Some(ConsumableEffect::CureStatus(StatusKind::Petrified)),
        price: 15,
    },
    ItemDef {
        key: "nerve_tonic",
        name: "Nerve Tonic",
        effect: Some(ConsumableEffect::CureStatus(StatusKind::Paralyzed)),
        price: 15,
    },
    ItemDef {
        key: "fire_bomb",
        name: "Fire Bomb",
        effect: Some(ConsumableEffect::Bomb(Dice::new(3, 6))),
        price: 30,
    },
    ItemDef {
        key: "phoenix_feather",
        name: "Phoenix Feather",
        effect: Some(ConsumableEffect::GrantRevive),
        price: 120,
    },
    ItemDef {
        key: "hearty_meal",
        name: "Hearty Meal",
        effect: Some(ConsumableEffect::Heal(Dice::new(3, 8))),
        price: 18,
    },
    // Ingredients and fetch goods
    ItemDef {
        key: "rabbit_meat",
        name: "Rabbit Meat",
        effect: None,
        price: 2,
    },
    ItemDef {
        key: "herb_bundle",
        name: "Herb Bundle",
        effect: None,
        price: 3,
    },
    ItemDef {
        key: "wolf_pelt",
        name: "Wolf Pelt",
        effect: None,
        price: 6,
    },
    ItemDef {
        key: "venom_sac",
        name: "Venom Sac",
        effect: None,
        price: 7,
    },
    ItemDef {
        key: "bone_dust",
        name: "Bone Dust",
        effect: None,
        price: 4,
    },
    ItemDef {
        key: "ember_crystal",
        name: "Ember Crystal",
        effect: None,
        price: 20,
    },
    ItemDef {
        key: "grimoire_page",
        name: "Grimoire Page",
        effect: None,
        price: 25,
    },
];

pub const WEAPONS: &[WeaponDef] = &[
    WeaponDef {
        key: "rusty_sword",
        name: "Rusty Sword",
        dice: Dice::new(1, 6),
        crit_chance: 0.05,
        crit_multiplier: 2.0,
        ignore_defense: 0.0,
        bane: None,
        proc: None,
        dodge_chance: 0.0,
        price: 10,
    },
    WeaponDef {
        key: "iron_sword",
        name: "Iron Sword",
        dice: Dice::new(1, 8),
        crit_chance: 0.10,
        crit_multiplier: 2.0,
        ignore_defense: 0.0,
        bane: None,
        proc: None,
        dodge_chance: 0.0,
        price: 40,
    },
    WeaponDef {
        key: "flame_dagger",
        name: "Flame Dagger",
        dice: Dice::new(1, 6),
        crit_chance: 0.15,
        crit_multiplier: 2.0,
        ignore_defense: 0.0,
        bane: None,
        proc: Some(WeaponProc::Elemental {
            element: Element::Fire,
            dice: Dice::new(1, 4),
        }),
        dodge_chance: 0.0,
        price: 70,
    },
    WeaponDef {
        key: "storm_spear",
        name: "Storm Spear",
        dice: Dice::new(1, 8),
        crit_chance: 0.10,
        crit_multiplier: 2.0,
        ignore_defense: 0.0,
        bane: None,
        proc: Some(WeaponProc::Elemental {
            element: Element::Lightning,
            dice: Dice::new(1, 6),
        }),
        dodge_chance: 0.0,
        price: 90,
    },
    WeaponDef {
        key: "vampiric_scythe",
        name: "Vampiric Scythe",
        dice: Dice::new(1, 10),
        crit_chance: 0.10,
        crit_multiplier: 2.0,
        ignore_defense: 0.0,
        bane: None,
        proc: Some(WeaponProc::Lifesteal { fraction: 0.25 }),
        dodge_chance: 0.0,
        price: 110,
    },
    WeaponDef {
        key: "basilisk_fang",
        name: "Basilisk Fang",
        dice: Dice::new(1, 6),
        crit_chance: 0.10,
        crit_multiplier: 2.0,
        ignore_defense: 0.0,
        bane: None,
        proc: Some(WeaponProc::Petrify { proc_chance: 0.15 }),
        dodge_chance: 0.0,
        price: 100,
    },
    WeaponDef {
        key: "stun_hammer",
        name: "Stun Hammer",
        dice: Dice::new(1, 10),
        crit_chance: 0.05,
        crit_multiplier: 2.0,
        ignore_defense: 0.0,
        bane: None,
        proc: Some(WeaponProc::Paralyze { proc_chance: 0.20 }),
        dodge_chance: 0.0,
        price: 95,
    },
    WeaponDef {
        key: "hunters_bow",
        name: "Hunter's Bow",
        dice: Dice::new(1, 8),
        crit_chance: 0.10,
        crit_multiplier: 2.0,
        ignore_defense: 0.0,
        bane: None,
        proc: None,
        dodge_chance: 0.25,
        price: 85,
    },
    WeaponDef {
        key: "ghost_piercer",
        name: "Ghost Piercer",
        dice: Dice::new(1, 8),
        crit_chance: 0.10,
        crit_multiplier: 2.0,
        ignore_defense: 0.5,
        bane: None,
        proc: None,
        dodge_chance: 0.0,
        price: 130,
    },
    WeaponDef {
        key: "dragonbane_blade",
        name: "Dragonbane Blade",
        dice: Dice::new(2, 6),
        crit_chance: 0.10,
        crit_multiplier: 2.0,
        ignore_defense: 0.0,
        bane: Some(("ember_drake", 1.5)),
        proc: None,
        dodge_chance: 0.0,
        price: 200,
    },
];

pub const ARMORS: &[ArmorDef] = &[
    ArmorDef {
        key: "cloth_tunic",
        name: "Cloth Tunic",
        defense: 1,
        price: 8,
    },
    ArmorDef {
        key: "leather_armor",
        name: "Leather Armor",
        defense: 2,
        price: 30,
    },
    ArmorDef {
        key: "chainmail",
        name: "Chainmail",
        defense: 4,
        price: 80,
    },
    ArmorDef {
        key: "dragonscale_mail",
        name: "Dragonscale Mail",
        defense: 6,
        price: 220,
    },
];

pub const SHIELDS: &[ShieldDef] = &[
    ShieldDef {
        key: "wooden_shield",
        name: "Wooden Shield",
        defense: 1,
        block_chance: 0.10,
        price: 15,
    },
    ShieldDef {
        key: "tower_shield",
        name: "Tower Shield",
        defense: 2,
        block_chance: 0.25,
        price: 75,
    },
];

pub const LURES: &[LureDef] = &[
    LureDef {
        key: "shiny_lure",
        name: "Shiny Lure",
        uses: 5,
        price: 20,
    },
    LureDef {
        key: "feast_lure",
        name: "Feast Lure",
        uses: 3,
        price: 45,
    },
];

pub const SPELLS: &[SpellDef] = &[
    SpellDef {
        key: "firebolt",
        name: "Firebolt",
        mp_cost: 3,
        effect: SpellEffect::Damage(Dice::new(2, 6)),
    },
    SpellDef {
        key: "ice_lance",
        name: "Ice Lance",
        mp_cost: 5,
        effect: SpellEffect::Damage(Dice::new(3, 6)),
    },
    SpellDef {
        key: "healing_light",
        name: "Healing Light",
        mp_cost: 4,
        effect: SpellEffect::Heal(Dice::new(2, 8)),
    },
    SpellDef {
        key: "stone_hide",
        name: "Stone Hide",
        mp_cost: 4,
        effect: SpellEffect::Buff {
            kind: StatusKind::Stonehide,
            duration: 3,
            multiplier: 0.5,
        },
    },
    SpellDef {
        key: "battle_hymn",
        name: "Battle Hymn",
        mp_cost: 4,
        effect: SpellEffect::Buff {
            kind: StatusKind::Strength,
            duration: 3,
            multiplier: 1.5,
        },
    },
];

pub const SPECIES: &[SpeciesDef] = &[
    SpeciesDef {
        key: "meadow_rabbit",
        name: "Meadow Rabbit",
        class: SpeciesClass::Beast,
        base_hp: 8,
        base_strength: 1,
        damage: Dice::new(1, 3),
        defense: 0,
        ability: None,
        xp_reward: 5,
        gold_reward: 2,
        loot: &[("rabbit_meat", 0.8)],
    },
    SpeciesDef {
        key: "forest_wolf",
        name: "Forest Wolf",
        class: SpeciesClass::Beast,
        base_hp: 14,
        base_strength: 3,
        damage: Dice::new(1, 4),
        defense: 1,
        ability: Some(AbilityKind::DoubleStrike),
        xp_reward: 12,
        gold_reward: 5,
        loot: &[("wolf_pelt", 0.5)],
    },
    SpeciesDef {
        key: "cave_spider",
        name: "Cave Spider",
        class: SpeciesClass::Beast,
        base_hp: 12,
        base_strength: 2,
        damage: Dice::new(1, 4),
        defense: 0,
        ability: Some(AbilityKind::PoisonWeb),
        xp_reward: 14,
        gold_reward: 6,
        loot: &[("venom_sac", 0.4)],
    },
    SpeciesDef {
        key: "skeleton",
        name: "Skeleton",
        class: SpeciesClass::Undead,
        base_hp: 10,
        base_strength: 3,
        damage: Dice::new(1, 6),
        defense: 1,
        ability: None,
        xp_reward: 10,
        gold_reward: 4,
        loot: &[("bone_dust", 0.5)],
    },
    SpeciesDef {
        key: "ghoul",
        name: "Ghoul",
        class: SpeciesClass::Undead,
        base_hp: 18,
        base_strength: 4,
        damage: Dice::new(1, 6),
        defense: 1,
        ability: Some(AbilityKind::Enrage),
        xp_reward: 20,
        gold_reward: 8,
        loot: &[("bone_dust", 0.6)],
    },
    SpeciesDef {
        key: "necromancer",
        name: "Necromancer",
        class: SpeciesClass::Undead,
        base_hp: 24,
        base_strength: 3,
        damage: Dice::new(2, 4),
        defense: 1,
        ability: Some(AbilityKind::Necromancy),
        xp_reward: 40,
        gold_reward: 20,
        loot: &[("grimoire_page", 0.3)],
    },
    SpeciesDef {
        key: "revenant",
        name: "Revenant",
        class: SpeciesClass::Undead,
        base_hp: 20,
        base_strength: 4,
        damage: Dice::new(1, 8),
        defense: 2,
        ability: Some(AbilityKind::AliveAgain),
        xp_reward: 35,
        gold_reward: 15,
        loot: &[("bone_dust", 0.7)],
    },
    SpeciesDef {
        key: "shrine_keeper",
        name: "Shrine Keeper",
        class: SpeciesClass::Humanoid,
        base_hp: 20,
        base_strength: 3,
        damage: Dice::new(1, 6),
        defense: 2,
        ability: Some(AbilityKind::Healing),
        xp_reward: 30,
        gold_reward: 14,
        loot: &[("herb_bundle", 0.6)],
    },
    SpeciesDef {
        key: "marsh_witch",
        name: "Marsh Witch",
        class: SpeciesClass::Humanoid,
        base_hp: 22,
        base_strength: 3,
        damage: Dice::new(2, 4),
        defense: 1,
        ability: Some(AbilityKind::TruePoison),
        xp_reward: 38,
        gold_reward: 22,
        loot: &[("herb_bundle", 0.5), ("venom_sac", 0.3)],
    },
    SpeciesDef {
        key: "duel_master",
        name: "Duel Master",
        class: SpeciesClass::Humanoid,
        base_hp: 24,
        base_strength: 5,
        damage: Dice::new(1, 8),
        defense: 2,
        ability: Some(AbilityKind::UltraFocus),
        xp_reward: 42,
        gold_reward: 20,
        loot: &[],
    },
    SpeciesDef {
        key: "basilisk",
        name: "Basilisk",
        class: SpeciesClass::Monstrosity,
        base_hp: 26,
        base_strength: 5,
        damage: Dice::new(1, 8),
        defense: 3,
        ability: Some(AbilityKind::Petrification),
        xp_reward: 45,
        gold_reward: 18,
        loot: &[("venom_sac", 0.5)],
    },
    SpeciesDef {
        key: "swamp_maw",
        name: "Swamp Maw",
        class: SpeciesClass::Monstrosity,
        base_hp: 40,
        base_strength: 6,
        damage: Dice::new(2, 6),
        defense: 2,
        ability: Some(AbilityKind::Swallow),
        xp_reward: 60,
        gold_reward: 25,
        loot: &[],
    },
    SpeciesDef {
        key: "stone_golem",
        name: "Stone Golem",
        class: SpeciesClass::Monstrosity,
        base_hp: 45,
        base_strength: 6,
        damage: Dice::new(2, 4),
        defense: 5,
        ability: Some(AbilityKind::LivingShield),
        xp_reward: 70,
        gold_reward: 30,
        loot: &[("ember_crystal", 0.2)],
    },
    SpeciesDef {
        key: "ember_drake",
        name: "Ember Drake",
        class: SpeciesClass::Dragon,
        base_hp: 38,
        base_strength: 6,
        damage: Dice::new(2, 6),
        defense: 3,
        ability: Some(AbilityKind::ScorchEarth),
        xp_reward: 80,
        gold_reward: 40,
        loot: &[("ember_crystal", 0.6)],
    },
    SpeciesDef {
        key: "elder_wyrm",
        name: "Elder Wyrm",
        class: SpeciesClass::Dragon,
        base_hp: 60,
        base_strength: 8,
        damage: Dice::new(3, 6),
        defense: 4,
        ability: Some(AbilityKind::ScorchEarth),
        xp_reward: 150,
        gold_reward: 80,
        loot: &[("ember_crystal", 0.8)],
    },
];

pub const RECIPES: &[RecipeDef] = &[
    RecipeDef {
        key: "recipe_rabbit_roast",
        name: "Rabbit Roast",
        ingredients: &[("rabbit_meat", 2), ("herb_bundle", 1)],
        gold_cost: 5,
        output: "hearty_meal",
    },
    RecipeDef {
        key: "recipe_antidote",
        name: "Brewed Antidote",
        ingredients: &[("herb_bundle", 2), ("venom_sac", 1)],
        gold_cost: 10,
        output: "antidote",
    },
    RecipeDef {
        key: "recipe_fire_bomb",
        name: "Fire Bomb",
        ingredients: &[("ember_crystal", 1), ("bone_dust", 2)],
        gold_cost: 20,
        output: "fire_bomb",
    },
];

pub const QUESTS: &[QuestDef] = &[
    QuestDef {
        key: "quest_wolf_cull",
        name: "Cull the Wolves",
        goal: QuestGoal::Exterminate {
            species: "forest_wolf",
            count: 5,
        },
        reward_gold: 50,
        reward_xp: 40,
        reward_item: None,
    },
    QuestDef {
        key: "quest_spider_cull",
        name: "Clear the Webs",
        goal: QuestGoal::Exterminate {
            species: "cave_spider",
            count: 3,
        },
        reward_gold: 30,
        reward_xp: 25,
        reward_item: Some("antidote"),
    },
    QuestDef {
        key: "quest_fetch_pelts",
        name: "A Warm Winter",
        goal: QuestGoal::Fetch {
            item: "wolf_pelt",
            count: 3,
        },
        reward_gold: 60,
        reward_xp: 30,
        reward_item: None,
    },
];

pub const DECKS: &[DeckDef] = &[
    DeckDef {
        key: "deck_standard",
        name: "Standard Deck",
        copies: 1,
        specials: &[],
    },
    DeckDef {
        key: "deck_gilded",
        name: "Gilded Deck",
        copies: 2,
        specials: &[
            SpecialCardDef {
                id: "golden_ace",
                name: "Golden Ace",
                weight: 11,
            },
            SpecialCardDef {
                id: "golden_ace",
                name: "Golden Ace",
                weight: 11,
            },
        ],
    },
];

pub const SKILLS: &[SkillDef] = &[
    SkillDef {
        key: "card_sharp",
        name: "Card Sharp",
        description: "Two lucky Jokers are shuffled into every deck you play.",
    },
    SkillDef {
        key: "beast_tracker",
        name: "Beast Tracker",
        description: "You read the land and find richer prey.",
    },
];
