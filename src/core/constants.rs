// Player base stats and leveling
pub const BASE_PLAYER_HP: i32 = 30;
pub const BASE_PLAYER_MP: i32 = 10;
pub const BASE_PLAYER_STRENGTH: i32 = 5;
pub const BASE_PLAYER_INTELLIGENCE: i32 = 5;
pub const BASE_XP_TO_NEXT_LEVEL: u64 = 100;
pub const XP_THRESHOLD_GROWTH: f64 = 1.5;
pub const LEVEL_UP_HP_GAIN: i32 = 5;
pub const LEVEL_UP_MP_GAIN: i32 = 2;
pub const LEVEL_UP_STRENGTH_GAIN: i32 = 1;
pub const LEVEL_UP_INTELLIGENCE_GAIN: i32 = 1;

// Unarmed fallback when no weapon is equipped
pub const UNARMED_DICE_COUNT: u32 = 1;
pub const UNARMED_DICE_SIDES: u32 = 4;
pub const UNARMED_CRIT_CHANCE: f64 = 0.05;
pub const UNARMED_CRIT_MULTIPLIER: f64 = 2.0;

// Encounter composition. Enemy count is gated by player level:
// below MID_LEVEL always 1 enemy, below HIGH_LEVEL up to 2, then up to 3.
pub const ENCOUNTER_MID_LEVEL: u32 = 3;
pub const ENCOUNTER_HIGH_LEVEL: u32 = 6;
pub const ENCOUNTER_TWO_ENEMY_CHANCE: f64 = 0.30;
pub const ENCOUNTER_THREE_ENEMY_CHANCE: f64 = 0.10;

// Rarity draw weights, Common..Legendary. Monstrosities roll on a
// heavier-tailed table.
pub const RARITY_WEIGHTS: [f64; 5] = [60.0, 25.0, 10.0, 4.0, 1.0];
pub const RARITY_WEIGHTS_MONSTROSITY: [f64; 5] = [45.0, 25.0, 15.0, 10.0, 5.0];

// Enemy stat derivation at spawn time
pub const ENEMY_HP_PER_PLAYER_LEVEL: i32 = 2;
pub const ENEMY_STRENGTH_PER_TWO_LEVELS: i32 = 1;
pub const ENEMY_HP_VARIANCE_MIN: f64 = 0.9;
pub const ENEMY_HP_VARIANCE_MAX: f64 = 1.1;

// Combat flow
pub const FLEE_SUCCESS_CHANCE: f64 = 0.8;
pub const DOUBLE_STRIKE_CHANCE: f64 = 0.25;
pub const REVIVE_HP_FRACTION: f64 = 0.5;
pub const LEGENDARY_LOOT_MULTIPLIER: f64 = 2.0;

// Swallowed digestion damage, rolled each player end-of-turn tick
pub const DIGESTION_DICE_COUNT: u32 = 2;
pub const DIGESTION_DICE_SIDES: u32 = 4;

// Enemy ability trigger chances (one roll per enemy per turn)
pub const ENRAGE_CHANCE: f64 = 0.5;
pub const POISON_WEB_CHANCE: f64 = 0.4;
pub const PETRIFICATION_CHANCE: f64 = 0.25;
pub const ULTRA_FOCUS_CHANCE: f64 = 0.4;
pub const HEALING_CHANCE: f64 = 0.5;
pub const TRUE_POISON_CHANCE: f64 = 0.6;
pub const LIVING_SHIELD_CHANCE: f64 = 0.5;
pub const SWALLOW_CHANCE: f64 = 0.25;
pub const SCORCH_EARTH_CHANCE: f64 = 0.4;

// Ability status durations (turns)
pub const ENRAGE_DURATION: u32 = 3;
pub const POISON_DURATION: u32 = 3;
pub const PETRIFY_DURATION: u32 = 1;
pub const PARALYZE_DURATION: u32 = 1;
pub const ULTRA_FOCUS_DURATION: u32 = 3;
pub const LIVING_SHIELD_DURATION: u32 = 3;

// Necromancy summons: 2 skeletons at each HP threshold crossing
pub const NECROMANCY_SUMMON_COUNT: usize = 2;
pub const NECROMANCY_FIRST_THRESHOLD: f64 = 0.5;
pub const NECROMANCY_SECOND_THRESHOLD: f64 = 0.1;
pub const NECROMANCY_SUMMON_SPECIES: &str = "skeleton";

// Card games
pub const BLACKJACK_TARGET: i32 = 21;
pub const BLACKJACK_DEALER_STANDS_AT: i32 = 17;
pub const BLACKJACK_ACE_HIGH_WEIGHT: i32 = 11;
pub const BLACKJACK_ACE_DEMOTION: i32 = 10;
pub const POKER_HAND_SIZE: usize = 5;
pub const JOKER_SKILL_KEY: &str = "card_sharp";
pub const JOKER_COUNT: usize = 2;
pub const JOKER_WEIGHT: i32 = 10;

// Quests
pub const QUEST_CANCEL_PENALTY_PER_LEVEL: u64 = 15;

// Bounded logs
pub const EVENT_LOG_CAPACITY: usize = 10;
pub const DEATH_LOG_CAPACITY: usize = 10;
