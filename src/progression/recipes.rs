//! Alchemy and cooking: recipes convert ingredients plus gold into one
//! output item, atomically.

use crate::catalog::ContentCatalog;
use crate::core::errors::EngineError;
use crate::core::events::Event;
use crate::entity::player::Player;

/// Crafts a recipe. Every ingredient and the gold cost are checked
/// before anything is deducted, so a failed craft leaves the player
/// untouched.
pub fn craft(
    player: &mut Player,
    catalog: &ContentCatalog,
    recipe_key: &str,
) -> Result<Vec<Event>, EngineError> {
    let recipe = catalog.recipe(recipe_key)?;

    if player.gold < recipe.gold_cost {
        return Err(EngineError::InsufficientResource(format!(
            "{} gold (have {})",
            recipe.gold_cost, player.gold
        )));
    }
    for (ingredient, count) in recipe.ingredients {
        let have = player.inventory.consumable_count(ingredient);
        if have < *count {
            return Err(EngineError::InsufficientResource(format!(
                "{} x{} (have {})",
                catalog.display_name(ingredient),
                count,
                have
            )));
        }
    }

    player.spend_gold(recipe.gold_cost)?;
    for (ingredient, count) in recipe.ingredients {
        player.inventory.remove_consumables(ingredient, *count)?;
    }
    player.inventory.add_item(catalog, recipe.output)?;

    Ok(vec![Event::progress(format!(
        "You craft {}: one {}.",
        recipe.name,
        catalog.display_name(recipe.output)
    ))])
}
