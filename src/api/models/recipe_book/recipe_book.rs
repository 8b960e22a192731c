use crate::api::models::recipe_book::{ Recipe, UnitOfMeasure };
use rocket::serde::{ Deserialize, Serialize };

#[derive(Serialize, Deserialize, Clone)]
#[serde(crate = "rocket::serde")]
pub struct RecipeBook {
    pub recipes: Vec<Recipe>,
    #[serde(rename  = "unitsOfMeasure")]
    pub units_of_measure: Vec<UnitOfMeasure>
}

impl RecipeBook {
    pub fn new() -> Self {
        RecipeBook {
            recipes: vec![],
            units_of_measure: vec![]
        }
    }

    pub fn is_valid(&self) -> bool {
        // Evaluate relationships between entities
        let mut unit_of_measure_ids = vec![];
        // Check that all units of measure are unique
        for unit_of_measure in &self.units_of_measure {
            if unit_of_measure_ids.contains(&unit_of_measure.id) {
                return false;
            }
            unit_of_measure_ids.push(unit_of_measure.id);
        }
        // Check that all recipes are unique and only reference known units of measure
        let mut recipe_ids = vec![];
        for recipe in &self.recipes {
            if recipe_ids.contains(&recipe.id) {
                return false;
            }
            recipe_ids.push(recipe.id);
            // Ingredient ids only have to be unique within their own recipe
            let mut ingredient_ids = vec![];
            for ingredient in &recipe.ingredients {
                if ingredient_ids.contains(&ingredient.id) {
                    return false;
                }
                ingredient_ids.push(ingredient.id);
                if !unit_of_measure_ids.contains(&ingredient.unit_of_measure_id) {
                    return false;
                }
            }
        }
        return true;
    }
}
