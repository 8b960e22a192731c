use crate::api::models::recipe_book::Ingredient;
use uuid::Uuid;
use rocket::serde::{ Deserialize, Serialize };

#[derive(Serialize, Deserialize, Clone)]
#[serde(crate = "rocket::serde")]
pub struct IngredientCommand {
    pub id: Option<Uuid>,
    #[serde(rename  = "recipeId")]
    pub recipe_id: Option<Uuid>,
    pub description: String,
    pub amount: f64,
    #[serde(rename  = "unitOfMeasureId")]
    pub unit_of_measure_id: Uuid
}

impl IngredientCommand {
    pub fn from_ingredient(ingredient: &Ingredient, recipe_id: Uuid) -> IngredientCommand {
        IngredientCommand {
            id: Some(ingredient.id),
            recipe_id: Some(recipe_id),
            description: ingredient.description.clone(),
            amount: ingredient.amount,
            unit_of_measure_id: ingredient.unit_of_measure_id
        }
    }

    pub fn to_ingredient(&self, id: Uuid) -> Ingredient {
        Ingredient {
            id,
            description: self.description.clone(),
            amount: self.amount,
            unit_of_measure_id: self.unit_of_measure_id
        }
    }
}
