use crate::api::models::recipe_book::Ingredient;
use uuid::Uuid;
use serde::{ Deserialize, Serialize };

#[derive(Serialize, Deserialize, Clone)]
pub struct Recipe {
    pub id: Uuid,
    #[serde(rename  = "imageUrl")]
    pub image_url: Option<String>,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>
}

impl Recipe {
    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.push(ingredient);
    }
}
