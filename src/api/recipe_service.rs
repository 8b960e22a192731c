use std::sync::Arc;
use crate::api::models::recipe_book::Recipe;
use crate::api::RepositoryService;

pub struct RecipeService {
    repository_service: Arc<RepositoryService>
}

impl RecipeService {
    pub fn new(repository_service: Arc<RepositoryService>) -> RecipeService {
        RecipeService { repository_service }
    }

    pub fn get_recipes(&self) -> Vec<Recipe> {
        self.repository_service.find_all_recipes()
    }
}
