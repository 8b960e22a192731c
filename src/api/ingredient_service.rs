use std::sync::Arc;
use serde_json::json;
use uuid::Uuid;
use crate::api::models::{ IngredientCommand, ServiceError };
use crate::api::{ RepositoryService, ResourceService };

pub struct IngredientService {
    resource_service: ResourceService,
    repository_service: Arc<RepositoryService>
}

impl IngredientService {
    pub fn new(resource_service: ResourceService, repository_service: Arc<RepositoryService>) -> IngredientService {
        IngredientService { resource_service, repository_service }
    }

    pub fn find_by_recipe_id_and_ingredient_id(&self, recipe_id: Uuid, ingredient_id: Uuid) -> Result<IngredientCommand, ServiceError> {
        let recipe = match self.repository_service.find_recipe_by_id(recipe_id) {
            Some(recipe) => recipe,
            None => return Err(self.recipe_not_found_error(recipe_id))
        };
        let matching_ingredients: Vec<_> = recipe.ingredients.iter().filter(|ingredient| ingredient.id == ingredient_id).collect();
        match matching_ingredients.len() {
            1 => Ok(IngredientCommand::from_ingredient(matching_ingredients[0], recipe.id)),
            0 => Err(self.ingredient_not_found_error(recipe_id, ingredient_id)),
            _ => {
                // More than one ingredient claiming the same id means the book is corrupt
                let message_data = &json!({ "recipe_id": recipe_id, "ingredient_id": ingredient_id });
                let ambiguous_ingredient_message = self.resource_service.render_resource_template_string_by_name("ambiguous_ingredient_error_message_template", message_data).unwrap();
                Err(ServiceError::AmbiguousMatch(ambiguous_ingredient_message))
            }
        }
    }

    pub fn save_ingredient_command(&self, command: &IngredientCommand) -> Result<IngredientCommand, ServiceError> {
        let recipe_id = match command.recipe_id {
            Some(recipe_id) => recipe_id,
            None => {
                let missing_recipe_id_message = self.resource_service.get_resource_string_by_name("missing_recipe_id_error_message").unwrap();
                return Err(ServiceError::InvalidReference(missing_recipe_id_message));
            }
        };
        let mut recipe = match self.repository_service.find_recipe_by_id(recipe_id) {
            Some(recipe) => recipe,
            None => return Err(self.recipe_not_found_error(recipe_id))
        };
        let unit_of_measure = match self.repository_service.find_unit_of_measure_by_id(command.unit_of_measure_id) {
            Some(unit_of_measure) => unit_of_measure,
            None => {
                let message_data = &json!({ "unit_of_measure_id": command.unit_of_measure_id });
                let unknown_unit_of_measure_message = self.resource_service.render_resource_template_string_by_name("unknown_unit_of_measure_error_message_template", message_data).unwrap();
                return Err(ServiceError::InvalidReference(unknown_unit_of_measure_message));
            }
        };

        let saved_ingredient_id: Uuid;
        let existing_index = command.id.and_then(|ingredient_id| recipe.ingredients.iter().position(|ingredient| ingredient.id == ingredient_id));
        match existing_index {
            Some(index) => {
                let ingredient_found = &mut recipe.ingredients[index];
                ingredient_found.description = command.description.clone();
                ingredient_found.amount = command.amount;
                ingredient_found.unit_of_measure_id = unit_of_measure.id;
                saved_ingredient_id = ingredient_found.id;
                let message_data = &json!({ "recipe_id": recipe_id, "ingredient_id": saved_ingredient_id });
                let updating_ingredient_message = self.resource_service.render_resource_template_string_by_name("updating_ingredient_info_message_template", message_data).unwrap();
                log::info!("{}", updating_ingredient_message);
            }
            None => {
                // The id is assigned here, before saving, so the saved ingredient
                // can always be found again by id
                let ingredient_created = command.to_ingredient(Uuid::new_v4());
                saved_ingredient_id = ingredient_created.id;
                recipe.add_ingredient(ingredient_created);
                let message_data = &json!({ "recipe_id": recipe_id, "ingredient_id": saved_ingredient_id });
                let creating_ingredient_message = self.resource_service.render_resource_template_string_by_name("creating_ingredient_info_message_template", message_data).unwrap();
                log::info!("{}", creating_ingredient_message);
            }
        }

        let saved_recipe = self.repository_service.save_recipe(recipe)?;
        match saved_recipe.ingredients.iter().find(|ingredient| ingredient.id == saved_ingredient_id) {
            Some(saved_ingredient) => Ok(IngredientCommand::from_ingredient(saved_ingredient, saved_recipe.id)),
            None => {
                let message_data = &json!({ "recipe_id": recipe_id, "ingredient_id": saved_ingredient_id });
                let saved_ingredient_missing_message = self.resource_service.render_resource_template_string_by_name("saved_ingredient_missing_error_message_template", message_data).unwrap();
                Err(ServiceError::Storage(saved_ingredient_missing_message))
            }
        }
    }

    pub fn delete_by_id(&self, recipe_id: Uuid, ingredient_id: Uuid) -> Result<(), ServiceError> {
        let message_data = &json!({ "recipe_id": recipe_id, "ingredient_id": ingredient_id });
        let deleting_ingredient_message = self.resource_service.render_resource_template_string_by_name("deleting_ingredient_debug_message_template", message_data).unwrap();
        log::debug!("{}", deleting_ingredient_message);

        let mut recipe = match self.repository_service.find_recipe_by_id(recipe_id) {
            Some(recipe) => recipe,
            None => return Err(self.recipe_not_found_error(recipe_id))
        };
        match recipe.ingredients.iter().position(|ingredient| ingredient.id == ingredient_id) {
            Some(index) => {
                recipe.ingredients.remove(index);
                self.repository_service.save_recipe(recipe)?;
                Ok(())
            }
            None => Err(self.ingredient_not_found_error(recipe_id, ingredient_id))
        }
    }

    fn recipe_not_found_error(&self, recipe_id: Uuid) -> ServiceError {
        let message_data = &json!({ "recipe_id": recipe_id });
        let recipe_not_found_message = self.resource_service.render_resource_template_string_by_name("recipe_not_found_error_message_template", message_data).unwrap();
        log::debug!("{}", recipe_not_found_message);
        ServiceError::NotFound(recipe_not_found_message)
    }

    fn ingredient_not_found_error(&self, recipe_id: Uuid, ingredient_id: Uuid) -> ServiceError {
        let message_data = &json!({ "recipe_id": recipe_id, "ingredient_id": ingredient_id });
        let ingredient_not_found_message = self.resource_service.render_resource_template_string_by_name("ingredient_not_found_error_message_template", message_data).unwrap();
        log::debug!("{}", ingredient_not_found_message);
        ServiceError::NotFound(ingredient_not_found_message)
    }
}
