use std::path::Path;
use std::fs::OpenOptions;
use std::fs;
use std::io::Write;
use std::sync::RwLock;
use uuid::Uuid;
use crate::api::models::ServiceError;
use crate::api::models::recipe_book::{ RecipeBook, Recipe, UnitOfMeasure };
use crate::api::ResourceService;

pub struct RepositoryService {
    resource_service: ResourceService,
    pub recipe_book: RwLock<RecipeBook>,
    recipe_book_file_path: Box<Path>
}

impl RepositoryService {
    pub fn new(resource_service: ResourceService, recipe_book: RwLock<RecipeBook>, recipe_book_file_path: Box<Path>) -> RepositoryService {
        RepositoryService { resource_service, recipe_book, recipe_book_file_path }
    }

    pub fn find_all_recipes(&self) -> Vec<Recipe> {
        self.recipe_book.read().unwrap().recipes.clone()
    }

    pub fn find_recipe_by_id(&self, recipe_id: Uuid) -> Option<Recipe> {
        self.recipe_book.read().unwrap().recipes.iter().find(|recipe| recipe.id == recipe_id).cloned()
    }

    pub fn find_unit_of_measure_by_id(&self, unit_of_measure_id: Uuid) -> Option<UnitOfMeasure> {
        self.recipe_book.read().unwrap().units_of_measure.iter().find(|unit_of_measure| unit_of_measure.id == unit_of_measure_id).cloned()
    }

    // Whole document save; the persisted recipe is returned to the caller
    pub fn save_recipe(&self, recipe: Recipe) -> Result<Recipe, ServiceError> {
        let mut recipe_book = self.recipe_book.write().unwrap();
        let mut updated_recipe_book = recipe_book.clone();
        match updated_recipe_book.recipes.iter().position(|existing_recipe| existing_recipe.id == recipe.id) {
            Some(index) => updated_recipe_book.recipes[index] = recipe.clone(),
            None => updated_recipe_book.recipes.push(recipe.clone())
        }
        if !updated_recipe_book.is_valid() {
            return Err(ServiceError::Storage(self.resource_service.get_resource_string_by_name("invalid_recipe_book_error_message").unwrap()));
        }
        self.persist(&updated_recipe_book)?;
        *recipe_book = updated_recipe_book;
        Ok(recipe)
    }

    fn persist(&self, recipe_book: &RecipeBook) -> Result<(), ServiceError> {
        match serde_json::to_string(recipe_book) {
            Ok(recipe_book_json) => {
                match fs::create_dir_all(self.recipe_book_file_path.parent().unwrap()) {
                    Ok(_) => {
                        match OpenOptions::new().write(true).create(true).open(self.recipe_book_file_path.clone()) {
                            Ok(mut recipe_book_file) => {
                                if recipe_book_file.set_len(0).is_err() {
                                    return Err(ServiceError::Storage(self.resource_service.get_resource_string_by_name("truncating_recipe_book_file_error_message").unwrap()));
                                }
                                match recipe_book_file.write_all(recipe_book_json.as_bytes()) {
                                    Ok(_) => Ok(()),
                                    Err(error) => Err(ServiceError::Storage(self.resource_service.get_resource_string_by_name("write_to_recipe_book_file_error_message_template").unwrap() + &error.to_string()))
                                }
                            }
                            Err(error) => Err(ServiceError::Storage(self.resource_service.get_resource_string_by_name("create_or_open_recipe_book_file_error_message_template").unwrap() + &error.to_string()))
                        }
                    },
                    Err(error) => {
                        return Err(ServiceError::Storage(self.resource_service.get_resource_string_by_name("create_recipe_book_directory_error_message_template").unwrap() + &error.to_string()))
                    }
                }
            }
            Err(error) => Err(ServiceError::Storage(self.resource_service.get_resource_string_by_name("recipe_book_serialization_error_message_template").unwrap() + &error.to_string()))
        }
    }
}
