use std::fs;
use std::sync::RwLock;
use rocket::serde::json::serde_json;
use crate::api::models::recipe_book::RecipeBook;
use crate::api::{ RepositoryService, ResourceService };

pub struct RepositoryServiceFactory {}

impl RepositoryServiceFactory {
    pub fn create_or_panic(resource_service: ResourceService) -> RepositoryService {
        let home_dir = dirs::home_dir().unwrap();
        let recipe_book_file_path = dotenv::var("RECIPE_BOOK_FILE_PATH").unwrap();
        let file_path = home_dir.join(recipe_book_file_path);
        let recipe_book: RecipeBook;
        match fs::read_to_string(file_path.clone()) {
            Ok(existing_recipe_book_json) => {
                recipe_book = serde_json::from_str(&existing_recipe_book_json).unwrap();
            }
            Err(_) => {
                recipe_book = RecipeBook::new();
            }
        }
        if !recipe_book.is_valid() {
            let invalid_recipe_book_message = resource_service.get_resource_string_by_name("invalid_recipe_book_error_message").unwrap();
            panic!("{}", invalid_recipe_book_message);
        }

        RepositoryService::new(resource_service, RwLock::new(recipe_book), file_path.into_boxed_path())
    }
}
