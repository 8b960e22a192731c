use std::sync::RwLock;
use uuid::Uuid;
use crate::api::models::recipe_book::{ Ingredient, Recipe, RecipeBook, UnitOfMeasure };
use crate::api::models::resources_xml::{ ResourcesElement, StringElement };
use crate::api::{ RepositoryService, ResourceService };

fn string_element(name: &str, content: &str) -> StringElement {
    StringElement {
        name: String::from(name),
        content: String::from(content)
    }
}

pub fn sample_resource_service() -> ResourceService {
    ResourceService::new(ResourcesElement {
        strings: vec![
            string_element("recipe_not_found_error_message_template", "Recipe {{recipe_id}} not found"),
            string_element("ingredient_not_found_error_message_template", "Ingredient {{ingredient_id}} not found in recipe {{recipe_id}}"),
            string_element("ambiguous_ingredient_error_message_template", "More than one ingredient with id {{ingredient_id}} in recipe {{recipe_id}}"),
            string_element("unknown_unit_of_measure_error_message_template", "Unknown unit of measure {{unit_of_measure_id}}"),
            string_element("missing_recipe_id_error_message", "Expected a recipe id"),
            string_element("saved_ingredient_missing_error_message_template", "Ingredient {{ingredient_id}} is missing from saved recipe {{recipe_id}}"),
            string_element("updating_ingredient_info_message_template", "Updating ingredient {{ingredient_id}} of recipe {{recipe_id}}"),
            string_element("creating_ingredient_info_message_template", "Creating ingredient {{ingredient_id}} in recipe {{recipe_id}}"),
            string_element("deleting_ingredient_debug_message_template", "Deleting ingredient {{ingredient_id}} from recipe {{recipe_id}}"),
            string_element("invalid_recipe_book_error_message", "Recipe book failed validation"),
            string_element("recipe_book_serialization_error_message_template", "Couldn't serialize recipe book: "),
            string_element("create_recipe_book_directory_error_message_template", "Couldn't create recipe book directory: "),
            string_element("create_or_open_recipe_book_file_error_message_template", "Couldn't create or open recipe book file: "),
            string_element("truncating_recipe_book_file_error_message", "Couldn't truncate recipe book file"),
            string_element("write_to_recipe_book_file_error_message_template", "Couldn't write to recipe book file: ")
        ]
    })
}

pub fn sample_recipe_book() -> RecipeBook {
    let cups = UnitOfMeasure {
        id: Uuid::new_v4(),
        description: String::from("Cups")
    };
    let teaspoons = UnitOfMeasure {
        id: Uuid::new_v4(),
        description: String::from("Teaspoons")
    };
    let recipe = Recipe {
        id: Uuid::new_v4(),
        image_url: None,
        name: String::from("Chocolate chip cookies"),
        description: String::from("Chewy chocolate chip cookies"),
        ingredients: vec![
            Ingredient {
                id: Uuid::new_v4(),
                description: String::from("Flour"),
                amount: 2.0,
                unit_of_measure_id: cups.id
            },
            Ingredient {
                id: Uuid::new_v4(),
                description: String::from("Sugar"),
                amount: 1.5,
                unit_of_measure_id: cups.id
            }
        ]
    };
    RecipeBook {
        recipes: vec![recipe],
        units_of_measure: vec![cups, teaspoons]
    }
}

pub fn sample_repository_service(temp_dir: &tempfile::TempDir) -> (RepositoryService, RecipeBook) {
    let recipe_book = sample_recipe_book();
    let file_path = temp_dir.path().join("recipe_book.json");
    let repository_service = RepositoryService::new(
        sample_resource_service(),
        RwLock::new(recipe_book.clone()),
        file_path.into_boxed_path()
    );
    (repository_service, recipe_book)
}
