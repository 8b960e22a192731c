mod api;

#[macro_use] extern crate rocket;
extern crate env_logger;
use std::sync::Arc;
use rocket::{ Build, Rocket, State };
use rocket::serde::json::Json;
use uuid::Uuid;
use crate::api::models::{ GenericError, IngredientCommand, InputError, ServiceError };
use crate::api::models::recipe_book::Recipe;
use crate::api::{ IngredientService, RecipeService, RepositoryServiceFactory, ResourceServiceFactory };

#[derive(Responder)]
enum ErrorResponse {
    #[response(status = 400)]
    BadRequest(Json<InputError>),
    #[response(status = 404)]
    NotFound(Json<GenericError>),
    #[response(status = 409)]
    Conflict(Json<GenericError>),
    #[response(status = 500)]
    InternalServerError(Json<GenericError>)
}

impl From<ServiceError> for ErrorResponse {
    fn from(error: ServiceError) -> ErrorResponse {
        match error {
            ServiceError::InvalidReference(message) => ErrorResponse::BadRequest(Json(InputError { message })),
            ServiceError::NotFound(message) => ErrorResponse::NotFound(Json(GenericError { message })),
            ServiceError::AmbiguousMatch(message) => ErrorResponse::Conflict(Json(GenericError { message })),
            ServiceError::Storage(message) => ErrorResponse::InternalServerError(Json(GenericError { message }))
        }
    }
}

#[get("/api/recipes")]
fn recipes_get(recipe_service: &State<RecipeService>) -> Json<Vec<Recipe>> {
    Json(recipe_service.get_recipes())
}

#[get("/api/recipes/<recipe_id>/ingredients/<ingredient_id>")]
fn ingredient_get(ingredient_service: &State<IngredientService>, recipe_id: Uuid, ingredient_id: Uuid) -> Result<Json<IngredientCommand>, ErrorResponse> {
    match ingredient_service.find_by_recipe_id_and_ingredient_id(recipe_id, ingredient_id) {
        Ok(ingredient_command) => Ok(Json(ingredient_command)),
        Err(error) => Err(ErrorResponse::from(error))
    }
}

#[post("/api/recipes/<recipe_id>/ingredients", data = "<ingredient_command_input>")]
fn ingredient_post(ingredient_service: &State<IngredientService>, recipe_id: Uuid, ingredient_command_input: String) -> Result<Json<IngredientCommand>, ErrorResponse> {
    let temp = ingredient_command_input.trim();
    if temp.is_empty() {
        return Err(ErrorResponse::BadRequest(Json(InputError { message: String::from("Expected an ingredient") })));
    }
    match serde_json::from_str::<IngredientCommand>(temp) {
        Ok(mut ingredient_command) => {
            // The recipe id in the path wins over whatever the body carries
            ingredient_command.recipe_id = Some(recipe_id);
            match ingredient_service.save_ingredient_command(&ingredient_command) {
                Ok(saved_ingredient_command) => Ok(Json(saved_ingredient_command)),
                Err(error) => Err(ErrorResponse::from(error))
            }
        },
        Err(_) => Err(ErrorResponse::BadRequest(Json(InputError { message: String::from("Couldn't parse ingredient") })))
    }
}

#[delete("/api/recipes/<recipe_id>/ingredients/<ingredient_id>")]
fn ingredient_delete(ingredient_service: &State<IngredientService>, recipe_id: Uuid, ingredient_id: Uuid) -> Result<Json<Uuid>, ErrorResponse> {
    match ingredient_service.delete_by_id(recipe_id, ingredient_id) {
        Ok(_) => Ok(Json(ingredient_id)),
        Err(error) => Err(ErrorResponse::from(error))
    }
}

fn build_rocket(recipe_service: RecipeService, ingredient_service: IngredientService) -> Rocket<Build> {
    rocket::build()
        .mount("/", routes![recipes_get, ingredient_get, ingredient_post, ingredient_delete])
        .manage(recipe_service)
        .manage(ingredient_service)
}

#[launch]
fn rocket() -> _ {
    env_logger::init();
    let resource_service = ResourceServiceFactory::create_or_panic();
    let repository_service = Arc::new(RepositoryServiceFactory::create_or_panic(resource_service.clone()));
    let recipe_service = RecipeService::new(repository_service.clone());
    let ingredient_service = IngredientService::new(resource_service, repository_service);
    build_rocket(recipe_service, ingredient_service)
}
