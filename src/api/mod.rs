mod ingredient_service;
mod recipe_service;
mod repository_service;
mod repository_service_factory;
mod resource_service;
mod resource_service_factory;
pub mod models;
#[cfg(test)]
pub mod test_support;

pub use ingredient_service::*;
pub use recipe_service::*;
pub use repository_service::*;
pub use repository_service_factory::*;
pub use resource_service::*;
pub use resource_service_factory::*;
