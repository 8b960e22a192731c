mod ingredient_command;
mod service_error;
mod generic_error;
mod input_error;
pub mod recipe_book;
pub mod resources_xml;

pub use ingredient_command::*;
pub use service_error::*;
pub use generic_error::*;
pub use input_error::*;
