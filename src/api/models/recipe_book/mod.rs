mod recipe_book;
mod recipe;
mod ingredient;
mod unit_of_measure;

pub use recipe_book::*;
pub use recipe::*;
pub use ingredient::*;
pub use unit_of_measure::*;
