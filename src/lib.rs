pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod parser;
pub mod state;

pub use error::{MealPlanError, Result};
pub use models::{Day, Meal, MealType, ParseConfig};
pub use parser::{parse_meal_plan, MealPlanParser};
