mod config;
mod plan;
mod saved;

pub use config::{ParseConfig, MAX_DAYS, MAX_MEALS_PER_DAY};
pub use plan::{Day, Meal, MealType};
pub use saved::SavedMealPlan;
