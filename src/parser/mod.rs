pub mod classify;
pub mod constants;
pub mod day;
pub mod document;
pub mod fallback;
pub mod meal;
pub mod nutrition;
pub mod patterns;
pub mod segment;

pub use classify::{classify_line, detect_meal_opener, LineKind};
pub use day::{ensure_proper_meal_order, parse_day_content};
pub use document::{check_shape, parse_meal_plan, MealPlanParser};
pub use fallback::{generate_fallback_day, generate_fallback_meal, generate_fallback_meal_plan, Picker};
pub use meal::parse_individual_meal;
pub use nutrition::{has_complete_macros, total_calories, MacroBreakdown};
pub use segment::{split_days, SplitStrategy};
