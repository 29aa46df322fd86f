pub mod export;
pub mod prompts;
pub mod render;
pub mod share;

pub use export::{write_plan_csv, write_plan_json};
pub use prompts::{prompt_plan_name, prompt_yes_no, resolve_plan_name};
pub use render::{display_meal_plan, display_saved_plans};
pub use share::format_meal_plan_for_sharing;
