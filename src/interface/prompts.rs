use dialoguer::{Confirm, Input};

use crate::error::{MealPlanError, Result};
use crate::state::PlanLibrary;

/// Prompt for a name to save a plan under.
pub fn prompt_plan_name(default: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Name for this meal plan")
        .default(default.to_string())
        .interact_text()?;

    let name = input.trim();
    if name.is_empty() {
        return Err(MealPlanError::InvalidInput("Plan name cannot be empty".to_string()));
    }
    Ok(name.to_string())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Resolve a plan name, offering the closest saved name when there is no
/// exact match.
pub fn resolve_plan_name(library: &PlanLibrary, query: &str) -> Result<String> {
    if let Some(plan) = library.get(query) {
        return Ok(plan.name.clone());
    }

    let suggestion = library
        .closest_match(query)
        .ok_or_else(|| MealPlanError::PlanNotFound(query.to_string()))?;

    let confirm = prompt_yes_no(&format!("Did you mean '{}'?", suggestion.name), true)?;
    if confirm {
        Ok(suggestion.name.clone())
    } else {
        Err(MealPlanError::PlanNotFound(query.to_string()))
    }
}
