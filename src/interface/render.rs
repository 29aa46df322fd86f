use crate::models::{Day, ParseConfig, SavedMealPlan};
use crate::parser::total_calories;

/// Display a parsed meal plan.
pub fn display_meal_plan(days: &[Day], config: &ParseConfig) {
    if days.is_empty() {
        println!("No meal plan to show.");
        return;
    }

    println!();
    println!(
        "=== Meal Plan: {} days, {} meals/day, {} cal/day ===",
        config.days, config.meals_per_day, config.calories_per_day
    );

    for day in days {
        println!();
        println!("--- {} ---", day.title);

        for meal in &day.meals {
            println!();
            println!("  {}: {}", meal.meal_type, meal.title);
            println!("    {}", meal.timings.join(" | "));
            println!("    {}", meal.nutrition);

            println!("    Ingredients:");
            for item in &meal.ingredients {
                println!("      • {}", item);
            }

            println!("    Instructions:");
            for step in &meal.instructions {
                println!("      {}", step);
            }
        }

        let total = total_calories(&day.meals);
        if total > 0 {
            println!();
            println!("  Day total: ~{} calories", total);
        }
    }

    println!();
}

/// Display the saved plans in the library.
pub fn display_saved_plans(plans: &[&SavedMealPlan]) {
    if plans.is_empty() {
        println!("No saved meal plans.");
        return;
    }

    println!();
    println!("=== Saved Meal Plans ({} items) ===", plans.len());
    println!();

    let max_name_len = plans.iter().map(|p| p.name.len()).max().unwrap_or(10);

    for plan in plans {
        println!(
            "  {:<width$}  {} days, {} meals/day, {} cal/day, {} chars",
            plan.name,
            plan.config.days,
            plan.config.meals_per_day,
            plan.config.calories_per_day,
            plan.raw_text.chars().count(),
            width = max_name_len
        );
    }

    println!();
}
