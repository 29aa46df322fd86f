use std::fmt::Write as _;

use crate::models::{Day, ParseConfig};

/// Plain-text version of a plan for a share sheet or a message.
pub fn format_meal_plan_for_sharing(days: &[Day], config: &ParseConfig) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "My {}-Day Meal Plan", days.len());
    let _ = writeln!(
        out,
        "{} calories/day • {} meals/day",
        config.calories_per_day, config.meals_per_day
    );

    for day in days {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", day.title.to_uppercase());

        for meal in &day.meals {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}: {}", meal.meal_type, meal.title);
            let _ = writeln!(out, "{}", meal.nutrition);
            let _ = writeln!(out, "{}", meal.timings.join(" | "));

            let _ = writeln!(out, "Ingredients:");
            for item in &meal.ingredients {
                let _ = writeln!(out, "• {}", item);
            }

            let _ = writeln!(out, "Instructions:");
            for step in &meal.instructions {
                let _ = writeln!(out, "{}", step);
            }
        }
    }

    out.trim_end().to_string()
}
