use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Meal, ParseConfig};
use crate::parser::constants::*;
use crate::parser::patterns::patterns;

/// Computed macro split of a calorie target, in whole grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroBreakdown {
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

/// Round to the nearest whole number, ties to even.
fn whole(value: f64) -> u32 {
    value.max(0.0).round_ties_even() as u32
}

impl MacroBreakdown {
    /// Split `calories` into protein, carbs and fat by the fixed ratios.
    pub fn from_calories(calories: f64) -> Self {
        Self {
            calories: whole(calories),
            protein_g: whole(calories * PROTEIN_CALORIE_SHARE / KCAL_PER_GRAM_PROTEIN),
            carbs_g: whole(calories * CARB_CALORIE_SHARE / KCAL_PER_GRAM_CARB),
            fat_g: whole(calories * FAT_CALORIE_SHARE / KCAL_PER_GRAM_FAT),
        }
    }

    /// Breakdown for one meal of the configured plan.
    pub fn for_config(config: &ParseConfig) -> Self {
        Self::from_calories(config.calories_per_meal())
    }

    /// Calories implied by the gram figures.
    pub fn macro_calories(&self) -> f64 {
        self.protein_g as f64 * KCAL_PER_GRAM_PROTEIN
            + self.carbs_g as f64 * KCAL_PER_GRAM_CARB
            + self.fat_g as f64 * KCAL_PER_GRAM_FAT
    }
}

impl fmt::Display for MacroBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} calories • {}g protein • {}g carbs • {}g fat",
            self.calories, self.protein_g, self.carbs_g, self.fat_g
        )
    }
}

/// Whether nutrition text names calories and all three macros.
pub fn has_complete_macros(nutrition: &str) -> bool {
    let lower = nutrition.to_lowercase();
    (lower.contains("calorie") || lower.contains("kcal"))
        && lower.contains("protein")
        && lower.contains("carb")
        && lower.contains("fat")
}

/// Join extracted nutrition lines, replacing them with the computed
/// breakdown when any macro is missing.
pub fn resolve_nutrition(lines: &[String], config: &ParseConfig) -> String {
    let joined = lines.join(NUTRITION_JOINER);
    if has_complete_macros(&joined) {
        joined
    } else {
        MacroBreakdown::for_config(config).to_string()
    }
}

/// First calorie figure in a nutrition string.
pub fn calorie_figure(nutrition: &str) -> Option<u32> {
    let caps = patterns().ok()?.calorie_figure.captures(nutrition)?;
    caps.get(1)?.as_str().parse().ok()
}

/// Sum of the calorie figures of a set of meals (meals without one count as zero).
pub fn total_calories(meals: &[Meal]) -> u32 {
    meals
        .iter()
        .filter_map(|m| calorie_figure(&m.nutrition))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_two_meals_of_1800() {
        let config = ParseConfig::new(3, 2, 1800).unwrap();
        let breakdown = MacroBreakdown::for_config(&config);
        assert_eq!(breakdown.calories, 900);
        assert_eq!(breakdown.protein_g, 45);
        assert_eq!(breakdown.carbs_g, 112);
        assert_eq!(breakdown.fat_g, 30);
        assert_eq!(
            breakdown.to_string(),
            "900 calories • 45g protein • 112g carbs • 30g fat"
        );
    }

    #[test]
    fn test_macro_calories_close_to_target() {
        for (per_day, meals) in [(2000, 3), (1500, 4), (2750, 5), (1200, 1)] {
            let config = ParseConfig::new(1, meals, per_day).unwrap();
            let breakdown = MacroBreakdown::for_config(&config);
            let diff = (breakdown.macro_calories() - config.calories_per_meal()).abs();
            assert!(diff <= 8.5, "{per_day}/{meals}: off by {diff}");
        }
    }

    #[test]
    fn test_resolve_keeps_complete_text() {
        let config = ParseConfig::default();
        let lines = vec!["350 calories, 15g protein, 30g carbs, 18g fat".to_string()];
        assert_eq!(resolve_nutrition(&lines, &config), lines[0]);
    }

    #[test]
    fn test_resolve_replaces_partial_text() {
        let config = ParseConfig::new(1, 2, 1800).unwrap();
        let lines = vec!["Calories: 400".to_string(), "Protein: 20g".to_string()];
        assert_eq!(
            resolve_nutrition(&lines, &config),
            "900 calories • 45g protein • 112g carbs • 30g fat"
        );
    }

    #[test]
    fn test_calorie_figure() {
        assert_eq!(calorie_figure("350 calories • 15g protein"), Some(350));
        assert_eq!(calorie_figure("high in protein"), None);
    }
}
