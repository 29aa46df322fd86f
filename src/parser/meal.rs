use crate::error::Result;
use crate::models::{Meal, MealType, ParseConfig};
use crate::parser::classify::{classify_line, LineKind};
use crate::parser::fallback::{
    default_ingredients, default_instructions, default_timings, fallback_title, Picker,
};
use crate::parser::nutrition::resolve_nutrition;
use crate::parser::patterns::{patterns, Patterns};

/// Field buffers for the meal currently being read.
#[derive(Debug, Default)]
struct MealAccumulator {
    title: Option<String>,
    ingredients: Vec<String>,
    instructions: Vec<String>,
    nutrition: Vec<String>,
    timings: Vec<String>,
}

impl MealAccumulator {
    fn push(&mut self, kind: LineKind, patterns: &Patterns) {
        match kind {
            // Text after the keyword, e.g. "Lunch: Quinoa Bowl (450 kcal)".
            LineKind::Opener(_, rest) => match classify_line(&rest, patterns) {
                LineKind::Opener(..) => {}
                inline => self.push(inline, patterns),
            },
            LineKind::Title(title) => {
                if self.title.is_none() {
                    self.title = Some(title);
                }
            }
            LineKind::Ingredient(text) => self.ingredients.push(text),
            LineKind::Instruction(text) => self.instructions.push(text),
            LineKind::Nutrition(text) => self.nutrition.push(text),
            LineKind::Timing(text) => self.timings.push(text),
            LineKind::Skip => {}
        }
    }

    /// Build the meal, filling empty fields with defaults.
    fn finish(self, meal_type: MealType, config: &ParseConfig, picker: &mut Picker) -> Meal {
        let title = self
            .title
            .unwrap_or_else(|| fallback_title(meal_type, picker));

        Meal {
            meal_type,
            title,
            ingredients: non_empty_or(self.ingredients, default_ingredients),
            instructions: non_empty_or(self.instructions, default_instructions),
            nutrition: resolve_nutrition(&self.nutrition, config),
            timings: non_empty_or(self.timings, default_timings),
        }
    }
}

fn non_empty_or(items: Vec<String>, default: fn() -> Vec<String>) -> Vec<String> {
    if items.is_empty() {
        default()
    } else {
        items
    }
}

/// Extract one meal from the lines of its block.
///
/// The first line is normally the opener that named `meal_type`; a title
/// written after the keyword on that line takes precedence over later lines.
pub fn parse_individual_meal(
    meal_type: MealType,
    lines: &[&str],
    config: &ParseConfig,
    picker: &mut Picker,
) -> Result<Meal> {
    let patterns = patterns()?;
    let mut acc = MealAccumulator::default();
    for line in lines {
        acc.push(classify_line(line, patterns), patterns);
    }
    Ok(acc.finish(meal_type, config, picker))
}
