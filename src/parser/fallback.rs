use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::models::{Day, Meal, MealType, ParseConfig};
use crate::parser::constants::*;
use crate::parser::nutrition::MacroBreakdown;

/// Source of choices for synthesised titles.
///
/// `Fixed` always takes the same index (wrapping), so fallback titles are
/// exact in tests.
#[derive(Debug, Clone)]
pub enum Picker {
    Seeded(StdRng),
    Fixed(usize),
}

impl Picker {
    pub fn seeded(seed: u64) -> Self {
        Picker::Seeded(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Picker::Seeded(StdRng::from_entropy())
    }

    pub fn fixed(index: usize) -> Self {
        Picker::Fixed(index)
    }

    /// Choose one option. Returns "" only for an empty list.
    pub fn pick<'a>(&mut self, options: &[&'a str]) -> &'a str {
        if options.is_empty() {
            return "";
        }
        match self {
            Picker::Seeded(rng) => options.choose(rng).copied().unwrap_or(options[0]),
            Picker::Fixed(index) => options[*index % options.len()],
        }
    }
}

impl Default for Picker {
    fn default() -> Self {
        Picker::from_entropy()
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// "<Adjective> <MealType>" for meals whose text has no usable title.
pub fn fallback_title(meal_type: MealType, picker: &mut Picker) -> String {
    format!("{} {}", picker.pick(&TITLE_ADJECTIVES), meal_type)
}

pub fn default_timings() -> Vec<String> {
    owned(&DEFAULT_TIMINGS)
}

pub fn default_ingredients() -> Vec<String> {
    owned(&DEFAULT_INGREDIENTS)
}

pub fn default_instructions() -> Vec<String> {
    owned(&DEFAULT_INSTRUCTIONS)
}

/// A fully synthesised meal.
pub fn generate_fallback_meal(meal_type: MealType, config: &ParseConfig, picker: &mut Picker) -> Meal {
    Meal {
        meal_type,
        title: picker.pick(fallback_titles(meal_type)).to_string(),
        ingredients: owned(&FALLBACK_INGREDIENTS),
        instructions: owned(&FALLBACK_INSTRUCTIONS),
        nutrition: MacroBreakdown::for_config(config).to_string(),
        timings: default_timings(),
    }
}

/// A fully synthesised day with one meal per slot.
pub fn generate_fallback_day(day_number: usize, config: &ParseConfig, picker: &mut Picker) -> Day {
    let meals = (0..config.meals_per_day)
        .map(|slot| generate_fallback_meal(MealType::for_slot(slot), config, picker))
        .collect();

    Day {
        day_number,
        title: format!("Day {}", day_number),
        meals,
    }
}

/// A fully synthesised plan of `config.days` days.
pub fn generate_fallback_meal_plan(config: &ParseConfig, picker: &mut Picker) -> Vec<Day> {
    (1..=config.days)
        .map(|n| generate_fallback_day(n, config, picker))
        .collect()
}
