use tracing::{debug, warn};

use crate::error::{MealPlanError, Result};
use crate::models::{Day, MealType, ParseConfig};
use crate::parser::day::parse_day_content;
use crate::parser::fallback::{generate_fallback_day, generate_fallback_meal_plan, Picker};
use crate::parser::nutrition::has_complete_macros;
use crate::parser::patterns::patterns;
use crate::parser::segment::split_days;

/// Turns generated meal-plan text into a fixed-shape list of days.
#[derive(Debug, Clone, Default)]
pub struct MealPlanParser {
    picker: Picker,
}

impl MealPlanParser {
    pub fn new(picker: Picker) -> Self {
        Self { picker }
    }

    /// Parser whose synthesised titles are reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Picker::seeded(seed))
    }

    /// Parse a document. Never fails.
    ///
    /// Any error from the extraction pipeline is logged and the whole plan
    /// is synthesised instead. An out-of-range shape is clamped first, so
    /// zero days or meals per day count as one.
    pub fn parse(&mut self, document: &str, config: &ParseConfig) -> Vec<Day> {
        let config = config.clamped();

        match self.try_parse(document, &config) {
            Ok(days) => days,
            Err(e) => {
                warn!(error = %e, "meal plan parsing failed, synthesising full plan");
                generate_fallback_meal_plan(&config, &mut self.picker)
            }
        }
    }

    /// The fallible pipeline behind [`MealPlanParser::parse`].
    pub fn try_parse(&mut self, document: &str, config: &ParseConfig) -> Result<Vec<Day>> {
        config.validate()?;
        let patterns = patterns()?;

        let (segments, strategy) = split_days(document, config.days, patterns);
        debug!(segments = segments.len(), ?strategy, days = config.days, "parsing meal plan");

        let mut days = Vec::with_capacity(config.days);
        for i in 0..segments.len().max(config.days) {
            if i >= config.days {
                break;
            }
            let text = segments.get(i).map(String::as_str).unwrap_or("");
            days.push(parse_day_content(text, i + 1, config, &mut self.picker)?);
        }

        while days.len() < config.days {
            days.push(generate_fallback_day(days.len() + 1, config, &mut self.picker));
        }

        check_shape(&days, config)?;
        Ok(days)
    }

    /// A plan made only of synthesised days.
    pub fn fallback_plan(&mut self, config: &ParseConfig) -> Vec<Day> {
        generate_fallback_meal_plan(config, &mut self.picker)
    }
}

/// Verify the output contract of a parsed plan.
pub fn check_shape(days: &[Day], config: &ParseConfig) -> Result<()> {
    if days.len() != config.days {
        return Err(MealPlanError::ShapeMismatch(format!(
            "expected {} days, got {}",
            config.days,
            days.len()
        )));
    }

    for day in days {
        if day.meals.len() != config.meals_per_day {
            return Err(MealPlanError::ShapeMismatch(format!(
                "day {} has {} meals, expected {}",
                day.day_number,
                day.meals.len(),
                config.meals_per_day
            )));
        }

        for (slot, meal) in day.meals.iter().enumerate() {
            if meal.meal_type != MealType::for_slot(slot) {
                return Err(MealPlanError::ShapeMismatch(format!(
                    "day {} slot {} holds {}",
                    day.day_number,
                    slot + 1,
                    meal.meal_type
                )));
            }
            if meal.title.is_empty()
                || meal.ingredients.is_empty()
                || meal.instructions.is_empty()
                || meal.timings.is_empty()
                || !has_complete_macros(&meal.nutrition)
            {
                return Err(MealPlanError::ShapeMismatch(format!(
                    "day {} {} is missing content",
                    day.day_number, meal.meal_type
                )));
            }
        }
    }

    Ok(())
}

/// Parse with an entropy-seeded parser. A missing document is treated as
/// empty.
pub fn parse_meal_plan(document: Option<&str>, config: &ParseConfig) -> Vec<Day> {
    MealPlanParser::default().parse(document.unwrap_or_default(), config)
}
