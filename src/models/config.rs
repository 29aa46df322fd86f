use serde::{Deserialize, Serialize};

use crate::error::{MealPlanError, Result};

/// Longest plan that can be requested.
pub const MAX_DAYS: usize = 366;

/// Most meals a single day can hold.
pub const MAX_MEALS_PER_DAY: usize = 12;

/// Target shape the parsed plan must conform to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseConfig {
    pub days: usize,
    pub meals_per_day: usize,
    pub calories_per_day: u32,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            days: 7,
            meals_per_day: 3,
            calories_per_day: 2000,
        }
    }
}

impl ParseConfig {
    pub fn new(days: usize, meals_per_day: usize, calories_per_day: u32) -> Result<Self> {
        let config = Self {
            days,
            meals_per_day,
            calories_per_day,
        };
        config.validate()?;
        Ok(config)
    }

    /// Day count must be within `1..=MAX_DAYS` and meals per day within
    /// `1..=MAX_MEALS_PER_DAY`.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_DAYS).contains(&self.days) {
            return Err(MealPlanError::InvalidConfig(format!(
                "days must be between 1 and {}, got {}",
                MAX_DAYS, self.days
            )));
        }
        if !(1..=MAX_MEALS_PER_DAY).contains(&self.meals_per_day) {
            return Err(MealPlanError::InvalidConfig(format!(
                "meals per day must be between 1 and {}, got {}",
                MAX_MEALS_PER_DAY, self.meals_per_day
            )));
        }
        Ok(())
    }

    /// The nearest shape that passes [`ParseConfig::validate`].
    pub fn clamped(&self) -> Self {
        Self {
            days: self.days.clamp(1, MAX_DAYS),
            meals_per_day: self.meals_per_day.clamp(1, MAX_MEALS_PER_DAY),
            calories_per_day: self.calories_per_day,
        }
    }

    /// Calorie target of a single meal.
    pub fn calories_per_meal(&self) -> f64 {
        self.calories_per_day as f64 / self.meals_per_day.max(1) as f64
    }
}
