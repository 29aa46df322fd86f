use std::fmt;

use serde::{Deserialize, Serialize};

/// An eating occasion. Declaration order is the canonical order within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// All meal types in canonical order.
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    /// Capitalised display name.
    pub fn name(self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }

    /// Lower-case key used when matching meal openers.
    pub fn keyword(self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    /// Meal type for the slot at `index` in a day.
    ///
    /// Slots past the four canonical types are extra snacks.
    pub fn for_slot(index: usize) -> MealType {
        Self::ALL.get(index).copied().unwrap_or(MealType::Snack)
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single meal with recipe-like content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub meal_type: MealType,
    pub title: String,
    pub ingredients: Vec<String>,
    /// Numbered instruction sentences, e.g. "1. Toast bread".
    pub instructions: Vec<String>,
    /// "<cal> calories • <p>g protein • <c>g carbs • <f>g fat" or the
    /// nutrition lines found in the text.
    pub nutrition: String,
    pub timings: Vec<String>,
}

/// One calendar day of meals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// 1-based.
    pub day_number: usize,
    pub title: String,
    pub meals: Vec<Meal>,
}

impl Day {
    /// Meal types in the order they appear.
    pub fn meal_types(&self) -> Vec<MealType> {
        self.meals.iter().map(|m| m.meal_type).collect()
    }

    /// Find the first meal of a given type.
    pub fn meal(&self, meal_type: MealType) -> Option<&Meal> {
        self.meals.iter().find(|m| m.meal_type == meal_type)
    }
}
