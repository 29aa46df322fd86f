use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::MealType;

/// Share of meal calories coming from each macro.
pub const PROTEIN_CALORIE_SHARE: f64 = 0.20;
pub const CARB_CALORIE_SHARE: f64 = 0.50;
pub const FAT_CALORIE_SHARE: f64 = 0.30;

/// Energy density of each macro in kcal per gram.
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARB: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// A meal keyword must start before this character offset to open a meal.
pub const OPENER_MAX_OFFSET: usize = 5;

/// Shortest accepted meal title, in characters.
pub const MIN_TITLE_LEN: usize = 3;

/// Separator used when several nutrition lines are joined.
pub const NUTRITION_JOINER: &str = " • ";

// ─────────────────────────────────────────────────────────────────────────────
// Field defaults for meals whose text lacks a section
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_TIMINGS: [&str; 2] = ["Prep: 15 min", "Cook: 20 min"];

pub const DEFAULT_INGREDIENTS: [&str; 3] = [
    "Lean protein of choice",
    "Seasonal vegetables",
    "Whole grains",
];

pub const DEFAULT_INSTRUCTIONS: [&str; 4] = [
    "1. Gather and measure all ingredients.",
    "2. Cook the protein until done.",
    "3. Prepare the vegetables and grains.",
    "4. Combine, season to taste and serve.",
];

// ─────────────────────────────────────────────────────────────────────────────
// Fully synthesised meals
// ─────────────────────────────────────────────────────────────────────────────

pub const FALLBACK_INGREDIENTS: [&str; 3] = [
    "1 portion lean protein",
    "1 cup mixed vegetables",
    "1/2 cup whole grains",
];

pub const FALLBACK_INSTRUCTIONS: [&str; 3] = [
    "1. Prepare all ingredients.",
    "2. Cook according to preference.",
    "3. Season and serve.",
];

/// Adjectives for "<Adjective> <MealType>" titles.
pub const TITLE_ADJECTIVES: [&str; 8] = [
    "Hearty",
    "Fresh",
    "Classic",
    "Simple",
    "Wholesome",
    "Savory",
    "Balanced",
    "Vibrant",
];

/// Lines containing any of these are never taken as a title.
pub const NON_TITLE_KEYWORDS: [&str; 10] = [
    "preparation",
    "cooking",
    "servings",
    "calorie",
    "protein",
    "carb",
    "fat",
    "ingredients:",
    "instructions:",
    "nutritional",
];

/// Keywords that mark a line as nutrition text.
pub const NUTRITION_KEYWORDS: [&str; 6] = ["calorie", "protein", "fat", "carb", "kcal", "nutrition"];

/// Map from meal type to titles for synthesised meals.
pub static FALLBACK_TITLES: LazyLock<HashMap<MealType, &'static [&'static str]>> =
    LazyLock::new(|| {
        let mut m: HashMap<MealType, &'static [&'static str]> = HashMap::new();
        m.insert(
            MealType::Breakfast,
            &[
                "Berry Oatmeal Bowl",
                "Veggie Scrambled Eggs",
                "Greek Yogurt Parfait",
                "Banana Protein Pancakes",
                "Spinach Breakfast Wrap",
            ],
        );
        m.insert(
            MealType::Lunch,
            &[
                "Grilled Chicken Salad",
                "Quinoa Power Bowl",
                "Turkey Avocado Wrap",
                "Lentil Vegetable Soup",
                "Mediterranean Chickpea Plate",
            ],
        );
        m.insert(
            MealType::Dinner,
            &[
                "Baked Salmon with Greens",
                "Chicken Stir-Fry",
                "Beef and Broccoli Bowl",
                "Stuffed Bell Peppers",
                "Herb Roasted Chicken",
            ],
        );
        m.insert(
            MealType::Snack,
            &[
                "Apple with Almond Butter",
                "Hummus and Veggie Sticks",
                "Trail Mix",
                "Cottage Cheese and Berries",
                "Rice Cakes with Avocado",
            ],
        );
        m
    });

/// Titles available for a synthesised meal of this type.
pub fn fallback_titles(meal_type: MealType) -> &'static [&'static str] {
    FALLBACK_TITLES.get(&meal_type).copied().unwrap_or(&TITLE_ADJECTIVES)
}
