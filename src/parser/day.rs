use tracing::debug;

use crate::error::Result;
use crate::models::{Day, Meal, MealType, ParseConfig};
use crate::parser::classify::detect_meal_opener;
use crate::parser::fallback::{generate_fallback_meal, Picker};
use crate::parser::meal::parse_individual_meal;
use crate::parser::patterns::{patterns, Patterns};

/// Heading of a day segment ("Day 3: Wednesday"), if it has one before
/// its first meal.
pub fn day_title(text: &str, patterns: &Patterns) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take_while(|line| detect_meal_opener(line, patterns).is_none())
        .find(|line| patterns.day_heading.is_match(line))
        .map(|line| {
            line.trim_matches(|c: char| matches!(c, '#' | '*' | '=' | '-' | ':' | '_') || c.is_whitespace())
                .to_string()
        })
        .filter(|title| !title.is_empty())
}

/// Group a day's lines into per-meal blocks, each starting at its opener.
///
/// Lines before the first opener (headings, intro text) are dropped.
pub fn split_meal_blocks<'a>(text: &'a str, patterns: &Patterns) -> Vec<(MealType, Vec<&'a str>)> {
    let mut blocks: Vec<(MealType, Vec<&'a str>)> = Vec::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some((meal_type, _)) = detect_meal_opener(line, patterns) {
            blocks.push((meal_type, vec![line]));
        } else if let Some((_, lines)) = blocks.last_mut() {
            lines.push(line);
        }
    }

    blocks
}

/// Put meals into the day's canonical slots.
///
/// Slot `i` takes the first unused parsed meal of type
/// `MealType::for_slot(i)`; empty slots are synthesised. Parsed meals that
/// fit no slot are dropped. The result has exactly `meals_per_day` entries.
pub fn ensure_proper_meal_order(
    meals: Vec<Meal>,
    config: &ParseConfig,
    picker: &mut Picker,
) -> Vec<Meal> {
    let mut remaining: Vec<Option<Meal>> = meals.into_iter().map(Some).collect();

    (0..config.meals_per_day)
        .map(|slot| {
            let meal_type = MealType::for_slot(slot);
            remaining
                .iter_mut()
                .find(|m| matches!(m, Some(meal) if meal.meal_type == meal_type))
                .and_then(Option::take)
                .unwrap_or_else(|| {
                    debug!(slot, %meal_type, "no parsed meal for slot, synthesising");
                    generate_fallback_meal(meal_type, config, picker)
                })
        })
        .collect()
}

/// Parse one day's text into its meals.
pub fn parse_day_content(
    text: &str,
    day_number: usize,
    config: &ParseConfig,
    picker: &mut Picker,
) -> Result<Day> {
    let patterns = patterns()?;

    let mut meals = Vec::new();
    for (meal_type, lines) in split_meal_blocks(text, patterns) {
        meals.push(parse_individual_meal(meal_type, &lines, config, picker)?);
    }
    debug!(day_number, parsed = meals.len(), "parsed day content");

    Ok(Day {
        day_number,
        title: day_title(text, patterns).unwrap_or_else(|| format!("Day {}", day_number)),
        meals: ensure_proper_meal_order(meals, config, picker),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_MEALS: &str = "Day 2: Tuesday\n\
        Dinner: Herb Chicken\n\
        - 1 chicken breast\n\
        1. Roast it\n\
        Breakfast\n\
        Berry Oats\n\
        - 1 cup oats\n\
        1. Cook oats\n";

    #[test]
    fn test_day_title() {
        let p = patterns().unwrap();
        assert_eq!(day_title(TWO_MEALS, p), Some("Day 2: Tuesday".to_string()));
        assert_eq!(day_title("**Day 4**\nLunch", p), Some("Day 4".to_string()));
        assert_eq!(day_title("Lunch\nDay 9", p), None);
    }

    #[test]
    fn test_split_meal_blocks() {
        let blocks = split_meal_blocks(TWO_MEALS, patterns().unwrap());
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].0, MealType::Dinner);
        assert_eq!(blocks[0].1.len(), 3);
        assert_eq!(blocks[1].0, MealType::Breakfast);
    }

    #[test]
    fn test_meals_reordered_and_padded() {
        let config = ParseConfig::new(1, 3, 2100).unwrap();
        let day = parse_day_content(TWO_MEALS, 2, &config, &mut Picker::fixed(0)).unwrap();

        assert_eq!(day.title, "Day 2: Tuesday");
        assert_eq!(
            day.meal_types(),
            vec![MealType::Breakfast, MealType::Lunch, MealType::Dinner]
        );
        assert_eq!(day.meals[0].title, "Berry Oats");
        assert_eq!(day.meals[1].title, "Grilled Chicken Salad");
        assert_eq!(day.meals[2].title, "Herb Chicken");
    }

    #[test]
    fn test_truncates_to_meals_per_day() {
        let config = ParseConfig::new(1, 1, 2000).unwrap();
        let day = parse_day_content(TWO_MEALS, 1, &config, &mut Picker::fixed(0)).unwrap();
        assert_eq!(day.meals.len(), 1);
        assert_eq!(day.meals[0].title, "Berry Oats");
    }

    #[test]
    fn test_empty_text_is_fully_synthesised() {
        let config = ParseConfig::new(1, 4, 2000).unwrap();
        let day = parse_day_content("", 3, &config, &mut Picker::fixed(1)).unwrap();
        assert_eq!(day.title, "Day 3");
        assert_eq!(day.meals.len(), 4);
        assert_eq!(day.meals[3].title, "Hummus and Veggie Sticks");
    }
}
