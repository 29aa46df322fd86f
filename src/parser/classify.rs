use crate::models::MealType;
use crate::parser::constants::{
    MIN_TITLE_LEN, NON_TITLE_KEYWORDS, NUTRITION_KEYWORDS, OPENER_MAX_OFFSET,
};
use crate::parser::patterns::Patterns;

/// What a single line of meal-plan text contributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Starts a new meal. Carries any text after the keyword.
    Opener(MealType, String),
    Ingredient(String),
    Instruction(String),
    Nutrition(String),
    Timing(String),
    Title(String),
    Skip,
}

/// Rows made only of `-`, `=`, `_` or `*`.
pub fn is_separator(line: &str) -> bool {
    line.chars().count() >= 3 && line.chars().all(|c| matches!(c, '-' | '=' | '_' | '*' | '─'))
}

/// Split a leading list bullet (`•`, `-`, `*`) off a trimmed line.
///
/// `**bold**` is emphasis, not a bullet.
fn strip_bullet(line: &str) -> (bool, &str) {
    if let Some(rest) = line.strip_prefix('•') {
        return (true, rest.trim_start());
    }
    if let Some(rest) = line.strip_prefix('-') {
        if !rest.starts_with('-') {
            return (true, rest.trim_start());
        }
    }
    if let Some(rest) = line.strip_prefix('*') {
        if !rest.starts_with('*') {
            return (true, rest.trim_start());
        }
    }
    (false, line)
}

/// Remove markdown emphasis and heading marks around a line.
fn strip_markdown(line: &str) -> &str {
    line.trim_matches(|c: char| matches!(c, '*' | '_' | '#' | '>') || c.is_whitespace())
}

/// Find a meal keyword near the start of the line.
///
/// Only the leftmost keyword counts, and it must begin within the first
/// few characters so that mentions in running text do not open a meal.
pub fn detect_meal_opener(line: &str, patterns: &Patterns) -> Option<(MealType, String)> {
    let trimmed = line.trim();
    let m = patterns.meal_keyword.find(trimmed)?;
    if trimmed[..m.start()].chars().count() >= OPENER_MAX_OFFSET {
        return None;
    }

    let meal_type = match m.as_str().to_lowercase().as_str() {
        "breakfast" => MealType::Breakfast,
        "lunch" => MealType::Lunch,
        "dinner" => MealType::Dinner,
        _ => MealType::Snack,
    };

    let rest = trimmed[m.end()..]
        .trim_start_matches(|c: char| c.is_alphabetic())
        .trim_start_matches(|c: char| {
            matches!(c, ':' | '-' | '–' | '—' | '*' | '#' | '|' | '_') || c.is_whitespace()
        })
        .trim_end_matches(|c: char| matches!(c, '*' | '_' | '#') || c.is_whitespace());

    Some((meal_type, rest.to_string()))
}

/// Clean a line into a meal title, if it can be one.
pub fn title_candidate(line: &str, patterns: &Patterns) -> Option<String> {
    let trimmed = strip_markdown(line.trim());
    if trimmed.chars().count() < MIN_TITLE_LEN || is_separator(trimmed) {
        return None;
    }
    if strip_bullet(trimmed).0
        || patterns.instruction.is_match(trimmed)
        || patterns.day_heading.is_match(trimmed)
    {
        return None;
    }

    let lower = trimmed.to_lowercase();
    if NON_TITLE_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return None;
    }
    if patterns.measured_ingredient.is_match(trimmed) {
        return None;
    }

    let cleaned = patterns.title_noise.replace_all(trimmed, "");
    let cleaned = patterns.whitespace.replace_all(cleaned.trim(), " ");
    if cleaned.chars().count() < MIN_TITLE_LEN {
        return None;
    }
    Some(cleaned.into_owned())
}

fn is_timing(text: &str, patterns: &Patterns) -> bool {
    patterns.timing_label.is_match(text)
        || patterns.timing_phrase.is_match(text)
        || patterns.timing_mention.is_match(text)
        || patterns.servings.is_match(text)
        || patterns.leading_quantity.is_match(text)
}

/// Bulleted lines need a figure to count as nutrition, since ingredients
/// like "low-fat yogurt" mention macro words.
fn is_nutrition(text: &str, bulleted: bool, patterns: &Patterns) -> bool {
    if patterns.grams_macro.is_match(text) || patterns.calorie_figure.is_match(text) {
        return true;
    }
    if bulleted {
        return false;
    }
    let lower = text.to_lowercase();
    NUTRITION_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// A label line such as "Ingredients:" with nothing after it.
fn is_section_header(text: &str) -> bool {
    text.ends_with(':') && !text.chars().any(|c| c.is_ascii_digit())
}

/// Classify one line of a day's text.
pub fn classify_line(line: &str, patterns: &Patterns) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() || is_separator(trimmed) {
        return LineKind::Skip;
    }

    if let Some((meal_type, rest)) = detect_meal_opener(trimmed, patterns) {
        return LineKind::Opener(meal_type, rest);
    }

    let (bulleted, body) = strip_bullet(trimmed);
    let text = strip_markdown(body);
    if text.is_empty() {
        return LineKind::Skip;
    }

    // Bulleted numbered steps are instructions, not ingredients.
    if patterns.instruction.is_match(text) {
        return LineKind::Instruction(text.to_string());
    }
    if is_timing(text, patterns) {
        return LineKind::Timing(text.to_string());
    }
    if is_section_header(text) {
        return LineKind::Skip;
    }
    if is_nutrition(text, bulleted, patterns) {
        return LineKind::Nutrition(text.to_string());
    }
    if bulleted {
        return LineKind::Ingredient(text.to_string());
    }

    match title_candidate(text, patterns) {
        Some(title) => LineKind::Title(title),
        None => LineKind::Skip,
    }
}
