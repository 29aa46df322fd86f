use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;

/// Compiled line and document patterns.
#[derive(Debug)]
pub struct Patterns {
    /// Runs of five or more `=` between days.
    pub day_separator: Regex,
    /// Line-anchored `Day N` heading, used to split undelimited documents.
    pub day_heading_line: Regex,
    /// `Day N` at the start of a single line.
    pub day_heading: Regex,
    pub blank_line: Regex,
    /// Leftmost meal keyword in a line.
    pub meal_keyword: Regex,
    /// Numbered step such as `1. Toast bread`, `1.Toast bread` or `2) Serve`.
    /// A digit after the dot is a decimal quantity, not a step.
    pub instruction: Regex,
    pub measured_ingredient: Regex,
    pub timing_label: Regex,
    pub timing_phrase: Regex,
    pub timing_mention: Regex,
    pub servings: Regex,
    pub leading_quantity: Regex,
    pub grams_macro: Regex,
    /// Captures the number of a calorie figure.
    pub calorie_figure: Regex,
    /// Characters removed from titles.
    pub title_noise: Regex,
    pub whitespace: Regex,
}

impl Patterns {
    fn compile() -> std::result::Result<Self, regex::Error> {
        Ok(Self {
            day_separator: Regex::new(r"={5,}")?,
            day_heading_line: Regex::new(r"(?im)^[ \t#*>]*day\s+\d+")?,
            day_heading: Regex::new(r"(?i)^[#*=\s]*day\s+\d+")?,
            blank_line: Regex::new(r"\n\s*\n")?,
            meal_keyword: Regex::new(r"(?i)breakfast|lunch|dinner|snack")?,
            instruction: Regex::new(r"^\d+(?:\.(?:\D|$)|\)(?:\s|$))")?,
            measured_ingredient: Regex::new(r"(?i)\d+\s*(?:cup|tbsp|tsp|lb|oz|gram|ml|liter)")?,
            timing_label: Regex::new(
                r"(?i)^(?:prep|preparation|cook|cooking|total)(?:\s+time)?\s*[:\-]\s*(?:about\s+)?\d+",
            )?,
            timing_phrase: Regex::new(r"(?i)^(?:prep|cook|preparation|cooking)\b.*\btime\b.*\d+")?,
            timing_mention: Regex::new(
                r"(?i)\b(?:prep|preparation|cook|cooking)\s+time\b.*\d+\s*(?:min|minute|hour|hr)",
            )?,
            servings: Regex::new(r"(?i)^servings?\s*:\s*\d+")?,
            leading_quantity: Regex::new(
                r"(?i)^\d+\s*(?:minutes?|mins?|hours?|hrs?|servings?)\b",
            )?,
            grams_macro: Regex::new(r"(?i)\d+\s*g\s*(?:of\s+)?(?:protein|fat|carb)")?,
            calorie_figure: Regex::new(r"(?i)(\d+)\s*(?:calories|calorie|kcal|cal)\b")?,
            title_noise: Regex::new(r"[^\p{L}\p{N} \-'&()]")?,
            whitespace: Regex::new(r"\s+")?,
        })
    }
}

static PATTERNS: LazyLock<std::result::Result<Patterns, regex::Error>> =
    LazyLock::new(Patterns::compile);

/// Get the compiled patterns (cached).
pub fn patterns() -> Result<&'static Patterns> {
    Ok(PATTERNS.as_ref().map_err(Clone::clone)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        assert!(patterns().is_ok());
    }

    #[test]
    fn test_instruction_pattern() {
        let p = patterns().unwrap();
        assert!(p.instruction.is_match("1. Toast bread"));
        assert!(p.instruction.is_match("12) Serve"));
        assert!(p.instruction.is_match("1.Toast bread"));
        assert!(p.instruction.is_match("3."));
        assert!(!p.instruction.is_match("1.5 cups flour"));
        assert!(!p.instruction.is_match("2 eggs"));
    }

    #[test]
    fn test_calorie_figure_capture() {
        let p = patterns().unwrap();
        let caps = p.calorie_figure.captures("About 350 calories, 15g protein").unwrap();
        assert_eq!(&caps[1], "350");
        assert!(p.calorie_figure.captures("Calorie-dense").is_none());
    }

    #[test]
    fn test_leading_quantity_needs_unit_word() {
        let p = patterns().unwrap();
        assert!(p.leading_quantity.is_match("20 minutes"));
        assert!(p.leading_quantity.is_match("4 servings"));
        assert!(!p.leading_quantity.is_match("2 mint leaves"));
    }
}
