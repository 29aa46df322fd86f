use tracing::debug;

use crate::parser::classify::detect_meal_opener;
use crate::parser::patterns::Patterns;

/// How a document was cut into day segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitStrategy {
    Separator,
    DayHeadings,
    BlankLines,
    Whole,
}

/// Normalise line endings and surrounding whitespace.
pub fn normalize(document: &str) -> String {
    document.replace("\r\n", "\n").replace('\r', "\n").trim().to_string()
}

fn has_meal(text: &str, patterns: &Patterns) -> bool {
    text.lines().any(|line| detect_meal_opener(line, patterns).is_some())
}

/// A piece that only introduces the next one: `Day N` heading lines, or a
/// single line of intro text.
fn is_header_only(piece: &str, patterns: &Patterns) -> bool {
    let mut lines = piece.lines().map(str::trim).filter(|l| !l.is_empty());
    let Some(first) = lines.next() else {
        return true;
    };
    let rest: Vec<&str> = lines.collect();
    rest.is_empty()
        || std::iter::once(first)
            .chain(rest)
            .all(|line| patterns.day_heading.is_match(line))
}

/// Trim pieces, drop empty ones and fold header-only pieces into the next.
///
/// A heading ("Day 1") or intro line is kept as the start of the following
/// piece, and dropped when nothing follows it. A meal-less piece with real
/// content stays a day of its own.
fn merge_headers(pieces: Vec<&str>, patterns: &Patterns) -> Vec<String> {
    let mut segments = Vec::new();
    let mut pending = String::new();

    for piece in pieces.into_iter().map(str::trim).filter(|p| !p.is_empty()) {
        if !pending.is_empty() {
            pending.push('\n');
        }
        pending.push_str(piece);

        if has_meal(piece, patterns) || !is_header_only(piece, patterns) {
            segments.push(std::mem::take(&mut pending));
        }
    }

    if !pending.is_empty() && segments.is_empty() {
        segments.push(pending);
    }
    segments
}

/// Cut at the start of every `Day N` heading line.
fn split_at_headings<'a>(text: &'a str, patterns: &Patterns) -> Vec<&'a str> {
    let mut starts: Vec<usize> = patterns
        .day_heading_line
        .find_iter(text)
        .map(|m| m.start())
        .collect();
    if starts.first() != Some(&0) {
        starts.insert(0, 0);
    }

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(text.len());
            &text[start..end]
        })
        .collect()
}

/// Split a meal-plan document into per-day text segments.
///
/// Tries `=====` separators, then `Day N` heading lines. Only when neither
/// is present and fewer than `target_days` segments were found does it fall
/// back to blank-line paragraphs.
pub fn split_days(document: &str, target_days: usize, patterns: &Patterns) -> (Vec<String>, SplitStrategy) {
    let text = normalize(document);
    if text.is_empty() {
        return (Vec::new(), SplitStrategy::Whole);
    }

    let (pieces, strategy): (Vec<&str>, SplitStrategy) = if patterns.day_separator.is_match(&text) {
        (patterns.day_separator.split(&text).collect(), SplitStrategy::Separator)
    } else if patterns.day_heading_line.is_match(&text) {
        (split_at_headings(&text, patterns), SplitStrategy::DayHeadings)
    } else {
        (vec![text.as_str()], SplitStrategy::Whole)
    };
    let segments = merge_headers(pieces, patterns);

    if strategy == SplitStrategy::Whole && segments.len() < target_days {
        let paragraphs = merge_headers(patterns.blank_line.split(&text).collect(), patterns);
        if paragraphs.len() > segments.len() {
            debug!(segments = paragraphs.len(), "split meal plan on blank lines");
            return (paragraphs, SplitStrategy::BlankLines);
        }
    }

    debug!(segments = segments.len(), ?strategy, "split meal plan into days");
    (segments, strategy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::patterns::patterns;

    #[test]
    fn test_separator_headers_are_merged() {
        let doc = "===== Day 1 =====\nBreakfast\nOats\n===== Day 2 =====\nLunch\nSoup";
        let (segments, strategy) = split_days(doc, 2, patterns().unwrap());
        assert_eq!(strategy, SplitStrategy::Separator);
        assert_eq!(segments, vec!["Day 1\nBreakfast\nOats", "Day 2\nLunch\nSoup"]);
    }

    #[test]
    fn test_long_separator() {
        let doc = "Breakfast\nOats\r\n====================\r\nBreakfast\nEggs";
        let (segments, _) = split_days(doc, 2, patterns().unwrap());
        assert_eq!(segments, vec!["Breakfast\nOats", "Breakfast\nEggs"]);
    }

    #[test]
    fn test_day_heading_split_keeps_intro_with_first_day() {
        let doc = "Your plan:\n## Day 1\nBreakfast\nOats\n## Day 2\nDinner\nStew\nEnjoy!";
        let (segments, strategy) = split_days(doc, 2, patterns().unwrap());
        assert_eq!(strategy, SplitStrategy::DayHeadings);
        assert_eq!(segments.len(), 2);
        assert!(segments[0].starts_with("Your plan:\n## Day 1"));
        assert!(segments[1].ends_with("Enjoy!"));
    }

    #[test]
    fn test_blank_line_fallback() {
        let doc = "Breakfast\nOats\nLunch\nSoup\n\n  \nBreakfast\nEggs\nLunch\nSalad";
        let (segments, strategy) = split_days(doc, 2, patterns().unwrap());
        assert_eq!(strategy, SplitStrategy::BlankLines);
        assert_eq!(segments.len(), 2);
    }

    #[test]
    fn test_blank_lines_ignored_when_structured() {
        let doc = "Day 1\nBreakfast\nOats\n\nLunch\nSoup";
        let (segments, strategy) = split_days(doc, 3, patterns().unwrap());
        assert_eq!(strategy, SplitStrategy::DayHeadings);
        assert_eq!(segments.len(), 1);
    }

    #[test]
    fn test_mealless_day_keeps_its_position() {
        let doc = "===== Day 1 =====\nBreakfast\nOat Bowl\n\
                   ===== Day 2 =====\nRest day: light eating only\nGreen Smoothie\n\
                   ===== Day 3 =====\nBreakfast\nEgg Muffins";
        let (segments, strategy) = split_days(doc, 3, patterns().unwrap());
        assert_eq!(strategy, SplitStrategy::Separator);
        assert_eq!(
            segments,
            vec![
                "Day 1\nBreakfast\nOat Bowl",
                "Day 2\nRest day: light eating only\nGreen Smoothie",
                "Day 3\nBreakfast\nEgg Muffins",
            ]
        );
    }

    #[test]
    fn test_separator_days_are_not_split_on_blank_lines() {
        let doc = "===== Day 1 =====\nBreakfast\nOats\n\nLunch\nSoup\n\nDinner\nStew";
        let (segments, strategy) = split_days(doc, 3, patterns().unwrap());
        assert_eq!(strategy, SplitStrategy::Separator);
        assert_eq!(segments, vec!["Day 1\nBreakfast\nOats\n\nLunch\nSoup\n\nDinner\nStew"]);
    }

    #[test]
    fn test_empty_and_mealless_documents() {
        let p = patterns().unwrap();
        assert!(split_days("   \n ", 3, p).0.is_empty());
        let (segments, _) = split_days("just some words", 3, p);
        assert_eq!(segments, vec!["just some words"]);
    }
}
