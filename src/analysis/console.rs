//! Colored console rendering of the cohort summary.

use crate::scoring::{Dimension, NeophobiaBand, DIMENSION_MAX, NEOPHOBIA_MAX};
use crate::survey::{fields, SurveyResponse};

use super::{multi_value_counts, pct, value_counts, SurveySummary};

/// Available colors for printed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrinterColor {
    Green,
    Yellow,
    Cyan,
    White,
    BoldGreen,
    BoldYellow,
    BoldMagenta,
    BoldCyan,
    BoldWhite,
}

impl PrinterColor {
    /// ANSI escape code for this color.
    fn ansi_code(&self) -> &'static str {
        match self {
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[37m",
            Self::BoldGreen => "\x1b[1;32m",
            Self::BoldYellow => "\x1b[1;33m",
            Self::BoldMagenta => "\x1b[1;35m",
            Self::BoldCyan => "\x1b[1;36m",
            Self::BoldWhite => "\x1b[1;37m",
        }
    }
}

/// ANSI reset code.
const RESET: &str = "\x1b[0m";

/// Printer for console output with color support.
#[derive(Debug, Clone, Default)]
pub struct Printer;

impl Printer {
    pub fn new() -> Self {
        Self
    }

    /// Print a message with the specified color.
    pub fn print(&self, content: &str, color: PrinterColor) {
        println!("{}{}{}", color.ansi_code(), content, RESET);
    }
}

/// One printed distribution: display label, survey field, and whether the
/// field is a multi-select (exploded before counting).
pub struct SectionField {
    pub label: &'static str,
    pub field: &'static str,
    pub multi: bool,
}

const fn single(label: &'static str, field: &'static str) -> SectionField {
    SectionField {
        label,
        field,
        multi: false,
    }
}

const fn multi(label: &'static str, field: &'static str) -> SectionField {
    SectionField {
        label,
        field,
        multi: true,
    }
}

/// The questionnaire sections printed in order, covering every answer field.
pub const SECTIONS: &[(&str, &[SectionField])] = &[
    (
        "SECTION 1 - Demographics",
        &[
            single("School level", fields::LEVEL),
            single("Gender", fields::GENDER),
            single("Who filled in", fields::WHO),
        ],
    ),
    (
        "SECTION 2 - Flavour DNA",
        &[
            single("Favourite texture", fields::TEXTURE),
            single("Favourite flavour", fields::FLAVOUR),
            single("Favourite snack", fields::SNACK),
            single("Spicy tolerance", fields::SPICY),
            single("Favourite fruit", fields::FRUIT),
            single("Tried new food last month", fields::TRIED_NEW),
            single("Reaction to unfamiliar food", fields::NEW_FOOD_REACTION),
        ],
    ),
    (
        "SECTION 3 - Eating Habits",
        &[
            single("Vegetables yesterday", fields::VEGETABLES),
            single("Sugary drinks yesterday", fields::SUGARY_DRINKS),
            single("Fried food last week", fields::FRIED_FOOD),
            single("Family dinners last week", fields::FAMILY_DINNERS),
            single("Breakfast days last week", fields::BREAKFAST_DAYS),
            single("School food type", fields::SCHOOL_FOOD),
        ],
    ),
    (
        "SECTION 4 - Food Explorer",
        &[
            multi("Cuisines tried", fields::CUISINES),
            multi("Adventurous foods tried", fields::ADVENTUROUS_FOODS),
            single("Open to healthy substitutes", fields::SUBSTITUTE_WILLINGNESS),
            single("Food introduced by", fields::INTRODUCED_BY),
            single("Family food conversations", fields::FOOD_CONVERSATIONS),
        ],
    ),
    (
        "SECTION 5 - Health Awareness",
        &[
            single("Post-meal feeling", fields::POST_MEAL_FEELING),
            single("One thing to improve", fields::ONE_IMPROVEMENT),
            multi("'Healthy eating' means", fields::HEALTHY_MEANING),
        ],
    ),
];

/// Widest histogram bar in characters.
const BAR_WIDTH: usize = 24;

/// Proportional "█" bar for a count against the batch maximum.
pub fn histogram_bar(count: usize, max_count: usize) -> String {
    if max_count == 0 {
        return String::new();
    }
    let filled = (count * BAR_WIDTH).div_ceil(max_count).min(BAR_WIDTH);
    "█".repeat(filled)
}

/// One `label  bar count (pct)` line, label padded to a fixed column.
pub fn count_line(label: &str, count: usize, max_count: usize, total: usize) -> String {
    format!(
        "  {:<28} {} {} ({})",
        label,
        histogram_bar(count, max_count),
        count,
        pct(count, total)
    )
}

fn print_distribution(printer: &Printer, title: &str, counts: &[(String, usize)], total: usize) {
    printer.print(&format!("\n{title}"), PrinterColor::BoldCyan);
    let max_count = counts.iter().map(|(_, c)| *c).max().unwrap_or(0);
    for (label, count) in counts {
        printer.print(&count_line(label, *count, max_count, total), PrinterColor::White);
    }
}

/// Print the full cohort summary to the console.
pub fn print_summary(responses: &[SurveyResponse], summary: &SurveySummary) {
    let printer = Printer::new();
    let total = summary.total_responses;

    printer.print(
        "\n════════════════════════════════════════════",
        PrinterColor::BoldMagenta,
    );
    printer.print("  WE ARE WHAT WE EAT - SURVEY ANALYSIS", PrinterColor::BoldMagenta);
    printer.print(
        "════════════════════════════════════════════",
        PrinterColor::BoldMagenta,
    );

    printer.print(
        &format!("\nTotal responses: {total}"),
        PrinterColor::BoldWhite,
    );
    if let Some(range) = &summary.date_range {
        printer.print(
            &format!("Submitted between {} and {}", range.from, range.to),
            PrinterColor::White,
        );
    }
    printer.print(
        &format!("Emails collected: {}", summary.emails_collected),
        PrinterColor::White,
    );

    for (section, entries) in SECTIONS {
        printer.print(&format!("\n{section}"), PrinterColor::BoldMagenta);
        for entry in entries.iter() {
            let counts = if entry.multi {
                multi_value_counts(responses, entry.field)
            } else {
                value_counts(responses, entry.field)
            };
            print_distribution(&printer, entry.label, &counts, total);
        }
    }

    printer.print("\nFLAVOUR PROFILES", PrinterColor::BoldMagenta);
    let mut avatars: Vec<(String, usize)> = summary
        .avatar_distribution
        .iter()
        .map(|(k, c)| (k.clone(), *c))
        .collect();
    avatars.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    print_distribution(&printer, "Avatar distribution", &avatars, total);

    printer.print("\nMean dimension scores", PrinterColor::BoldCyan);
    for dimension in Dimension::ALL {
        let mean = summary
            .mean_dimensions
            .get(dimension.key())
            .copied()
            .unwrap_or(0.0);
        let filled = ((mean / DIMENSION_MAX as f64) * BAR_WIDTH as f64).round() as usize;
        printer.print(
            &format!(
                "  {:<28} {} {:.2}/10",
                dimension.label(),
                "█".repeat(filled.min(BAR_WIDTH)),
                mean
            ),
            PrinterColor::Green,
        );
    }

    printer.print(
        &format!(
            "\nFood adventure score: mean {:.2}/{}",
            summary.neophobia.mean_score, NEOPHOBIA_MAX
        ),
        PrinterColor::BoldYellow,
    );
    let neo = band_ordered_distribution(summary);
    let max_count = neo.iter().map(|(_, c)| *c).max().unwrap_or(0);
    for (label, count) in &neo {
        printer.print(&count_line(label, *count, max_count, total), PrinterColor::Yellow);
    }

    printer.print(
        &format!(
            "\nOpen to healthy swaps: {}%",
            summary.open_to_substitution_pct
        ),
        PrinterColor::BoldGreen,
    );
    printer.print("", PrinterColor::White);
}

/// Neophobia band counts in ascending band order, least adventurous first.
pub fn band_ordered_distribution(summary: &SurveySummary) -> Vec<(&'static str, usize)> {
    [
        NeophobiaBand::Neophobic,
        NeophobiaBand::Moderate,
        NeophobiaBand::Adventurous,
    ]
    .iter()
    .map(|band| {
        let label = band.range_label();
        let count = summary
            .neophobia
            .distribution
            .get(label)
            .copied()
            .unwrap_or(0);
        (label, count)
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::test_support::response_with;
    use serde_json::json;

    #[test]
    fn test_histogram_bar_scales_to_max() {
        assert_eq!(histogram_bar(4, 4).chars().count(), BAR_WIDTH);
        assert_eq!(histogram_bar(2, 4).chars().count(), BAR_WIDTH / 2);
        assert_eq!(histogram_bar(0, 4), "");
        assert_eq!(histogram_bar(3, 0), "");
    }

    #[test]
    fn test_nonzero_count_always_gets_a_bar() {
        assert!(!histogram_bar(1, 1000).is_empty());
    }

    #[test]
    fn test_count_line_layout() {
        let line = count_line("Sweet", 2, 4, 8);
        assert!(line.starts_with("  Sweet"));
        assert!(line.ends_with("2 (25%)"));
    }

    #[test]
    fn test_sections_cover_every_answer_field() {
        let expected = [
            fields::WHO,
            fields::LEVEL,
            fields::GENDER,
            fields::TEXTURE,
            fields::FLAVOUR,
            fields::SNACK,
            fields::SPICY,
            fields::FRUIT,
            fields::TRIED_NEW,
            fields::NEW_FOOD_REACTION,
            fields::VEGETABLES,
            fields::SUGARY_DRINKS,
            fields::FRIED_FOOD,
            fields::FAMILY_DINNERS,
            fields::BREAKFAST_DAYS,
            fields::SCHOOL_FOOD,
            fields::CUISINES,
            fields::ADVENTUROUS_FOODS,
            fields::SUBSTITUTE_WILLINGNESS,
            fields::INTRODUCED_BY,
            fields::FOOD_CONVERSATIONS,
            fields::POST_MEAL_FEELING,
            fields::HEALTHY_MEANING,
            fields::ONE_IMPROVEMENT,
        ];
        let listed: Vec<&str> = SECTIONS
            .iter()
            .flat_map(|(_, entries)| entries.iter().map(|e| e.field))
            .collect();
        for field in expected {
            assert!(listed.contains(&field), "missing section entry for {field}");
        }
        assert_eq!(listed.len(), expected.len(), "duplicate section entries");
        assert_eq!(SECTIONS.len(), 5);
    }

    #[test]
    fn test_multi_select_fields_are_marked() {
        let multi_fields: Vec<&str> = SECTIONS
            .iter()
            .flat_map(|(_, entries)| entries.iter())
            .filter(|e| e.multi)
            .map(|e| e.field)
            .collect();
        assert_eq!(
            multi_fields,
            vec![
                fields::CUISINES,
                fields::ADVENTUROUS_FOODS,
                fields::HEALTHY_MEANING
            ]
        );
    }

    #[test]
    fn test_band_distribution_is_in_band_order() {
        let responses = vec![
            // Max-adventurous answers: index 8.
            response_with(&[
                (fields::TRIED_NEW, json!("Yes, definitely!")),
                (fields::NEW_FOOD_REACTION, json!("Try it straight away!")),
                (fields::SUBSTITUTE_WILLINGNESS, json!("Definitely yes!")),
            ]),
            // No answers: index 0.
            response_with(&[]),
        ];
        let summary = SurveySummary::build(&responses);
        let ordered = band_ordered_distribution(&summary);
        let labels: Vec<&str> = ordered.iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            vec!["Neophobic (0–2)", "Moderate (3–5)", "Adventurous (6–8)"]
        );
        assert_eq!(ordered[0].1, 1);
        assert_eq!(ordered[1].1, 0);
        assert_eq!(ordered[2].1, 1);
    }
}
