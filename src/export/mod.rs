//! Analyst export files: raw responses CSV, per-respondent profile CSV,
//! the aggregate summary as JSON, and an optional email list.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::analysis::SurveySummary;
use crate::errors::ExportError;
use crate::scoring::FlavourProfile;
use crate::survey::{fields, SurveyResponse};

/// Question columns exported to `responses.csv`, in questionnaire order.
const ANSWER_COLUMNS: [&str; 24] = [
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

/// Quote a CSV field per RFC 4180 when it contains a comma, quote, or
/// newline.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn csv_row(fields: &[String]) -> String {
    let mut row = fields
        .iter()
        .map(|f| csv_field(f))
        .collect::<Vec<_>>()
        .join(",");
    row.push('\n');
    row
}

/// Flatten one answer cell: strings pass through, lists join with "; ",
/// anything else (or absence) becomes an empty cell.
fn answer_cell(response: &SurveyResponse, field: &str) -> String {
    match response.answers.get(field) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Array(_)) => response.answer_list(field).join("; "),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Build the raw `responses.csv` content.
pub fn build_responses_csv(responses: &[SurveyResponse]) -> String {
    let mut header: Vec<String> = vec!["id".to_string(), "submitted_at".to_string()];
    header.extend(ANSWER_COLUMNS.iter().map(|c| c.to_string()));

    let mut out = csv_row(&header);
    for response in responses {
        let mut row: Vec<String> = vec![
            response.id.to_string(),
            response
                .submitted_at
                .map(|t| t.to_rfc3339())
                .unwrap_or_default(),
        ];
        row.extend(ANSWER_COLUMNS.iter().map(|c| answer_cell(response, c)));
        out.push_str(&csv_row(&row));
    }
    out
}

/// Build the scored `flavour_profiles.csv` content, one row per respondent.
pub fn build_profiles_csv(responses: &[SurveyResponse]) -> String {
    let header = [
        "id",
        "level",
        "submitted_at",
        "sweet",
        "salty",
        "sour",
        "umami",
        "crunchy",
        "adventurous",
        "dominant",
        "avatar",
        "neophobia_score",
        "neophobia_band",
    ]
    .map(String::from);

    let mut out = csv_row(&header);
    for response in responses {
        let profile = FlavourProfile::from_response(response);
        let row: Vec<String> = vec![
            response.id.to_string(),
            response.level().unwrap_or_default().to_string(),
            response
                .submitted_at
                .map(|t| t.to_rfc3339())
                .unwrap_or_default(),
            profile.scores.sweet.to_string(),
            profile.scores.salty.to_string(),
            profile.scores.sour.to_string(),
            profile.scores.umami.to_string(),
            profile.scores.crunchy.to_string(),
            profile.scores.adventurous.to_string(),
            profile.dominant.key().to_string(),
            profile.avatar.plain_name.to_string(),
            profile.neophobia_index.to_string(),
            profile.neophobia_band.name().to_string(),
        ];
        out.push_str(&csv_row(&row));
    }
    out
}

/// Collected respondent emails, one per line, deduplicated and sorted.
pub fn build_email_list(responses: &[SurveyResponse]) -> String {
    let mut emails: Vec<&str> = responses.iter().filter_map(|r| r.email()).collect();
    emails.sort_unstable();
    emails.dedup();
    let mut out = emails.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

/// Write `responses.csv`, `flavour_profiles.csv`, and `summary.json` under
/// `dir`, returning the written paths.
pub fn write_exports(
    responses: &[SurveyResponse],
    summary: &SurveySummary,
    dir: &Path,
) -> Result<Vec<PathBuf>, ExportError> {
    std::fs::create_dir_all(dir)?;

    let targets = [
        ("responses.csv", build_responses_csv(responses)),
        ("flavour_profiles.csv", build_profiles_csv(responses)),
        ("summary.json", serde_json::to_string_pretty(summary)?),
    ];

    let mut paths = Vec::with_capacity(targets.len());
    for (name, content) in targets {
        let path = dir.join(name);
        std::fs::write(&path, content)?;
        tracing::info!("wrote {}", path.display());
        paths.push(path);
    }
    Ok(paths)
}

/// Write the deduplicated email list to `dir/emails.txt`.
pub fn write_email_list(
    responses: &[SurveyResponse],
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join("emails.txt");
    std::fs::write(&path, build_email_list(responses))?;
    tracing::info!("wrote {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::test_support::{response_with, sample_response};
    use serde_json::json;

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_responses_csv_joins_lists() {
        let responses = vec![sample_response()];
        let csv = build_responses_csv(&responses);
        let mut lines = csv.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("id,submitted_at,q1_who"));
        let row = lines.next().unwrap();
        assert!(row.contains("Japanese; Thai; Indian"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_profiles_csv_has_scores_and_band() {
        let csv = build_profiles_csv(&[sample_response()]);
        let row = csv.lines().nth(1).unwrap();
        let cells: Vec<&str> = row.split(',').collect();
        assert_eq!(cells[1], "P4");
        // sweet..adventurous occupy columns 3..9
        assert_eq!(cells[3..9].len(), 6);
        assert_eq!(cells[9], "adventurous");
        assert!(!cells[11].is_empty());
    }

    #[test]
    fn test_email_list_dedupes_and_sorts() {
        let mut a = response_with(&[(fields::LEVEL, json!("P3"))]);
        a.email = Some("zoe@example.com".to_string());
        let mut b = response_with(&[]);
        b.email = Some("amy@example.com".to_string());
        let mut c = response_with(&[]);
        c.email = Some("zoe@example.com".to_string());
        let list = build_email_list(&[a, b, c]);
        assert_eq!(list, "amy@example.com\nzoe@example.com\n");
    }

    #[test]
    fn test_write_exports_creates_three_files() {
        let dir = tempfile::tempdir().unwrap();
        let responses = vec![sample_response()];
        let summary = SurveySummary::build(&responses);
        let paths = write_exports(&responses, &summary, dir.path()).unwrap();
        assert_eq!(paths.len(), 3);
        for path in paths {
            assert!(path.exists());
        }
    }
}
