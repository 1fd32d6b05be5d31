//! Aggregate cohort statistics over a batch of survey responses.

pub mod console;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::scoring::{Dimension, FlavourProfile};
use crate::survey::{fields, SurveyResponse};

/// Count distinct values of a single-choice field, most frequent first.
/// Ties break alphabetically for deterministic output.
pub fn value_counts(responses: &[SurveyResponse], field: &str) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for response in responses {
        if let Some(value) = response.answer(field) {
            *counts.entry(value).or_default() += 1;
        }
    }
    sorted_counts(counts)
}

/// Count distinct entries across a multi-select field.
pub fn multi_value_counts(responses: &[SurveyResponse], field: &str) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for response in responses {
        for value in response.answer_list(field) {
            *counts.entry(value).or_default() += 1;
        }
    }
    sorted_counts(counts)
}

fn sorted_counts(counts: BTreeMap<&str, usize>) -> Vec<(String, usize)> {
    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

/// Percentage label, or "-" when the total is zero.
pub fn pct(n: usize, total: usize) -> String {
    if total == 0 {
        "-".to_string()
    } else {
        format!("{}%", (100.0 * n as f64 / total as f64).round() as i64)
    }
}

/// Submission date range of the batch.
#[derive(Debug, Clone, Serialize)]
pub struct DateRange {
    pub from: String,
    pub to: String,
}

/// Neophobia aggregate.
#[derive(Debug, Clone, Serialize)]
pub struct NeophobiaSummary {
    pub mean_score: f64,
    pub distribution: BTreeMap<String, usize>,
}

/// Serializable aggregate statistics over the whole cohort.
#[derive(Debug, Clone, Serialize)]
pub struct SurveySummary {
    pub generated_at: DateTime<Utc>,
    pub total_responses: usize,
    pub date_range: Option<DateRange>,
    pub by_level: BTreeMap<String, usize>,
    pub by_gender: BTreeMap<String, usize>,
    pub top_flavour: BTreeMap<String, usize>,
    pub top_texture: BTreeMap<String, usize>,
    pub top_snack: BTreeMap<String, usize>,
    pub avatar_distribution: BTreeMap<String, usize>,
    pub mean_dimensions: BTreeMap<String, f64>,
    pub neophobia: NeophobiaSummary,
    pub emails_collected: usize,
    pub open_to_substitution_pct: i64,
}

impl SurveySummary {
    /// Aggregate a batch. Profiles are computed fresh per respondent.
    pub fn build(responses: &[SurveyResponse]) -> Self {
        let total = responses.len();
        let profiles: Vec<FlavourProfile> =
            responses.iter().map(FlavourProfile::from_response).collect();

        let mut dimension_totals: BTreeMap<&str, u64> = BTreeMap::new();
        let mut avatar_distribution: BTreeMap<String, usize> = BTreeMap::new();
        let mut neophobia_distribution: BTreeMap<String, usize> = BTreeMap::new();
        let mut neophobia_total: u64 = 0;
        for profile in &profiles {
            for (dimension, score) in profile.scores.iter() {
                *dimension_totals.entry(dimension.key()).or_default() += u64::from(score);
            }
            *avatar_distribution
                .entry(profile.avatar.name.to_string())
                .or_default() += 1;
            *neophobia_distribution
                .entry(profile.neophobia_band.range_label().to_string())
                .or_default() += 1;
            neophobia_total += u64::from(profile.neophobia_index);
        }

        let mean_dimensions = Dimension::ALL
            .iter()
            .map(|d| {
                let sum = dimension_totals.get(d.key()).copied().unwrap_or(0);
                (d.key().to_string(), round2(sum as f64 / total.max(1) as f64))
            })
            .collect();

        let mut submitted: Vec<DateTime<Utc>> =
            responses.iter().filter_map(|r| r.submitted_at).collect();
        submitted.sort();
        let date_range = match (submitted.first(), submitted.last()) {
            (Some(first), Some(last)) => Some(DateRange {
                from: first.date_naive().to_string(),
                to: last.date_naive().to_string(),
            }),
            _ => None,
        };

        let open_count = responses
            .iter()
            .filter_map(|r| r.answer(fields::SUBSTITUTE_WILLINGNESS))
            .filter(|a| ["Definitely yes!", "Maybe, if it tastes similar"].contains(a))
            .count();
        // Truncating division, so 2/3 reads as 66%.
        let open_to_substitution_pct = if total == 0 {
            0
        } else {
            (open_count * 100 / total) as i64
        };

        Self {
            generated_at: Utc::now(),
            total_responses: total,
            date_range,
            by_level: counts_map(responses, fields::LEVEL),
            by_gender: counts_map(responses, fields::GENDER),
            top_flavour: top_map(responses, fields::FLAVOUR, 3),
            top_texture: top_map(responses, fields::TEXTURE, 3),
            top_snack: top_map(responses, fields::SNACK, 3),
            avatar_distribution,
            mean_dimensions,
            neophobia: NeophobiaSummary {
                mean_score: round2(neophobia_total as f64 / total.max(1) as f64),
                distribution: neophobia_distribution,
            },
            emails_collected: responses.iter().filter(|r| r.email().is_some()).count(),
            open_to_substitution_pct,
        }
    }
}

fn counts_map(responses: &[SurveyResponse], field: &str) -> BTreeMap<String, usize> {
    value_counts(responses, field).into_iter().collect()
}

fn top_map(responses: &[SurveyResponse], field: &str, n: usize) -> BTreeMap<String, usize> {
    value_counts(responses, field).into_iter().take(n).collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
