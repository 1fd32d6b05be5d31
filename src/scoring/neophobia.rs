//! Food-neophobia index: willingness to try new or unfamiliar food.

use serde::{Deserialize, Serialize};

use crate::survey::SurveyResponse;

use super::tables::NEOPHOBIA_WEIGHTS;

/// Maximum attainable neophobia index.
pub const NEOPHOBIA_MAX: u8 = 8;

/// Category band over the index. Bands are closed, contiguous, and
/// exhaustive over `[0, 8]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NeophobiaBand {
    Neophobic,
    Moderate,
    Adventurous,
}

impl NeophobiaBand {
    /// Band for an index value. Boundaries at 2/3 and 5/6.
    pub fn for_index(index: u8) -> Self {
        match index {
            0..=2 => NeophobiaBand::Neophobic,
            3..=5 => NeophobiaBand::Moderate,
            _ => NeophobiaBand::Adventurous,
        }
    }

    /// Plain band name.
    pub fn name(&self) -> &'static str {
        match self {
            NeophobiaBand::Neophobic => "Neophobic",
            NeophobiaBand::Moderate => "Moderate",
            NeophobiaBand::Adventurous => "Adventurous",
        }
    }

    /// Label drawn beside the report meter.
    pub fn meter_label(&self) -> &'static str {
        match self {
            NeophobiaBand::Neophobic => "Neophobic",
            NeophobiaBand::Moderate => "Moderate",
            NeophobiaBand::Adventurous => "Adventurous!",
        }
    }

    /// Label with the score range, used in aggregate distributions.
    pub fn range_label(&self) -> &'static str {
        match self {
            NeophobiaBand::Neophobic => "Neophobic (0–2)",
            NeophobiaBand::Moderate => "Moderate (3–5)",
            NeophobiaBand::Adventurous => "Adventurous (6–8)",
        }
    }
}

/// Compute the neophobia index for one respondent.
///
/// Sums the static per-field answer weights; missing or unmapped answers
/// contribute 0. The result lies in `[0, NEOPHOBIA_MAX]` by construction.
pub fn neophobia_index(response: &SurveyResponse) -> u8 {
    let mut total: u8 = 0;
    for (field, entries) in NEOPHOBIA_WEIGHTS {
        if let Some(value) = response.answer(field) {
            if let Some((_, weight)) = entries.iter().find(|(v, _)| *v == value) {
                total += weight;
            }
        }
    }
    total
}
