//! Combined flavour profile for one respondent.

use serde::Serialize;

use crate::survey::SurveyResponse;

use super::avatar::{avatar_for, resolve_dominant};
use super::dimensions::{Dimension, DimensionScores};
use super::neophobia::{neophobia_index, NeophobiaBand};
use super::scorer::score_dimensions;
use super::tables::AvatarIdentity;

/// Derived, read-only scoring result for one response.
#[derive(Debug, Clone, Serialize)]
pub struct FlavourProfile {
    /// The six clamped dimension scores.
    pub scores: DimensionScores,
    /// Dominant dimension, always defined (canonical-order tie-break).
    pub dominant: Dimension,
    /// Avatar identity for the dominant dimension.
    pub avatar: &'static AvatarIdentity,
    /// Food-neophobia index in `[0, 8]`.
    pub neophobia_index: u8,
    /// Category band derived from the index.
    pub neophobia_band: NeophobiaBand,
}

impl FlavourProfile {
    /// Score a response. Pure: identical inputs yield identical profiles.
    pub fn from_response(response: &SurveyResponse) -> Self {
        let scores = score_dimensions(response);
        let dominant = resolve_dominant(&scores);
        let index = neophobia_index(response);
        Self {
            scores,
            dominant,
            avatar: avatar_for(dominant),
            neophobia_index: index,
            neophobia_band: NeophobiaBand::for_index(index),
        }
    }
}
