//! Dimension scorer: raw answers to clamped dimension scores.

use crate::survey::{fields, SurveyResponse};

use super::dimensions::{Dimension, DimensionScores};
use super::tables::{
    ADVENTUROUS_FOODS_SENTINEL, DIMENSION_WEIGHTS, MULTI_SELECT_BONUS_CAP,
};

/// Score one respondent across the six flavour dimensions.
///
/// Pure and deterministic: contributions come only from the static weighting
/// tables and the two multi-select bonuses. Missing or unmapped answers
/// contribute nothing. Every total is clamped to `[0, 10]`.
pub fn score_dimensions(response: &SurveyResponse) -> DimensionScores {
    let mut raw = [0u32; 6];

    for weights in DIMENSION_WEIGHTS {
        let Some(value) = response.answer(weights.field) else {
            continue;
        };
        let Some((_, contributions)) = weights.entries.iter().find(|(v, _)| *v == value) else {
            continue;
        };
        for (dimension, points) in contributions.iter() {
            raw[index_of(*dimension)] += u32::from(*points);
        }
    }

    // Cuisine diversity bonus, capped.
    let cuisines = response.answer_list(fields::CUISINES).len();
    raw[index_of(Dimension::Adventurous)] += cuisines.min(MULTI_SELECT_BONUS_CAP) as u32;

    // Adventurous-foods bonus, sentinel excluded, capped.
    let adventurous_foods = response
        .answer_list(fields::ADVENTUROUS_FOODS)
        .iter()
        .filter(|f| **f != ADVENTUROUS_FOODS_SENTINEL)
        .count();
    raw[index_of(Dimension::Adventurous)] += adventurous_foods.min(MULTI_SELECT_BONUS_CAP) as u32;

    DimensionScores::from_raw(raw)
}

fn index_of(dimension: Dimension) -> usize {
    Dimension::ALL
        .iter()
        .position(|d| *d == dimension)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::test_support::response_with;
    use serde_json::json;

    #[test]
    fn test_empty_response_scores_zero() {
        let resp = response_with(&[]);
        let scores = score_dimensions(&resp);
        assert_eq!(scores, DimensionScores::default());
    }

    #[test]
    fn test_unmapped_value_contributes_nothing() {
        let resp = response_with(&[(fields::FLAVOUR, json!("Extremely Spicy"))]);
        let scores = score_dimensions(&resp);
        assert_eq!(scores, DimensionScores::default());
    }

    #[test]
    fn test_single_flavour_answer() {
        let resp = response_with(&[(fields::FLAVOUR, json!("Sweet"))]);
        let scores = score_dimensions(&resp);
        assert_eq!(scores.sweet, 4);
        assert_eq!(scores.salty, 0);
    }

    #[test]
    fn test_snack_contributes_multiple_dimensions() {
        let resp = response_with(&[(fields::SNACK, json!("Seaweed Snack"))]);
        let scores = score_dimensions(&resp);
        assert_eq!(scores.salty, 1);
        assert_eq!(scores.crunchy, 2);
        assert_eq!(scores.adventurous, 2);
    }

    #[test]
    fn test_cuisine_bonus_capped_at_four() {
        let resp = response_with(&[(
            fields::CUISINES,
            json!(["Japanese", "Thai", "Indian", "Mexican", "Korean", "Ethiopian"]),
        )]);
        let scores = score_dimensions(&resp);
        assert_eq!(scores.adventurous, 4);
    }

    #[test]
    fn test_sentinel_only_adventurous_foods_count_zero() {
        let resp = response_with(&[(fields::ADVENTUROUS_FOODS, json!(["None of these yet!"]))]);
        let scores = score_dimensions(&resp);
        assert_eq!(scores.adventurous, 0);
    }

    #[test]
    fn test_sentinel_excluded_from_mixed_list() {
        let resp = response_with(&[(
            fields::ADVENTUROUS_FOODS,
            json!(["Sushi", "None of these yet!", "Kimchi"]),
        )]);
        let scores = score_dimensions(&resp);
        assert_eq!(scores.adventurous, 2);
    }

    #[test]
    fn test_adventurous_total_clamped_at_ten() {
        let resp = response_with(&[
            (fields::TRIED_NEW, json!("Yes, definitely!")),
            (fields::NEW_FOOD_REACTION, json!("Try it straight away!")),
            (fields::SUBSTITUTE_WILLINGNESS, json!("Definitely yes!")),
            (fields::CUISINES, json!(["a", "b", "c", "d", "e"])),
            (fields::ADVENTUROUS_FOODS, json!(["x", "y", "z", "w"])),
        ]);
        // 3 + 3 + 2 + 4 + 4 = 16 raw, clamped to 10.
        let scores = score_dimensions(&resp);
        assert_eq!(scores.adventurous, 10);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let resp = crate::survey::test_support::sample_response();
        let first = score_dimensions(&resp);
        for _ in 0..10 {
            assert_eq!(score_dimensions(&resp), first);
        }
    }
}
