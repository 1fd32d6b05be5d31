//! The six flavour dimensions and their clamped score vector.

use serde::{Deserialize, Serialize};

/// Maximum value a dimension score can reach after clamping.
pub const DIMENSION_MAX: u8 = 10;

/// One of the six flavour-preference axes.
///
/// The declaration order is canonical and load-bearing: dominant-trait
/// resolution scans dimensions in this order and picks the first maximum,
/// so reordering the variants changes which dimension wins ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Sweet,
    Salty,
    Sour,
    Umami,
    Crunchy,
    Adventurous,
}

impl Dimension {
    /// All dimensions in canonical tie-break order.
    pub const ALL: [Dimension; 6] = [
        Dimension::Sweet,
        Dimension::Salty,
        Dimension::Sour,
        Dimension::Umami,
        Dimension::Crunchy,
        Dimension::Adventurous,
    ];

    /// Lowercase key used in exports and table lookups.
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Sweet => "sweet",
            Dimension::Salty => "salty",
            Dimension::Sour => "sour",
            Dimension::Umami => "umami",
            Dimension::Crunchy => "crunchy",
            Dimension::Adventurous => "adventurous",
        }
    }

    /// Capitalized display label used on charts.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Sweet => "Sweet",
            Dimension::Salty => "Salty",
            Dimension::Sour => "Sour",
            Dimension::Umami => "Umami",
            Dimension::Crunchy => "Crunchy",
            Dimension::Adventurous => "Adventurous",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// The six clamped dimension scores for one respondent.
///
/// Every score lies in `[0, DIMENSION_MAX]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub sweet: u8,
    pub salty: u8,
    pub sour: u8,
    pub umami: u8,
    pub crunchy: u8,
    pub adventurous: u8,
}

impl DimensionScores {
    /// Score for a single dimension.
    pub fn get(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Sweet => self.sweet,
            Dimension::Salty => self.salty,
            Dimension::Sour => self.sour,
            Dimension::Umami => self.umami,
            Dimension::Crunchy => self.crunchy,
            Dimension::Adventurous => self.adventurous,
        }
    }

    /// Scores paired with their dimension, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, u8)> + '_ {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    /// Build from raw (unclamped) totals, clamping each to
    /// `[0, DIMENSION_MAX]`.
    pub fn from_raw(raw: [u32; 6]) -> Self {
        let clamp = |v: u32| v.min(DIMENSION_MAX as u32) as u8;
        Self {
            sweet: clamp(raw[0]),
            salty: clamp(raw[1]),
            sour: clamp(raw[2]),
            umami: clamp(raw[3]),
            crunchy: clamp(raw[4]),
            adventurous: clamp(raw[5]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let keys: Vec<&str> = Dimension::ALL.iter().map(|d| d.key()).collect();
        assert_eq!(
            keys,
            vec!["sweet", "salty", "sour", "umami", "crunchy", "adventurous"]
        );
    }

    #[test]
    fn test_from_raw_clamps_to_ten() {
        let scores = DimensionScores::from_raw([0, 3, 10, 11, 25, 7]);
        assert_eq!(scores.sweet, 0);
        assert_eq!(scores.salty, 3);
        assert_eq!(scores.sour, 10);
        assert_eq!(scores.umami, 10);
        assert_eq!(scores.crunchy, 10);
        assert_eq!(scores.adventurous, 7);
        for (_, v) in scores.iter() {
            assert!(v <= DIMENSION_MAX);
        }
    }

    #[test]
    fn test_serde_lowercase_keys() {
        let json = serde_json::to_string(&Dimension::Adventurous).unwrap();
        assert_eq!(json, "\"adventurous\"");
    }
}
