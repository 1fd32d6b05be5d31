//! Dominant-trait resolution and avatar identity lookup.

use super::dimensions::{Dimension, DimensionScores};
use super::tables::{AvatarIdentity, AVATAR_IDENTITIES, GENERIC_AVATAR};

/// Select the dominant dimension: the first dimension in canonical order
/// achieving the maximum score.
///
/// The tie-break is deliberate and fixed: an all-zero vector resolves to
/// sweet because sweet is first in canonical order.
pub fn resolve_dominant(scores: &DimensionScores) -> Dimension {
    let mut dominant = Dimension::Sweet;
    let mut best = scores.get(Dimension::Sweet);
    for dimension in Dimension::ALL {
        let score = scores.get(dimension);
        if score > best {
            best = score;
            dominant = dimension;
        }
    }
    dominant
}

/// Avatar identity for a dominant dimension, with a generic fallback.
pub fn avatar_for(dimension: Dimension) -> &'static AvatarIdentity {
    AVATAR_IDENTITIES
        .iter()
        .find(|(d, _)| *d == dimension)
        .map(|(_, identity)| identity)
        .unwrap_or(&GENERIC_AVATAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_zero_resolves_to_sweet() {
        let scores = DimensionScores::default();
        assert_eq!(resolve_dominant(&scores), Dimension::Sweet);
    }

    #[test]
    fn test_first_maximum_wins_ties() {
        let scores = DimensionScores {
            sweet: 0,
            salty: 5,
            sour: 5,
            umami: 5,
            crunchy: 0,
            adventurous: 0,
        };
        assert_eq!(resolve_dominant(&scores), Dimension::Salty);
    }

    #[test]
    fn test_strict_maximum_wins() {
        let scores = DimensionScores {
            sweet: 2,
            salty: 1,
            sour: 0,
            umami: 9,
            crunchy: 3,
            adventurous: 8,
        };
        assert_eq!(resolve_dominant(&scores), Dimension::Umami);
    }

    #[test]
    fn test_avatar_lookup() {
        let avatar = avatar_for(Dimension::Crunchy);
        assert_eq!(avatar.plain_name, "Crunch Hero");
        assert_eq!(avatar.badge, "CRUNCH");
    }
}
