//! Personalised healthy-swap selection.

use serde::Serialize;

use super::dimensions::Dimension;
use super::tables::{GENERIC_SUBSTITUTIONS, SUBSTITUTIONS};

/// Ordered set of 1–3 suggestion strings. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubstitutionSet {
    items: Vec<&'static str>,
}

impl SubstitutionSet {
    /// The suggestions in display order.
    pub fn items(&self) -> &[&'static str] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Select substitution suggestions for a dominant dimension and the
/// respondent's raw texture answer.
///
/// Lookup order: exact (dimension, texture) key, then the first table entry
/// for the dimension regardless of texture, then the generic fallback list.
/// Total: always returns a non-empty set.
pub fn select_substitutions(dominant: Dimension, texture: Option<&str>) -> SubstitutionSet {
    if let Some(texture) = texture {
        if let Some((_, items)) = SUBSTITUTIONS
            .iter()
            .find(|((d, t), _)| *d == dominant && *t == texture)
        {
            return SubstitutionSet {
                items: items.to_vec(),
            };
        }
    }
    if let Some((_, items)) = SUBSTITUTIONS.iter().find(|((d, _), _)| *d == dominant) {
        return SubstitutionSet {
            items: items.to_vec(),
        };
    }
    SubstitutionSet {
        items: GENERIC_SUBSTITUTIONS.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXTURES: [&str; 5] = [
        "Crunchy & Crispy",
        "Chewy",
        "Soft & Creamy",
        "Fluffy & Airy",
        "Juicy & Wet",
    ];

    #[test]
    fn test_exact_match() {
        let set = select_substitutions(Dimension::Umami, Some("Crunchy & Crispy"));
        assert_eq!(set.items()[0], "Baked tempeh chips 🌿");
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_unknown_texture_falls_back_to_dimension() {
        let set = select_substitutions(Dimension::Salty, Some("Molten"));
        // First salty entry in table definition order.
        assert_eq!(set.items()[0], "Roasted edamame with sea salt 🫘");
    }

    #[test]
    fn test_missing_texture_falls_back_to_dimension() {
        let set = select_substitutions(Dimension::Sweet, None);
        assert_eq!(set.items()[0], "Greek yogurt with honey & berries 🍓");
    }

    #[test]
    fn test_total_over_all_dimensions_and_textures() {
        for dimension in Dimension::ALL {
            for texture in TEXTURES {
                let set = select_substitutions(dimension, Some(texture));
                assert!(!set.is_empty());
                assert!(set.len() <= 3);
            }
            let set = select_substitutions(dimension, None);
            assert!(!set.is_empty());
            let set = select_substitutions(dimension, Some("No Such Texture"));
            assert!(!set.is_empty());
        }
    }

    #[test]
    fn test_selection_is_deterministic() {
        let a = select_substitutions(Dimension::Sour, Some("Chewy"));
        let b = select_substitutions(Dimension::Sour, Some("Chewy"));
        assert_eq!(a, b);
    }
}
