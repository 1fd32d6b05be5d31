//! Flavour-profile scoring: dimension scorer, dominant-trait resolver,
//! neophobia index, and substitution selector.
//!
//! Every function in this module is pure and deterministic; all behaviour
//! comes from the static tables in [`tables`].

pub mod avatar;
pub mod dimensions;
pub mod neophobia;
pub mod profile;
pub mod scorer;
pub mod substitutions;
pub mod tables;

pub use avatar::{avatar_for, resolve_dominant};
pub use dimensions::{Dimension, DimensionScores, DIMENSION_MAX};
pub use neophobia::{neophobia_index, NeophobiaBand, NEOPHOBIA_MAX};
pub use profile::FlavourProfile;
pub use scorer::score_dimensions;
pub use substitutions::{select_substitutions, SubstitutionSet};
pub use tables::AvatarIdentity;

/// Fun fact for a dominant dimension, with a generic fallback.
pub fn fun_fact_for(dimension: Dimension) -> &'static str {
    tables::FUN_FACTS
        .iter()
        .find(|(d, _)| *d == dimension)
        .map(|(_, fact)| *fact)
        .unwrap_or(tables::GENERIC_FUN_FACT)
}
