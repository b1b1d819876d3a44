//! Domain models for epicgen.
//!
//! - [`FeatureResult`]: an epic with its ordered [`Story`] list, as returned by
//!   the generation backend. Immutable once parsed.
//! - [`AcceptanceCriterion`]: a done-condition on a story, with optional test criteria.
//! - [`Idea`]: a suggested starting point from the idea endpoint.
//! - [`FeatureRequest`]: what gets sent to the generation endpoint.

mod feature;
mod idea;

pub use feature::*;
pub use idea::*;
