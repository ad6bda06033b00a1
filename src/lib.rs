//! Slice Gherkin feature files into self-contained single-scenario records.
//!
//! A feature file bundles scenarios that share a name, tags, and background
//! steps, and scenario outlines that are really templates for many
//! scenarios. [`slice_feature`] flattens all of that: it parses the feature
//! text and returns one [`SingleScenario`] per concrete scenario, each
//! carrying the feature name, the inherited feature tags, the background
//! steps in force at its declaration, its own tags, and a step list with
//! every `<placeholder>` resolved from the outline's examples table.
//!
//! [`SliceOptions`] narrows the output: a 1-based declaration line selects a
//! single scenario or outline, and include/exclude tag lists filter by tag
//! (case-insensitive; an exclude match always wins).
//!
//! Slicing is synchronous and touches no I/O; reading feature files and
//! writing the resulting scenarios back out belong to the caller.
//!
//! # Examples
//!
//! ```
//! use feature_slicer::{slice_feature, SliceOptions};
//!
//! let feature = "\
//! @shop
//! Feature: Checkout
//!
//!   Background:
//!     Given a signed-in customer
//!
//!   @smoke
//!   Scenario: Empty basket
//!     Then the total is 0
//! ";
//!
//! let scenarios = slice_feature(feature, &SliceOptions::default())?;
//! let Some(scenario) = scenarios.first() else {
//!     panic!("expected one scenario");
//! };
//! assert_eq!(scenario.feature_name, "Checkout");
//! assert_eq!(scenario.feature_tags, vec!["@shop".to_string()]);
//! assert_eq!(scenario.tags, vec!["@smoke".to_string()]);
//! assert_eq!(scenario.background_steps.len(), 1);
//! # Ok::<(), feature_slicer::ParseError>(())
//! ```

mod document;
mod errors;
mod parsing;
mod slicing;
mod types;

pub use errors::ParseError;
pub use slicing::{slice_feature, SliceOptions};
pub use types::{SingleScenario, Step};
