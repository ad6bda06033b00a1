//! Error types surfaced by feature slicing.

/// Errors that abort a slicing call.
///
/// Slicing has a single failure mode: the input feature cannot be turned
/// into scenarios. There are no partial results; callers receive either the
/// full record list or one of these.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The Gherkin parser rejected the feature text. This also covers text
    /// that contains no feature declaration at all.
    #[error("failed to parse feature: {0}")]
    InvalidFeature(#[from] gherkin::ParseError),
    /// A scenario outline declares no examples table, so it cannot be
    /// expanded into concrete scenarios.
    #[error("scenario outline '{scenario}' has no examples table")]
    OutlineWithoutExamples {
        /// Name of the offending scenario outline.
        scenario: String,
    },
}
