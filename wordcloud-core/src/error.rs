//! Errors surfaced by the word cloud core.
//!
//! Dropping a word that does not fit is normal layout behaviour and never
//! shows up here.

#[derive(Debug, thiserror::Error)]
pub enum CloudError {
    /// The input has words but every count is zero, so there is nothing to
    /// scale font sizes against.
    #[error("all word counts are zero")]
    AllZeroCounts,

    /// The word list JSON handed over by the page could not be parsed.
    #[error("invalid word cloud input: {0}")]
    InvalidInput(#[source] serde_json::Error),

    /// The layout config JSON could not be parsed.
    #[error("invalid word cloud config: {0}")]
    InvalidConfig(#[source] serde_json::Error),
}
