use thiserror::Error;

/// Conditions that prevent a correction request from running at all.
///
/// Per-sentence diagnostics (missing subject, missing verb) are not errors
/// at this level; they are reported in-band in
/// [`crate::types::CorrectionResponse::errors`].
#[derive(Debug, Error)]
pub enum CheckerError {
    /// The dictionaries have not finished loading.
    #[error("dictionaries are not ready")]
    NotReady,
    /// The data layer failed to supply one or more dictionaries.
    #[error("dictionary unavailable: {0}")]
    DictionaryUnavailable(String),
}
