//! Errors the composition core reports to the user.
//!
//! All of them are local and non-fatal. None touches the sentence, and none is
//! retried automatically. Their `Display` text is what the user sees.

/// Why an image upload did not produce an analysis.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadFailure {
    /// The service answered with a non-2xx status.
    #[error("Server error ({status}): {detail}")]
    Status { status: u16, detail: String },
    /// The service could not be reached at all.
    #[error("Cannot connect to backend. Make sure the server is running on {base_url}")]
    Unreachable { base_url: String },
    /// The service answered 2xx with a body that is not an analysis.
    #[error("Failed to analyze image: {0}")]
    InvalidResponse(String),
}

/// User-facing errors from the composition core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComposeError {
    /// The selected file is not an image; no upload was attempted.
    #[error("Please select an image file (jpg, png, etc.)")]
    InvalidFileType { mime: String },
    /// An upload is already pending.
    #[error("An image is already being analyzed")]
    UploadInProgress,
    /// The upload or analysis failed.
    #[error(transparent)]
    UploadFailed(#[from] UploadFailure),
    /// No speech capability in this environment.
    #[error("Text-to-speech is not supported in this environment")]
    SpeechUnavailable,
}
