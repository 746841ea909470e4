//! Image upload gate.
//!
//! The upload itself is the host's job (it owns the network). The gate keeps
//! the rules: only image files are sent, only one upload is pending at a time,
//! and the pending flag is cleared whatever the outcome.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use std::path::Path;

use crate::analysis::AnalysisResponse;
use crate::error::{ComposeError, UploadFailure};

/// Whether `mime` names an image type.
#[must_use]
pub fn is_image_mime(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("image/")
}

/// MIME type for a file path, from its extension.
#[must_use]
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "heic" => "image/heic",
        "txt" => "text/plain",
        "json" => "application/json",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadGate {
    pending: Option<String>,
    last_error: Option<ComposeError>,
}

impl UploadGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the gate for `file_name`.
    ///
    /// # Errors
    ///
    /// [`ComposeError::InvalidFileType`] for non-image types (also recorded as
    /// the last error) and [`ComposeError::UploadInProgress`] while another
    /// upload is pending.
    pub fn begin(&mut self, file_name: &str, mime: &str) -> Result<(), ComposeError> {
        if self.pending.is_some() {
            return Err(ComposeError::UploadInProgress);
        }
        if !is_image_mime(mime) {
            let err = ComposeError::InvalidFileType { mime: mime.to_owned() };
            self.last_error = Some(err.clone());
            return Err(err);
        }
        self.last_error = None;
        self.pending = Some(file_name.to_owned());
        Ok(())
    }

    /// Release the gate with the upload's outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::UploadFailed`] carrying the failure, which is
    /// also kept as the last error.
    pub fn finish(&mut self, outcome: Result<AnalysisResponse, UploadFailure>) -> Result<AnalysisResponse, ComposeError> {
        self.pending = None;
        match outcome {
            Ok(response) => {
                self.last_error = None;
                Ok(response)
            }
            Err(failure) => {
                let err = ComposeError::UploadFailed(failure);
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Name of the file being analyzed.
    #[must_use]
    pub fn pending_file(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&ComposeError> {
        self.last_error.as_ref()
    }
}
