use async_trait::async_trait;

use crate::error::ClipboardError;

/// Access to the system clipboard.
///
/// Browsers only expose the async clipboard API in secure contexts; anywhere
/// else the text has to be selected in a hidden field and copied manually.
#[async_trait(?Send)]
pub trait ClipboardBackend {
    fn secure_available(&self) -> bool;

    /// # Errors
    ///
    /// Returns `ClipboardError::Rejected` if the write is refused.
    async fn write_secure(&self, text: &str) -> Result<(), ClipboardError>;

    /// # Errors
    ///
    /// Returns `ClipboardError::FallbackFailed` if the manual copy did not take.
    async fn write_fallback(&self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    Secure,
    Fallback,
}

/// Copy `text`, preferring the secure API when the backend has it.
///
/// # Errors
///
/// Returns whatever error the chosen path produced; there is no second attempt.
pub async fn copy_to_clipboard(
    backend: &dyn ClipboardBackend,
    text: &str,
) -> Result<CopyMethod, ClipboardError> {
    if backend.secure_available() {
        backend.write_secure(text).await?;
        return Ok(CopyMethod::Secure);
    }
    tracing::debug!("secure clipboard unavailable; using manual copy");
    backend.write_fallback(text).await?;
    Ok(CopyMethod::Fallback)
}
