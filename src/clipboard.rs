//! System clipboard access for copying results.

use crate::error::{AppError, AppResult};
use arboard::Clipboard;

/// Copy text to the system clipboard.
///
pub fn copy_to_clipboard(text: &str) -> AppResult<()> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| AppError::Clipboard(format!("Failed to access clipboard: {}", e)))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| AppError::Clipboard(format!("Failed to copy to clipboard: {}", e)))
}
