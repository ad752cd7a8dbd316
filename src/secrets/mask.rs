//! Masked previews of secret values.
//!
//! A credential is shown by its first few characters so a user can tell
//! which key is loaded without the whole value reaching the terminal.
//!
//! # Example
//!
//! ```
//! use ragsetup::secrets::masked_preview;
//!
//! assert_eq!(masked_preview("AIzaSyD-0123456789ab"), "AIzaSyD-...");
//! assert_eq!(masked_preview("short"), "short");
//! ```

/// Number of leading characters kept in a preview.
pub const PREVIEW_CHARS: usize = 8;

/// Suffix appended when a value is truncated.
pub const ELLIPSIS: &str = "...";

/// Preview a secret value.
///
/// Values longer than [`PREVIEW_CHARS`] characters keep their first
/// [`PREVIEW_CHARS`] characters followed by `...`; shorter values are
/// returned unchanged. Counts characters, not bytes.
pub fn masked_preview(value: &str) -> String {
    match value.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{}", &value[..cut], ELLIPSIS),
        None => value.to_string(),
    }
}
