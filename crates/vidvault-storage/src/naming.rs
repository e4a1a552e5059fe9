//! Stored-name rules shared by every backend.
//!
//! A derived name is the final component of the client filename with each whitespace
//! character replaced by `-`, lower-cased. Whitespace here is Unicode `White_Space`
//! without NEL (U+0085), plus the byte order mark (U+FEFF).

use crate::traits::{StorageError, StorageResult};

fn is_name_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Derive the on-disk name for an uploaded file.
///
/// Only the last path component of `original` is kept, so `"clips/My Video.MP4"` and
/// `"My Video.MP4"` both become `"my-video.mp4"`.
pub fn derive_stored_name(original: &str) -> StorageResult<String> {
    let file_name = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original);

    let derived: String = file_name
        .chars()
        .map(|c| if is_name_whitespace(c) { '-' } else { c })
        .collect::<String>()
        .to_lowercase();

    validate_name(&derived)?;
    Ok(derived)
}

/// Check that `name` addresses a file directly under the storage root.
pub fn validate_name(name: &str) -> StorageResult<()> {
    if name.is_empty() {
        return Err(StorageError::InvalidName("name is empty".to_string()));
    }
    if name == "." || name == ".." {
        return Err(StorageError::InvalidName(format!(
            "'{}' is not a file name",
            name
        )));
    }
    if name.contains(['/', '\\', '\0']) {
        return Err(StorageError::InvalidName(
            "name must not contain path separators".to_string(),
        ));
    }
    Ok(())
}
