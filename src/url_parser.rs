//! URL parser for extracting Google Drive folder IDs from user input.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{DriveError, Result};

/// Folder ID patterns, tried in order. The first capture of the first match wins.
static FOLDER_ID_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new(r"/folders/([a-zA-Z0-9_-]+)").expect("Invalid folders regex"),
        Regex::new(r"/drive/folders/([a-zA-Z0-9_-]+)").expect("Invalid drive folders regex"),
        Regex::new(r"id=([a-zA-Z0-9_-]+)").expect("Invalid id query regex"),
        Regex::new(r"^([a-zA-Z0-9_-]{25,})$").expect("Invalid bare ID regex"),
    ]
});

/// Extract a Google Drive folder ID from a URL or a bare ID.
///
/// Recognized forms:
/// - `https://drive.google.com/drive/folders/<ID>`
/// - `https://drive.google.com/drive/u/0/folders/<ID>?usp=sharing`
/// - `https://drive.google.com/open?id=<ID>`
/// - a bare ID of at least 25 characters
///
/// # Examples
///
/// ```
/// use drive_audio::url_parser::extract_folder_id;
///
/// let id = extract_folder_id("https://drive.google.com/drive/folders/1abc123").unwrap();
/// assert_eq!(id, "1abc123");
///
/// let id = extract_folder_id("1AbCdEfGhIjKlMnOpQrStUvWxYz").unwrap();
/// assert_eq!(id, "1AbCdEfGhIjKlMnOpQrStUvWxYz");
/// ```
pub fn extract_folder_id(url_or_id: &str) -> Result<String> {
    let trimmed = url_or_id.trim();

    FOLDER_ID_PATTERNS
        .iter()
        .find_map(|re| re.captures(trimmed))
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().to_string())
        .ok_or_else(|| DriveError::FolderIdNotFound(url_or_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_folder_url() {
        let url = "https://drive.google.com/drive/folders/1abc123XYZ";
        assert_eq!(extract_folder_id(url).unwrap(), "1abc123XYZ");
    }

    #[test]
    fn test_extract_open_url() {
        let url = "https://drive.google.com/open?id=1abc123XYZ";
        assert_eq!(extract_folder_id(url).unwrap(), "1abc123XYZ");
    }

    #[test]
    fn test_extract_with_whitespace() {
        let id = "  1AbCdEfGhIjKlMnOpQrStUvWxYz  ";
        assert_eq!(extract_folder_id(id).unwrap(), "1AbCdEfGhIjKlMnOpQrStUvWxYz");
    }

    #[test]
    fn test_short_bare_id_rejected() {
        assert!(extract_folder_id("1abc123XYZ").is_err());
    }

    #[test]
    fn test_invalid_input() {
        assert!(extract_folder_id("https://example.com/folder/123").is_err());
        assert!(extract_folder_id("").is_err());
        assert!(extract_folder_id("   ").is_err());
    }
}
