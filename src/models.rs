//! Data models for Google Drive API responses and extracted rows.

use serde::{Deserialize, Serialize};

/// MIME type Drive uses for folders.
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// A file or folder returned by a `files.list` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub created_time: String,
    #[serde(default)]
    pub web_view_link: String,
}

impl DriveItem {
    pub fn is_folder(&self) -> bool {
        self.mime_type == FOLDER_MIME_TYPE
    }
}

impl std::fmt::Display for DriveItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mime: &str = if self.mime_type.is_empty() {
            "-"
        } else {
            &self.mime_type
        };
        write!(f, "{}\t{}\t{}", self.id, mime, self.name)
    }
}

/// One line of the exported CSV.
///
/// Field order matches the CSV header; the serde names are the header cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioRow {
    #[serde(rename = "File Name")]
    pub name: String,
    #[serde(rename = "Folder Path")]
    pub folder_path: String,
    #[serde(rename = "View Link")]
    pub view_link: String,
    #[serde(rename = "Share Link")]
    pub share_link: String,
    #[serde(rename = "Direct Download Link")]
    pub direct_link: String,
    #[serde(rename = "Uploaded Date")]
    pub created_time: String,
    #[serde(rename = "File ID")]
    pub file_id: String,
}

impl AudioRow {
    /// Build a row for `item` found under `folder_path`.
    pub fn from_item(item: DriveItem, folder_path: &str) -> Self {
        Self {
            share_link: share_link(&item.id),
            direct_link: direct_link(&item.id),
            name: item.name,
            folder_path: folder_path.to_string(),
            view_link: item.web_view_link,
            created_time: item.created_time,
            file_id: item.id,
        }
    }
}

/// Link that opens the Drive preview page for a file.
pub fn share_link(file_id: &str) -> String {
    format!("https://drive.google.com/file/d/{}/view?usp=sharing", file_id)
}

/// Link that downloads the file content directly.
pub fn direct_link(file_id: &str) -> String {
    format!("https://drive.google.com/uc?id={}", file_id)
}

/// Response from the files.list API endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileListResponse {
    #[serde(default)]
    pub files: Vec<DriveItem>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Google API error response.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub code: u16,
    pub message: String,
}

/// Service account key fields. Unknown fields in the key are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountCredentials {
    pub client_email: String,
    pub private_key: String,
    pub token_uri: Option<String>,
}

/// OAuth2 token response.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}
