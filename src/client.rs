//! Google Drive API client for folder listings.

use reqwest::Client;
use tracing::debug;

use crate::auth::Authenticator;
use crate::error::{DriveError, Result};
use crate::models::{ApiErrorResponse, DriveItem, FileListResponse};
use crate::scanner::FolderSource;

/// Base URL for Google Drive API v3.
pub const DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3";

/// Maximum page size accepted by `files.list`.
const PAGE_SIZE: &str = "1000";

/// Fields requested for each listed item.
const LIST_FIELDS: &str = "nextPageToken, files(id,name,mimeType,createdTime,webViewLink)";

/// Read-only client for listing Drive folders, Shared Drives included.
pub struct DriveClient {
    auth: Authenticator,
    http: Client,
    base_url: String,
}

impl DriveClient {
    /// Create a new DriveClient against the public Drive API.
    pub fn new(auth: Authenticator) -> Self {
        Self::with_base_url(auth, DRIVE_API_BASE)
    }

    /// Create a DriveClient that talks to a different API base URL.
    pub fn with_base_url(auth: Authenticator, base_url: impl Into<String>) -> Self {
        Self {
            auth,
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Service account email the client acts as.
    pub fn client_email(&self) -> &str {
        self.auth.client_email()
    }

    /// List every non-trashed child of a folder, following page tokens.
    ///
    /// # Arguments
    /// * `folder_id` - The ID of the parent folder
    pub async fn list_children(&self, folder_id: &str) -> Result<Vec<DriveItem>> {
        let query = format!("'{}' in parents and trashed=false", folder_id);
        let token = self.auth.get_access_token().await?;
        let mut all_items = Vec::new();
        let mut page_token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let mut request = self
                .http
                .get(format!("{}/files", self.base_url))
                .bearer_auth(&token)
                .query(&[
                    ("q", query.as_str()),
                    ("fields", LIST_FIELDS),
                    ("supportsAllDrives", "true"),
                    ("includeItemsFromAllDrives", "true"),
                    ("corpora", "allDrives"),
                    ("pageSize", PAGE_SIZE),
                ]);

            if let Some(ref token) = page_token {
                request = request.query(&[("pageToken", token)]);
            }

            let response = request.send().await?;
            let status = response.status();

            if !status.is_success() {
                let error_body = response.text().await.unwrap_or_default();
                if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&error_body) {
                    return Err(DriveError::ApiError {
                        status: api_error.error.code,
                        message: api_error.error.message,
                    });
                }
                return Err(DriveError::ApiError {
                    status: status.as_u16(),
                    message: error_body,
                });
            }

            let list_response: FileListResponse = response.json().await?;
            pages += 1;
            all_items.extend(list_response.files);

            match list_response.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!(folder_id, pages, items = all_items.len(), "listed folder");
        Ok(all_items)
    }
}

impl FolderSource for DriveClient {
    async fn list_children(&self, folder_id: &str) -> Result<Vec<DriveItem>> {
        DriveClient::list_children(self, folder_id).await
    }
}

#[cfg(test)]
mod tests {
    // Tests are in tests/client_test.rs
}
