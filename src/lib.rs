//! drive_audio - Export links to every audio file in a Google Drive folder.
//!
//! This library provides functionality to:
//! - Parse a Drive folder URL (or bare ID) into a folder ID
//! - List folders through the Drive API with a service account, Shared Drives included
//! - Walk a folder tree and collect audio files with share and download links
//! - Encode the result as CSV, from the command line or a small web form
//!
//! # Example
//!
//! ```no_run
//! use drive_audio::{extract_folder_id, scan_folder, write_csv, Authenticator, DriveClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let auth = Authenticator::from_file("service-account.json")?;
//!     let client = DriveClient::new(auth);
//!
//!     let folder_id = extract_folder_id("https://drive.google.com/drive/folders/1abc")?;
//!     let rows = scan_folder(&client, &folder_id).await?;
//!     std::fs::write("audio_links.csv", write_csv(&rows)?)?;
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod export;
pub mod extract;
pub mod logging;
pub mod models;
pub mod scanner;
pub mod secrets;
pub mod url_parser;
pub mod web;

// Re-exports for convenience
pub use auth::Authenticator;
pub use client::DriveClient;
pub use error::{DriveError, Result};
pub use export::write_csv;
pub use extract::{extract_audio_links, extract_to, Extraction};
pub use models::{AudioRow, DriveItem};
pub use scanner::{scan_folder, FolderSource};
pub use secrets::{CredentialSource, SecretStore};
pub use url_parser::extract_folder_id;
