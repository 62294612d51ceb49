//! One extraction run: walk a folder and encode the audio rows as CSV.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::export::write_csv;
use crate::models::AudioRow;
use crate::scanner::{scan_folder, FolderSource};

/// Shown when a walk finds nothing to export.
pub const EMPTY_RESULT_WARNING: &str =
    "No audio files found, or the folder isn't shared with the service account.";

/// Outcome of a successful walk.
#[derive(Debug)]
pub enum Extraction {
    /// At least one audio file was found.
    Found { rows: Vec<AudioRow>, csv: Vec<u8> },
    /// The folder tree holds no audio files (or is not visible to the account).
    Empty,
}

impl Extraction {
    pub fn row_count(&self) -> usize {
        match self {
            Self::Found { rows, .. } => rows.len(),
            Self::Empty => 0,
        }
    }
}

/// Walk `folder_id` and build the CSV download, if there is anything to download.
pub async fn extract_audio_links<S: FolderSource>(source: &S, folder_id: &str) -> Result<Extraction> {
    info!(folder_id, "scanning drive folder recursively");
    let rows = scan_folder(source, folder_id).await?;
    info!(folder_id, audio_files = rows.len(), "scan finished");

    if rows.is_empty() {
        return Ok(Extraction::Empty);
    }

    let csv = write_csv(&rows)?;
    Ok(Extraction::Found { rows, csv })
}

/// Run one extraction for the command line.
///
/// The CSV goes to `output` when given, otherwise to `stdout`. Progress and the
/// empty-result warning are printed to stderr. Nothing is written when the
/// walk finds no audio files.
pub async fn extract_to<S, W>(
    source: &S,
    folder_id: &str,
    output: Option<&Path>,
    stdout: &mut W,
) -> Result<Extraction>
where
    S: FolderSource,
    W: Write,
{
    let extraction = extract_audio_links(source, folder_id).await?;
    eprintln!("Done. Found {} audio files.", extraction.row_count());

    match (&extraction, output) {
        (Extraction::Empty, _) => eprintln!("Warning: {}", EMPTY_RESULT_WARNING),
        (Extraction::Found { csv, .. }, Some(path)) => {
            std::fs::write(path, csv)?;
            eprintln!("Saved to: {:?}", path);
        }
        (Extraction::Found { csv, .. }, None) => {
            stdout.write_all(csv)?;
            stdout.flush()?;
        }
    }

    Ok(extraction)
}
