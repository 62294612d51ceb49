//! CSV encoding of extracted audio rows.

use std::io::Read;

use csv::{ReaderBuilder, WriterBuilder};

use crate::error::{DriveError, Result};
use crate::models::AudioRow;

/// File name offered for the download.
pub const CSV_FILE_NAME: &str = "audio_links.csv";

/// MIME type of the download.
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Header row, in column order.
pub const CSV_HEADER: [&str; 7] = [
    "File Name",
    "Folder Path",
    "View Link",
    "Share Link",
    "Direct Download Link",
    "Uploaded Date",
    "File ID",
];

/// Encode rows as CSV, header first.
pub fn write_csv(rows: &[AudioRow]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| DriveError::IoError(e.into_error()))
}

/// Decode CSV produced by [`write_csv`].
pub fn read_csv<R: Read>(input: R) -> Result<Vec<AudioRow>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);
    let rows = reader.deserialize().collect::<csv::Result<Vec<AudioRow>>>()?;
    Ok(rows)
}
