//! Recursive walk of a Drive folder tree collecting audio files.

use std::vec::IntoIter;

use tracing::{debug, trace};

use crate::error::Result;
use crate::models::{AudioRow, DriveItem};

/// File extensions treated as audio. Matched case-insensitively against the end of the name.
pub const AUDIO_EXTENSIONS: [&str; 8] = [
    ".mp3", ".wav", ".m4a", ".aac", ".flac", ".ogg", ".opus", ".wma",
];

/// Anything that can list the direct children of a folder.
#[allow(async_fn_in_trait)]
pub trait FolderSource {
    async fn list_children(&self, folder_id: &str) -> Result<Vec<DriveItem>>;
}

/// Whether a file name ends with one of [`AUDIO_EXTENSIONS`].
pub fn is_audio_file(name: &str) -> bool {
    let name = name.to_lowercase();
    AUDIO_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Join a parent path and a folder name with `/`. The root path is empty.
fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}

/// A folder whose listing is partially consumed.
struct Frame {
    path: String,
    items: IntoIter<DriveItem>,
}

/// Walk `root_id` depth-first and return a row for every audio file below it.
///
/// Items are visited in listing order and a subfolder's rows are emitted in
/// place, before the remaining siblings. The first listing error aborts the
/// whole walk.
pub async fn scan_folder<S: FolderSource>(source: &S, root_id: &str) -> Result<Vec<AudioRow>> {
    let mut rows = Vec::new();
    let mut stack = vec![Frame {
        path: String::new(),
        items: source.list_children(root_id).await?.into_iter(),
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(item) = frame.items.next() else {
            stack.pop();
            continue;
        };

        if item.is_folder() {
            let path = child_path(&frame.path, &item.name);
            debug!(folder_id = %item.id, path = %path, "descending into folder");
            let items = source.list_children(&item.id).await?.into_iter();
            stack.push(Frame { path, items });
        } else if is_audio_file(&item.name) {
            rows.push(AudioRow::from_item(item, &frame.path));
        } else {
            trace!("skipping non-audio item {}", item);
        }
    }

    Ok(rows)
}
