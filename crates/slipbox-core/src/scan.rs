//! Note discovery for slipbox
//!
//! The scanner is the only file-system collaborator: it turns a notes
//! directory into raw `(id, text)` pairs for `Collection::build`. Only the
//! top level of the directory is read, matching zetteldeft's flat layout.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, SlipboxError};

/// Derive a note id from its file name
///
/// The id is the first whitespace-delimited token of the name. A name
/// without spaces keeps its extension, so `a.org` yields the id `a.org`.
pub fn note_id(file_name: &str) -> Option<&str> {
    file_name.split_whitespace().next()
}

/// Collect `(id, text)` pairs from every note file directly under `dir`
///
/// Files are processed in path order so repeated scans build identical
/// collections. A note file that cannot be read aborts the whole scan;
/// entries that cannot be traversed at all are skipped.
pub fn scan_notes(dir: &Path, extension: &str) -> Result<Vec<(String, String)>> {
    if !dir.is_dir() {
        return Err(SlipboxError::NotesDirNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(dir)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|e| e == extension)
        {
            paths.push(entry.into_path());
        }
    }
    paths.sort();

    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let text = fs::read_to_string(&path).map_err(|source| SlipboxError::SourceRead {
            path: path.clone(),
            source,
        })?;

        if let Some(name) = path.file_name() {
            let name = name.to_string_lossy();
            if let Some(id) = note_id(&name) {
                sources.push((id.to_string(), text));
            }
        }
    }

    tracing::debug!(dir = %dir.display(), count = sources.len(), "scanned note sources");
    Ok(sources)
}
