//! ANR archive traversal
//!
//! Bulk ANR ingestion takes a zip archive, extracts it to a working
//! directory preserving relative paths, and parses every regular file
//! under the fixed `FS/data/anr` layout. The layout is an external
//! contract of Android bug-report archives, not configurable.

use std::fs::{self, File};
use std::io::{self, Read, Seek};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use zip::ZipArchive;

use dumpscan_core::{anr::parse_anr_file, AnrRecord, Error, Result};

/// Relative path under the extraction root where ANR traces live
pub const ANR_RELATIVE_PATH: &str = "FS/data/anr";

/// Extract every entry of a zip archive under `target_dir`.
///
/// Relative directory structure is reproduced on disk, parent directories
/// are created as needed, and each entry's output file is closed before
/// the next entry is processed. Entries whose names escape `target_dir`
/// are rejected. Returns the extraction root.
pub fn extract_zip<R: Read + Seek>(source: R, target_dir: &Path) -> Result<PathBuf> {
    let mut archive = ZipArchive::new(source).map_err(|e| Error::archive(e.to_string()))?;

    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| Error::archive(e.to_string()))?;

        let Some(relative) = entry.enclosed_name() else {
            return Err(Error::ArchiveEntryEscape {
                name: entry.name().to_string(),
            });
        };
        let out_path = target_dir.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
        } else {
            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut out_file = File::create(&out_path)?;
            io::copy(&mut entry, &mut out_file)?;
        }
    }

    debug!("Extracted {} entries to {}", archive.len(), target_dir.display());
    Ok(target_dir.to_path_buf())
}

/// List regular files under `<root>/FS/data/anr`.
///
/// A missing or non-directory path yields an empty list, not an error --
/// an archive without ANR traces is a valid archive.
pub fn list_anr_files(root: &Path) -> Vec<PathBuf> {
    let anr_dir = root.join(ANR_RELATIVE_PATH);

    let entries = match fs::read_dir(&anr_dir) {
        Ok(entries) => entries,
        Err(_) => {
            debug!("No ANR directory at {}", anr_dir.display());
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|entry| entry.path())
        .collect()
}

/// Extract an ANR zip archive and parse every trace file it contains.
///
/// Records come back in file-system enumeration order (not guaranteed
/// sorted). An unreadable trace file fails the whole ingestion with a
/// recoverable error.
pub fn ingest_anr_archive(zip_path: &Path, work_dir: &Path) -> Result<Vec<AnrRecord>> {
    let source = File::open(zip_path)?;
    let root = extract_zip(source, work_dir)?;

    let files = list_anr_files(&root);
    if files.is_empty() {
        warn!("Archive {} contains no ANR traces", zip_path.display());
    }

    let mut records = Vec::with_capacity(files.len());
    for file in &files {
        records.push(parse_anr_file(file)?);
    }

    debug!("Parsed {} ANR records from {}", records.len(), zip_path.display());
    Ok(records)
}
