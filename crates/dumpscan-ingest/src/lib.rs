//! # dumpscan-ingest - File and Archive Ingestion
//!
//! The I/O layer of dumpscan. Reads bug-report files (fully in memory or
//! streamed line-by-line for large files), extracts ANR zip archives, and
//! enumerates ANR trace files under the fixed `FS/data/anr` layout.
//!
//! The extraction algorithms themselves live in `dumpscan-core`; this
//! crate owns every file handle and archive stream, so I/O errors surface
//! here and the core stays pure.

pub mod archive;
pub mod reader;

pub use archive::{extract_zip, ingest_anr_archive, list_anr_files, ANR_RELATIVE_PATH};
pub use reader::{
    analyze_bug_report, crashes_from_reader, load_bug_report, LARGE_FILE_THRESHOLD,
};
