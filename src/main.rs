//! dumpscan - Extract structured crash and ANR records from Android bug reports
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use dumpscan::{run_anr_analysis, run_crash_analysis, run_crash_analysis_stdin};

/// Extract structured crash and ANR records from Android bug reports
#[derive(Parser, Debug)]
#[command(name = "dumpscan")]
#[command(about = "Extract crash and ANR records from Android bug reports", long_about = None)]
struct Args {
    /// Path to a bug-report file; reads stdin when omitted
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Ingest an ANR zip archive instead of a bug-report file
    #[arg(long, value_name = "ARCHIVE")]
    anr_zip: Option<PathBuf>,

    /// Directory to extract archives into (defaults to a per-run temp dir)
    #[arg(long, value_name = "DIR")]
    work_dir: Option<PathBuf>,

    /// Emit indented JSON instead of one compact object per line
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = dumpscan_core::logging::init() {
        eprintln!("warning: failed to initialize logging: {e}");
    }

    let result = if let Some(zip_path) = &args.anr_zip {
        let work_dir = args.work_dir.clone().unwrap_or_else(default_work_dir);
        if let Err(e) = std::fs::create_dir_all(&work_dir) {
            eprintln!("❌ Cannot create work directory {}: {e}", work_dir.display());
            return ExitCode::FAILURE;
        }
        run_anr_analysis(zip_path, &work_dir, args.pretty).await
    } else if let Some(path) = &args.path {
        run_crash_analysis(path, args.pretty).await
    } else {
        run_crash_analysis_stdin(args.pretty)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}

/// Per-run extraction directory under the system temp dir
fn default_work_dir() -> PathBuf {
    let millis = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    std::env::temp_dir().join(format!("dumpscan-{millis}"))
}
