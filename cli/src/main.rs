//! Snapshot diff tool for the locations collection.
//!
//! Compares two JSON snapshots of the buildings collection and reports
//! which records were removed, which were rekeyed (same name, new id),
//! and which are genuinely new. The name→id mapping for every name
//! present in both snapshots is written to a JSON document.
//!
//! # Usage
//!
//! ```bash
//! locdiff old.json new.json
//! locdiff old.json new.json --output keys.json
//! ```
//!
//! Exits 0 whether or not differences were found, non-zero on any error.

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use locdiff_engine::{reconcile, render_report, Collection, KeyMapDocument};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_OUTPUT: &str = "buildingsWithOldNewKeys.json";

#[derive(Parser)]
#[command(about = "Diff two snapshots of the locations collection")]
struct Args {
    /// Path of the old snapshot JSON
    old_data_path: PathBuf,

    /// Path of the new snapshot JSON
    new_data_path: PathBuf,

    /// Where to write the old/new key mapping
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

/// Errors fatal to a diff run.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("old and new paths are the same file: {}", .0.display())]
    DuplicateInput(PathBuf),

    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: locdiff_engine::Error,
    },

    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Serialize(#[from] locdiff_engine::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "locdiff=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Guard the paths, reconcile the snapshots, persist the key map, and
/// return the rendered report.
fn run(args: &Args) -> Result<String, CliError> {
    // Textual comparison only. Two distinct paths resolving to the same
    // content are not treated as duplicates, and neither file is read
    // before this check.
    if args.old_data_path == args.new_data_path {
        return Err(CliError::DuplicateInput(args.old_data_path.clone()));
    }

    let old = load_collection(&args.old_data_path)?;
    let new = load_collection(&args.new_data_path)?;
    tracing::info!(
        old = old.len(),
        new = new.len(),
        "loaded both snapshots"
    );

    let result = reconcile(&old.index(), &new.index());

    // The key map is written even when there are no differences.
    let doc = KeyMapDocument::from_result(&result);
    write_key_map(&args.output, &doc)?;
    tracing::info!(path = %args.output.display(), names = doc.buildings.len(), "wrote key map");

    Ok(render_report(&result))
}

fn load_collection(path: &Path) -> Result<Collection, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Collection::from_json(&text).map_err(|source| CliError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the document in full and flush before returning. The handle is
/// scoped to this function, so every exit path releases it.
fn write_key_map(path: &Path, doc: &KeyMapDocument) -> Result<(), CliError> {
    let text = doc.to_json_pretty()?;

    let write = |path: &Path| -> std::io::Result<()> {
        let mut file = fs::File::create(path)?;
        file.write_all(text.as_bytes())?;
        file.write_all(b"\n")?;
        file.flush()
    };

    write(path).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}
