use std::io;
use thiserror::Error;

/// IO-level errors for file creation and record writing.
///
/// The only failure taxonomy in the system: always fatal to the single run
/// that hit it, never to the process (the harness logs it and moves on to the
/// next tier). Partial files are left on disk.
#[derive(Error, Debug)]
pub enum IoError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
