use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn one ticket export into rows
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
