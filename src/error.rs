// Error types shared by the selection, registry and export stages.
//
// Unknown or redundant selection codes are not errors: they surface as
// `CodeStatus` values in the criteria report and the run continues.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DmrError {
    /// Neither region nor country codes were supplied
    #[error("no options specified to do anything...")]
    EmptyCriteria,

    #[error("can't find local DMR database {}; use -d to download it", .path.display())]
    DatabaseMissing { path: PathBuf },

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse DMR database {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write CSV export: {0}")]
    Csv(#[from] csv::Error),

    #[error("problem downloading DMR database -> network problems ! ({0})")]
    Download(String),

    #[error("DMR database download failed with status: {0}")]
    DownloadStatus(u16),
}

pub type Result<T> = std::result::Result<T, DmrError>;

impl DmrError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DmrError::Io { path: path.into(), source }
    }
}
