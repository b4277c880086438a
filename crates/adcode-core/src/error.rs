use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AdcodeError {
    #[error("failed to access file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid region table {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid division code {0:?}: expected six ASCII digits")]
    InvalidCode(String),

    #[error("region not found: {0}")]
    RegionNotFound(String),
}

impl AdcodeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AdcodeError>;
