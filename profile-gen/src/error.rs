use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to write profiles to '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize profiles: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Profile count must be non-negative, got {count}")]
    InvalidCount { count: i64 },

    #[error("Profile count {count} exceeds what this platform can address")]
    CountTooLarge { count: i64 },

    #[error("File '{path}' exists. Drop --no-clobber to overwrite.")]
    FileExists { path: PathBuf },
}
