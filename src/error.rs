use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// ConvertError enumerates the fatal failure modes of a conversion run.
/// Per-URL probe failures are not errors, they only exclude the entry.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("could not extract archive: {0}")]
    Extraction(String),

    #[error("expected file missing from archive: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("malformed data in {file}: {source}")]
    MalformedData {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}
