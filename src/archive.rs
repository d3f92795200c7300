use std::path::Path;

use async_compression::tokio::bufread::GzipDecoder;
use log::debug;
use tempfile::TempDir;
use tokio::{fs::File, io::BufReader};
use tokio_tar::Archive;

use crate::error::ConvertError;

/// ExtractedArchive is the unpacked contents of a teleporter backup.
/// The backing temporary directory is removed when the value is dropped,
/// on error paths as well as on success.
#[derive(Debug)]
pub struct ExtractedArchive {
    dir: TempDir,
}

impl ExtractedArchive {
    /// Unpacks a gzip-compressed tar archive into a fresh temporary
    /// directory. tokio-tar keeps entries with traversal paths from being
    /// written outside the destination.
    ///
    /// * `archive_path`: path to the teleporter tar.gz archive
    pub async fn unpack(archive_path: &Path) -> Result<Self, ConvertError> {
        let dir = TempDir::new()?;
        let f = File::open(archive_path).await.map_err(|e| {
            ConvertError::Extraction(format!(
                "unable to open archive {}: {}",
                archive_path.display(),
                e
            ))
        })?;
        let gz = GzipDecoder::new(BufReader::new(f));
        let mut archive = Archive::new(gz);
        archive.unpack(dir.path()).await.map_err(|e| {
            ConvertError::Extraction(format!(
                "unable to unpack archive {}: {}",
                archive_path.display(),
                e
            ))
        })?;
        debug!("extracted archive into {}", dir.path().display());
        Ok(Self { dir })
    }

    /// the directory containing the extracted files
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}
