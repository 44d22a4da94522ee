use std::path::Path;

use headshot_logging::headshot_debug;

use crate::fetch::Fetcher;
use crate::persist::{AtomicFileWriter, PersistError};
use crate::FetchError;

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("{0}")]
    Fetch(#[from] FetchError),
    #[error("{0}")]
    Persist(#[from] PersistError),
    #[error("destination has no file name: {0}")]
    InvalidDestination(String),
}

/// GET `url` and store the body verbatim at `dest`, creating missing parent
/// directories and replacing any existing file. Returns the byte count.
///
/// Nothing touches the filesystem until the body has fully arrived.
pub async fn download_image(
    fetcher: &dyn Fetcher,
    url: &str,
    dest: &Path,
) -> Result<u64, DownloadError> {
    let filename = dest
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| DownloadError::InvalidDestination(dest.display().to_string()))?;

    let output = fetcher.get(url).await?;
    AtomicFileWriter::for_target(dest).write(filename, &output.bytes)?;
    headshot_debug!(
        "wrote {} bytes from {} to {}",
        output.metadata.byte_len,
        output.metadata.final_url,
        dest.display()
    );
    Ok(output.metadata.byte_len)
}
