use std::fmt;
use std::path::PathBuf;

use bytes::Bytes;

use crate::download::DownloadError;
use crate::listing::ListingWarning;
use crate::profile::ProfileError;

/// One player as listed on the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerEntry {
    pub name: String,
    pub profile_url: String,
}

/// Where a single run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    Init,
    ListingFetched,
    ProfileFetched,
    ImageDownloaded,
    Skipped,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Bytes,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub final_url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Why a single player produced no file.
#[derive(Debug, thiserror::Error)]
pub enum SkipReason {
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error("image download failed: {0}")]
    Download(#[from] DownloadError),
}

/// Outcome for one listing entry. Handed to the sink and then dropped.
#[derive(Debug)]
pub struct DownloadResult {
    pub player: String,
    pub path: PathBuf,
    pub error: Option<SkipReason>,
}

impl DownloadResult {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug)]
pub enum RunEvent {
    Listing(ListingWarning),
    Finished(DownloadResult),
}
