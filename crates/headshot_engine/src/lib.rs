//! Headshot engine: fetch the player listing, follow each profile and save
//! the headshot image under the player's name.
mod config;
mod decode;
mod document;
mod download;
mod fetch;
mod filename;
mod listing;
mod persist;
mod profile;
mod run;
mod sink;
mod types;

pub use config::{ScrapeConfig, DEFAULT_ORIGIN, DEFAULT_OUTPUT_DIR, LISTING_PATH};
pub use decode::{decode_html, DecodedHtml};
pub use document::{PageDocument, PageNode, ParseError};
pub use download::{download_image, DownloadError};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use filename::headshot_path;
pub use listing::{extract_players, resolve_profile_url, ListingExtract, ListingWarning};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use profile::{extract_image_url, fetch_image_url, ProfileError};
pub use run::{run, run_blocking, RunError};
pub use sink::{render, LogSink, RunSink};
pub use types::{
    DownloadResult, FailureKind, FetchError, FetchMetadata, FetchOutput, PlayerEntry, RunEvent,
    RunStage, SkipReason,
};
