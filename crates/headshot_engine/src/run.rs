use std::path::Path;

use headshot_logging::{headshot_debug, headshot_info};

use crate::config::ScrapeConfig;
use crate::document::{PageDocument, ParseError};
use crate::download::download_image;
use crate::fetch::{Fetcher, ReqwestFetcher};
use crate::filename::headshot_path;
use crate::listing::{extract_players, ListingExtract};
use crate::persist::{ensure_output_dir, PersistError};
use crate::profile::fetch_image_url;
use crate::sink::RunSink;
use crate::{DownloadResult, FetchError, FetchOutput, PlayerEntry, RunEvent, RunStage, SkipReason};

/// Errors that stop the run before any player is processed.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("failed to start runtime: {0}")]
    Runtime(std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(FetchError),
    #[error("failed to create directory: {0}")]
    OutputDir(PersistError),
    #[error("failed to fetch listing: {0}")]
    ListingFetch(FetchError),
    #[error("failed to parse listing: {0}")]
    ListingParse(ParseError),
}

/// One pass over the listing: every player is fetched and saved in order,
/// and a failing player never stops the ones after it.
pub async fn run(
    config: &ScrapeConfig,
    fetcher: &dyn Fetcher,
    sink: &dyn RunSink,
) -> Result<(), RunError> {
    headshot_debug!("{:?}: output dir {}", RunStage::Init, config.output_dir.display());
    ensure_output_dir(&config.output_dir).map_err(RunError::OutputDir)?;

    let page = fetcher
        .get(&config.listing_url)
        .await
        .map_err(RunError::ListingFetch)?;
    let listing = parse_listing(&page, config).map_err(RunError::ListingParse)?;
    headshot_info!(
        "{} players listed at {}",
        listing.entries.len(),
        config.listing_url
    );
    headshot_debug!("{:?}", RunStage::ListingFetched);

    for warning in listing.warnings {
        sink.emit(RunEvent::Listing(warning));
    }
    for entry in listing.entries {
        let result = process_entry(config, fetcher, entry).await;
        sink.emit(RunEvent::Finished(result));
    }

    headshot_debug!("{:?}", RunStage::Done);
    Ok(())
}

/// Run on a fresh current-thread runtime with the real HTTP client.
pub fn run_blocking(config: &ScrapeConfig, sink: &dyn RunSink) -> Result<(), RunError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(RunError::Runtime)?;
    let fetcher = ReqwestFetcher::new(config.fetch.clone()).map_err(RunError::Client)?;
    runtime.block_on(run(config, &fetcher, sink))
}

fn parse_listing(page: &FetchOutput, config: &ScrapeConfig) -> Result<ListingExtract, ParseError> {
    let doc = PageDocument::parse(&page.bytes, page.metadata.content_type.as_deref());
    extract_players(&doc, config)
}

async fn process_entry(
    config: &ScrapeConfig,
    fetcher: &dyn Fetcher,
    entry: PlayerEntry,
) -> DownloadResult {
    let path = headshot_path(&config.output_dir, &entry.name, &config.image_extension);
    let error = save_headshot(config, fetcher, &entry, &path).await.err();
    let stage = if error.is_none() {
        RunStage::ImageDownloaded
    } else {
        RunStage::Skipped
    };
    headshot_debug!("{stage:?}: {}", entry.name);
    DownloadResult {
        player: entry.name,
        path,
        error,
    }
}

async fn save_headshot(
    config: &ScrapeConfig,
    fetcher: &dyn Fetcher,
    entry: &PlayerEntry,
    path: &Path,
) -> Result<(), SkipReason> {
    let image_url = fetch_image_url(fetcher, &entry.profile_url, config).await?;
    headshot_debug!("{:?}: {} -> {image_url}", RunStage::ProfileFetched, entry.name);
    download_image(fetcher, &image_url, path).await?;
    Ok(())
}
