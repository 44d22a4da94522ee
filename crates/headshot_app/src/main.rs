mod logging;

use std::process::ExitCode;

use headshot_engine::{run_blocking, LogSink, ScrapeConfig};
use headshot_logging::{headshot_error, headshot_info};

fn main() -> ExitCode {
    logging::initialize(log::LevelFilter::Info);

    let config = ScrapeConfig::default();
    headshot_info!(
        "Downloading headshots from {} into {}",
        config.listing_url,
        config.output_dir.display()
    );

    match run_blocking(&config, &LogSink) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            headshot_error!("{err}");
            ExitCode::FAILURE
        }
    }
}
