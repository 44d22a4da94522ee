use headshot_logging::{headshot_info, headshot_warn};
use log::Level;

use crate::{DownloadResult, RunEvent};

/// Where a run reports what happened to each player.
pub trait RunSink: Send + Sync {
    fn emit(&self, event: RunEvent);
}

/// Turns every event into one log line.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl RunSink for LogSink {
    fn emit(&self, event: RunEvent) {
        match render(&event) {
            (Level::Info, line) => headshot_info!("{line}"),
            (_, line) => headshot_warn!("{line}"),
        }
    }
}

/// The single log line an event becomes, and its level.
pub fn render(event: &RunEvent) -> (Level, String) {
    match event {
        RunEvent::Listing(warning) => (Level::Warn, warning.to_string()),
        RunEvent::Finished(DownloadResult {
            player,
            path,
            error: None,
        }) => (
            Level::Info,
            format!("Saved headshot for {player} ({})", path.display()),
        ),
        RunEvent::Finished(DownloadResult {
            player,
            error: Some(cause),
            ..
        }) => (Level::Warn, format!("Skipped {player}: {cause}")),
    }
}
