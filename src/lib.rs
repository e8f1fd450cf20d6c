// cargo watch -x 'fmt' -x 'run'

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod source;

use colored::Colorize;
use config::Config;
use error::Result;
use output::RouteSink;
use std::io::Write;

/// Counts from one pipeline run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// IPv4 prefixes taken from the published document.
    pub fetched: usize,
    /// Prefixes taken from the extras file.
    pub extras: usize,
    /// Route commands written.
    pub written: usize,
    /// Entries skipped as invalid CIDR.
    pub skipped: usize,
    /// Lines that could not be written to the routes file.
    pub failed_writes: usize,
}

/// Fetch, merge, format and emit.
///
/// Returns an error only for fatal failures (fetch or output creation); bad
/// entries, failed line writes and a broken extras file are logged and skipped.
pub async fn run<O: Write>(config: &Config, client: &reqwest::Client, out: O) -> Result<RunSummary> {
    log::info!("#Start run()");

    let doc = source::fetch_range_document(client, &config.url).await?;
    let mut sink = RouteSink::create(&config.routes_file, out)?;

    let extras = match &config.extras_file {
        Some(path) => source::extras_or_empty(path),
        None => Vec::new(),
    };

    let ipv4 = processing::ipv4_prefixes(&doc);
    let mut summary = RunSummary {
        fetched: ipv4.len(),
        extras: extras.len(),
        ..Default::default()
    };
    let prefixes = processing::merge_prefixes(ipv4, extras);

    for cidr in &prefixes {
        let route = match processing::format_route(cidr) {
            Ok(route) => route,
            Err(e) => {
                log::warn!("{} {e}", "skipped".on_red());
                summary.skipped += 1;
                continue;
            }
        };
        log::debug!("{cidr} => {route}");

        match sink.emit(&route) {
            Ok(()) => summary.written += 1,
            Err(e) => {
                log::warn!("{e}");
                summary.failed_writes += 1;
            }
        }
    }
    sink.finish();

    log::info!(
        "Done: fetched={} extras={} written={} skipped={} failed_writes={}",
        summary.fetched,
        summary.extras,
        summary.written,
        summary.skipped,
        summary.failed_writes
    );
    Ok(summary)
}
