mod archive;
mod error;
mod lists;
mod liveness;
mod log_level;
mod report;
mod rules;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use clap::Parser;
use log::info;

use crate::archive::ExtractedArchive;
use crate::liveness::{HttpProbe, Probe};
use crate::log_level::LogLevel;

/// Convert a Pi-hole teleporter backup into an AdGuard Home migration report
#[derive(Debug, Parser)]
#[command(name = "pihole2adguard", version)]
struct Cli {
    /// Path to the teleporter tar.gz archive
    archive: PathBuf,

    /// Timeout in seconds for each blocklist liveness probe
    #[arg(long, default_value_t = 5)]
    timeout: u64,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

/// Exit code for a failed argument parse: 0 for --help/--version output,
/// 1 for genuine usage errors.
fn usage_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        process::exit(usage_exit_code(&e));
    });
    env_logger::Builder::new()
        .filter_level(cli.log_level.into())
        .init();

    let probe = HttpProbe::new(Duration::from_secs(cli.timeout))?;
    let stdout = io::stdout();
    convert(&cli.archive, &probe, &mut stdout.lock()).await?;
    process::exit(0);
}

/// Runs the conversion pipeline: extract the archive, read the lists, drop
/// unreachable adlists, build the filtering rules and print the report.
///
/// * `archive_path`: path to the teleporter tar.gz archive
/// * `probe`: liveness capability used to check each adlist URL
/// * `out`: sink for the report
async fn convert<P: Probe, W: Write>(
    archive_path: &Path,
    probe: &P,
    out: &mut W,
) -> anyhow::Result<()> {
    let extracted = ExtractedArchive::unpack(archive_path).await?;
    let dir = extracted.dir();

    let adlist = lists::read_adlist(dir)?;
    let adlist = liveness::filter_working(adlist, probe).await;
    info!("{} adlist entries are reachable", adlist.len());

    let whitelist_exact = lists::read_whitelist_exact(dir)?;
    let blacklist_exact = lists::read_blacklist_exact(dir)?;
    let whitelist_regex = lists::read_whitelist_regex(dir)?;
    let blacklist_regex = lists::read_blacklist_regex(dir)?;
    let rules = rules::build_filtering_rules(
        &whitelist_exact,
        &blacklist_exact,
        &whitelist_regex,
        &blacklist_regex,
    );

    report::write_report(out, &adlist, &rules)?;
    Ok(())
}
