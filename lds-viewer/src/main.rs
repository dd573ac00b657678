use clap::Parser;
use lds_parser::ScanParser;
use lds_viewer::render::run;
use lds_viewer::{ScanViewer, ViewerError};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Displays the scans recorded in a Neato Botvac LDS log.
#[derive(Parser)]
#[command(about, long_about = None, disable_version_flag = true)]
struct Arguments {
    /// Name of the log file to extract scan data from
    #[arg(value_name = "LOGFILE-TO-PARSE")]
    log_file: PathBuf,
}

fn view_log(log_file: &Path) -> Result<(), ViewerError> {
    let scans = ScanParser::from_file(log_file)?;
    println!("Extracted {} scans.", scans.len());
    if scans.is_empty() {
        warn!("No scans found in {}.", log_file.display());
        return Ok(());
    }

    let viewer = ScanViewer::new(scans)?;
    println!("Press 'd' to go to the next scan.");
    println!("Press 'a' to go to the previous scan.");
    println!("Scan index = {}", viewer.index());
    run(viewer)?;

    info!("Viewer closed.");
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let arguments = Arguments::parse();

    if let Err(e) = view_log(&arguments.log_file) {
        error!("{e}");
        std::process::exit(1);
    }
}
