use std::{fs::File, path::PathBuf, sync::Mutex};

use color_eyre::eyre::{Result, eyre};
use directories::ProjectDirs;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_FILE: &str = "bookmood.log";

pub fn data_dir() -> Result<PathBuf> {
    ProjectDirs::from("dev", "bookmood", "bookmood")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .ok_or_else(|| eyre!("Could not resolve a data directory"))
}

pub fn initialize_logging(filter: &str) -> Result<()> {
    let directory = data_dir()?;
    std::fs::create_dir_all(&directory)?;
    let log_file = File::create(directory.join(LOG_FILE))?;

    let file_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(Mutex::new(log_file))
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::try_new(filter)?);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(())
}
