use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::app::playback::DEFAULT_INTERVAL;

/// Initializes the application configuration.
/// Loads the .env file and reports the dataset path in use.
pub fn init_app_config() -> PathBuf {
    // Load environment variables from .env file
    dotenv().ok();

    let data_path = get_data_path();
    eprintln!("Using dataset: {}", data_path.display());
    data_path
}

/// Path of the yearly dataset file.
pub fn get_data_path() -> PathBuf {
    env::var("DATA_FILE").map_or_else(|_| PathBuf::from("CountryGDP.json"), PathBuf::from)
}

/// Playback step period. Falls back to the default on unparsable values.
pub fn get_step_interval() -> Duration {
    env::var("STEP_INTERVAL_MS")
        .ok()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .map_or(DEFAULT_INTERVAL, Duration::from_millis)
}
