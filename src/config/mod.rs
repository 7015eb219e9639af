pub mod config;

pub use config::{get_data_path, get_step_interval, init_app_config};
