use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(
    name = "gapminder-tui",
    version,
    about = "Animated GDP / life expectancy bubble chart"
)]
pub struct CliArgs {
    /// Print dataset stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless stats as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override dataset path
    #[arg(long, value_name = "PATH")]
    pub data: Option<String>,

    /// Override the playback step period in milliseconds
    #[arg(long = "interval-ms", value_name = "MS")]
    pub interval_ms: Option<u64>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(data) = &self.data {
            std::env::set_var("DATA_FILE", data);
        }
        if let Some(ms) = self.interval_ms {
            std::env::set_var("STEP_INTERVAL_MS", ms.to_string());
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}
