mod app;
mod chart;
mod cli;
mod config;
mod data;
mod domain;
mod event;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    config::init_app_config();

    let mut app = App::with_interval(config::get_step_interval());

    // Run in headless mode when asked to, or without a terminal
    if args.headless || !is_terminal() {
        return event::run_headless(&mut app, args.json).await;
    }

    // A load failure is fatal: no animation starts, no retry
    if let Err(e) = app.load_dataset().await {
        eprintln!("Error loading dataset: {e}");
        return Err(e);
    }

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal
    terminal::cleanup_terminal_state(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
