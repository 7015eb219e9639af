use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;

use crate::app::{handle_key, handle_mouse, App};
use crate::data::Dataset;
use crate::domain::Continent;
use crate::ui;

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Event poll timeout (ms); playback timing accumulates frame deltas,
    // so this only bounds input latency, not the step period.
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        // Advance playback and tweens
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    handle_key(app, key);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Mouse(mouse)) => {
                    handle_mouse(app, &mouse);
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(Event::FocusGained | Event::FocusLost | Event::Paste(_)) | Err(_) => {
                    // Ignore the rest
                }
            }
        }
    }
    Ok(())
}

/// Run without a UI: load the dataset and print summary stats
pub async fn run_headless(app: &mut App, json: bool) -> Result<()> {
    app.load_dataset().await?;

    let stats = build_headless_stats(app)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        render_headless_stats(&stats);
    }

    Ok(())
}

fn render_headless_stats(stats: &HeadlessStats) {
    println!("\nGapminder Dataset Stats");
    println!("========================");
    println!("Years: {} ({}..{})", stats.total_years, stats.first_year, stats.last_year);
    println!("Countries in first year: {}", stats.countries_first_year);
    println!("Countries in final year: {}", stats.countries_final_year);

    println!("\nFinal year by continent:");
    for (continent, count) in &stats.by_continent {
        println!("- {continent}: {count}");
    }
}

fn build_headless_stats(app: &App) -> Result<HeadlessStats> {
    let dataset = app
        .dataset
        .as_ref()
        .ok_or_else(|| color_eyre::eyre::eyre!("Dataset not loaded"))?;

    if dataset.is_empty() {
        return Err(color_eyre::eyre::eyre!("Dataset has no year records"));
    }

    Ok(HeadlessStats::from_dataset(dataset))
}

#[derive(Debug, serde::Serialize)]
struct HeadlessStats {
    total_years: usize,
    first_year: i32,
    last_year: i32,
    countries_first_year: usize,
    countries_final_year: usize,
    by_continent: Vec<(String, usize)>,
}

impl HeadlessStats {
    fn from_dataset(dataset: &Dataset) -> Self {
        let years = dataset.years();
        let first = &years[0];
        let last = &years[years.len() - 1];

        let by_continent = Continent::ALL
            .iter()
            .map(|continent| {
                let count = last
                    .countries
                    .iter()
                    .filter(|country| country.continent == *continent)
                    .count();
                (continent.as_str().to_string(), count)
            })
            .collect();

        Self {
            total_years: years.len(),
            first_year: first.year,
            last_year: last.year,
            countries_first_year: first.countries.len(),
            countries_final_year: last.countries.len(),
            by_continent,
        }
    }
}
