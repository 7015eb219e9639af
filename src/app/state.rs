use std::time::{Duration, Instant};

use color_eyre::Result;

use crate::app::playback::Playback;
use crate::chart::{Bubble, ChartScales, Scene};
use crate::config::get_data_path;
use crate::data::{load_dataset, Dataset};

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub status_message: String,
    pub show_help: bool,
    pub last_frame: Instant,
    pub dataset: Option<Dataset>,
    pub scales: ChartScales,
    pub scene: Scene,
    pub playback: Playback,
    /// Key of the bubble under the pointer, if any.
    pub hovered: Option<String>,
    /// Last pointer cell, used to place the tooltip.
    pub mouse_position: Option<(u16, u16)>,
}

impl App {
    pub fn new() -> Self {
        Self::with_interval(crate::app::playback::DEFAULT_INTERVAL)
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            running: true,
            status_message: String::new(),
            show_help: false,
            last_frame: Instant::now(),
            dataset: None,
            scales: ChartScales::default(),
            scene: Scene::new(),
            playback: Playback::new(interval),
            hovered: None,
            mouse_position: None,
        }
    }

    /// Load and clean the dataset, then render the first frame. A failure
    /// here is fatal to startup.
    pub async fn load_dataset(&mut self) -> Result<()> {
        let path = get_data_path();
        let dataset = load_dataset(&path).await?;
        self.set_dataset(dataset);
        Ok(())
    }

    /// Install a dataset and render its first frame.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.dataset = Some(dataset);
        self.step();
    }

    /// Per-frame bookkeeping: advance tweens and the playback accumulator.
    /// Fires at most one playback step per call.
    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        self.scene.advance(delta);

        let total = self.dataset.as_ref().map_or(0, Dataset::len);
        if let Some(index) = self.playback.tick(delta, total) {
            self.render_frame(index);
        }
    }

    /// Render the current year and move the cursor to the next one.
    pub fn step(&mut self) {
        let total = self.dataset.as_ref().map_or(0, Dataset::len);
        if total == 0 {
            return;
        }
        let index = self.playback.advance(total);
        self.render_frame(index);
    }

    fn render_frame(&mut self, index: usize) {
        let Some(dataset) = self.dataset.as_ref() else {
            return;
        };
        self.scene.apply(dataset.year(index), &self.scales);

        // The hovered country may have left the chart this frame.
        if let Some(key) = self.hovered.as_deref() {
            if self.scene.bubble(key).is_none() {
                self.hovered = None;
            }
        }
    }

    pub fn toggle_playback(&mut self) {
        self.playback.toggle();
    }

    /// Back to year zero and re-render immediately, whatever the play
    /// state is.
    pub fn reset(&mut self) {
        self.playback.reset_index();
        self.step();
    }

    pub fn hovered_bubble(&self) -> Option<&Bubble> {
        self.hovered.as_deref().and_then(|key| self.scene.bubble(key))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::App;
    use crate::data::models::{Country, Dataset, YearRecord};
    use crate::domain::Continent;

    fn two_year_dataset() -> Dataset {
        Dataset::new(vec![
            YearRecord {
                year: 1950,
                countries: vec![Country {
                    country: "A".to_string(),
                    continent: Continent::Asia,
                    income: 1000.0,
                    life_exp: 40.0,
                    population: 1e6,
                }],
            },
            YearRecord {
                year: 1951,
                countries: vec![Country {
                    country: "B".to_string(),
                    continent: Continent::Europe,
                    income: 2000.0,
                    life_exp: 50.0,
                    population: 2e6,
                }],
            },
        ])
    }

    fn scene_keys(app: &App) -> Vec<&str> {
        app.scene.bubbles().iter().map(|b| b.key.as_str()).collect()
    }

    #[test]
    fn two_year_scenario_steps_through_a_b_and_wraps_back_to_a() {
        let mut app = App::new();

        // Installing the dataset renders the first frame.
        app.set_dataset(two_year_dataset());
        assert_eq!(scene_keys(&app), vec!["A"]);
        assert_eq!(app.scene.year(), Some(1950));

        app.step();
        assert_eq!(scene_keys(&app), vec!["B"]);
        assert_eq!(app.scene.year(), Some(1951));

        // Index wraps: A comes back, B leaves.
        app.step();
        assert_eq!(scene_keys(&app), vec!["A"]);
        assert_eq!(app.scene.year(), Some(1950));
    }

    #[test]
    fn reset_renders_year_zero_from_any_index_without_changing_play_state() {
        let mut app = App::new();
        app.set_dataset(two_year_dataset());
        app.step();
        assert_eq!(app.scene.year(), Some(1951));

        app.toggle_playback();
        assert!(app.playback.playing);

        app.reset();
        assert_eq!(app.scene.year(), Some(1950));
        assert!(app.playback.playing);
        // Render-then-advance leaves the cursor on the next year.
        assert_eq!(app.playback.index, 1);

        app.toggle_playback();
        app.reset();
        assert_eq!(app.scene.year(), Some(1950));
        assert!(!app.playback.playing);
    }

    #[test]
    fn update_advances_playback_from_the_elapsed_frame_delta() {
        let mut app = App::with_interval(Duration::from_millis(100));
        app.set_dataset(two_year_dataset());
        assert_eq!(app.scene.year(), Some(1950));
        app.toggle_playback();

        // Pretend the previous frame finished a full interval ago.
        app.last_frame = Instant::now() - Duration::from_millis(150);
        app.update();

        assert_eq!(app.scene.year(), Some(1951));
    }

    #[test]
    fn playback_ticks_drive_frames_through_the_dataset() {
        let mut app = App::with_interval(Duration::from_millis(100));
        app.set_dataset(two_year_dataset());
        app.toggle_playback();

        assert_eq!(app.playback.tick(Duration::from_millis(100), 2), Some(1));
    }

    #[test]
    fn hover_is_cleared_when_the_country_exits() {
        let mut app = App::new();
        app.set_dataset(two_year_dataset());
        app.hovered = Some("A".to_string());
        assert!(app.hovered_bubble().is_some());

        app.step();
        assert_eq!(app.hovered, None);
        assert!(app.hovered_bubble().is_none());
    }

    #[test]
    fn stepping_without_a_dataset_is_a_no_op() {
        let mut app = App::new();
        app.step();
        assert!(app.scene.bubbles().is_empty());
        assert_eq!(app.scene.year(), None);
    }
}
