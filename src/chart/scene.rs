use std::collections::HashSet;
use std::time::Duration;

use ratatui::style::Color;

use crate::chart::scale::{continent_color, ChartScales};
use crate::data::models::YearRecord;
use crate::domain::Continent;

/// How long position and radius changes take to play out. Entering
/// bubbles skip this and appear at their final position.
pub const TRANSITION: Duration = Duration::from_millis(100);

/// One rendered country. Identity is the country name; `id` is assigned
/// when the bubble enters the scene and survives updates, so a re-created
/// bubble is distinguishable from an updated one.
#[derive(Debug, Clone)]
pub struct Bubble {
    pub id: u64,
    pub key: String,
    pub continent: Continent,
    pub color: Color,
    pub income: f64,
    pub life_exp: f64,
    pub population: f64,
    from: (f64, f64, f64),
    to: (f64, f64, f64),
    progress: f64,
}

impl Bubble {
    pub fn x(&self) -> f64 {
        lerp(self.from.0, self.to.0, self.progress)
    }

    /// Vertical position measured from the top of the chart.
    pub fn y(&self) -> f64 {
        lerp(self.from.1, self.to.1, self.progress)
    }

    pub fn radius(&self) -> f64 {
        lerp(self.from.2, self.to.2, self.progress)
    }

    fn retarget(&mut self, target: (f64, f64, f64)) {
        self.from = (self.x(), self.y(), self.radius());
        self.to = target;
        self.progress = 0.0;
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// The set of bubbles currently on screen, reconciled against one year's
/// records at a time.
#[derive(Debug, Default)]
pub struct Scene {
    bubbles: Vec<Bubble>,
    year: Option<i32>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub const fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn bubble(&self, key: &str) -> Option<&Bubble> {
        self.bubbles.iter().find(|bubble| bubble.key == key)
    }

    /// Reconcile the scene against one year record, keyed by country name.
    ///
    /// Exit is immediate, enter appears at its final position, update
    /// restarts the tween from the current position. A duplicate key in
    /// the record leaves one bubble, last occurrence wins.
    pub fn apply(&mut self, record: &YearRecord, scales: &ChartScales) {
        let keys: HashSet<&str> = record
            .countries
            .iter()
            .map(|country| country.country.as_str())
            .collect();

        // EXIT: no animation, gone this frame.
        self.bubbles.retain(|bubble| keys.contains(bubble.key.as_str()));

        for country in &record.countries {
            let target = (
                scales.x(country.income).round(),
                scales.y(country.life_exp).round(),
                scales.radius(country.population).round(),
            );

            if let Some(bubble) = self
                .bubbles
                .iter_mut()
                .find(|bubble| bubble.key == country.country)
            {
                // UPDATE
                bubble.retarget(target);
                bubble.income = country.income;
                bubble.life_exp = country.life_exp;
                bubble.population = country.population;
            } else {
                // ENTER
                self.bubbles.push(Bubble {
                    id: self.next_id,
                    key: country.country.clone(),
                    continent: country.continent,
                    color: continent_color(country.continent),
                    income: country.income,
                    life_exp: country.life_exp,
                    population: country.population,
                    from: target,
                    to: target,
                    progress: 1.0,
                });
                self.next_id += 1;
            }
        }

        self.year = Some(record.year);
    }

    /// Progress all running tweens by the frame delta.
    pub fn advance(&mut self, delta: Duration) {
        let step = delta.as_secs_f64() / TRANSITION.as_secs_f64();
        for bubble in &mut self.bubbles {
            bubble.progress = (bubble.progress + step).min(1.0);
        }
    }

    /// Find the topmost bubble covering a chart-space point. `min_rx` and
    /// `min_ry` widen tiny bubbles to at least one terminal cell so they
    /// stay hoverable.
    pub fn hit_test(&self, x: f64, y: f64, min_rx: f64, min_ry: f64) -> Option<&Bubble> {
        self.bubbles.iter().rev().find(|bubble| {
            let rx = bubble.radius().max(min_rx);
            let ry = bubble.radius().max(min_ry);
            let dx = (x - bubble.x()) / rx;
            let dy = (y - bubble.y()) / ry;
            dx.mul_add(dx, dy * dy) <= 1.0
        })
    }
}
