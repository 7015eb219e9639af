use ratatui::style::Color;

use crate::domain::Continent;

/// Default chart geometry, in chart units. Matches the proportions the
/// dataset was tuned for; the canvas maps these onto whatever terminal
/// area is available.
pub const CHART_WIDTH: f64 = 490.0;
pub const CHART_HEIGHT: f64 = 240.0;

/// Linear interpolation from a fixed domain onto a fixed range. Values
/// outside the domain extrapolate, they are never clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// Logarithmic interpolation; the domain must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogScale {
    domain: (f64, f64),
    range: (f64, f64),
    base: f64,
}

impl LogScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64), base: f64) -> Self {
        Self { domain, range, base }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let log = |v: f64| v.log(self.base);
        r0 + (log(value) - log(d0)) / (log(d1) - log(d0)) * (r1 - r0)
    }
}

/// The four mappings the frame renderer needs, configured once at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScales {
    income_x: LogScale,
    life_exp_y: LinearScale,
    population_radius: LinearScale,
    height: f64,
    width: f64,
}

impl ChartScales {
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            income_x: LogScale::new((200.0, 100_000.0), (1.0, width), 10.0),
            life_exp_y: LinearScale::new((0.0, 90.0), (0.0, height)),
            population_radius: LinearScale::new((0.0, 5e8), (3.0, 20.0)),
            height,
            width,
        }
    }

    pub const fn width(&self) -> f64 {
        self.width
    }

    pub const fn height(&self) -> f64 {
        self.height
    }

    pub fn x(&self, income: f64) -> f64 {
        self.income_x.map(income)
    }

    /// Vertical position measured from the top of the chart, so larger
    /// life expectancy sits higher.
    pub fn y(&self, life_exp: f64) -> f64 {
        self.height - self.life_exp_y.map(life_exp)
    }

    pub fn radius(&self, population: f64) -> f64 {
        self.population_radius.map(population)
    }
}

impl Default for ChartScales {
    fn default() -> Self {
        Self::new(CHART_WIDTH, CHART_HEIGHT)
    }
}

pub const fn continent_color(continent: Continent) -> Color {
    match continent {
        Continent::Africa => Color::Rgb(0, 0, 255),
        Continent::Americas => Color::Rgb(173, 216, 230),
        Continent::Asia => Color::Rgb(221, 119, 51),
        Continent::Europe => Color::Rgb(255, 204, 170),
    }
}

#[cfg(test)]
mod tests {
    use super::{continent_color, ChartScales, LinearScale, LogScale, CHART_HEIGHT, CHART_WIDTH};
    use crate::domain::Continent;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(diff < 1e-9, "expected {expected}, got {actual}, diff {diff}");
    }

    #[test]
    fn income_scale_hits_both_range_endpoints() {
        let scales = ChartScales::default();
        assert_close(scales.x(200.0), 1.0);
        assert_close(scales.x(100_000.0), CHART_WIDTH);
    }

    #[test]
    fn income_scale_is_logarithmic_in_between() {
        let scales = ChartScales::default();
        // Geometric midpoint of the domain lands on the arithmetic
        // midpoint of the range.
        let midpoint = (200.0_f64 * 100_000.0).sqrt();
        assert_close(scales.x(midpoint), (1.0 + CHART_WIDTH) / 2.0);
    }

    #[test]
    fn income_scale_extrapolates_below_the_domain() {
        let scales = ChartScales::default();
        assert!(scales.x(100.0) < 1.0);
    }

    #[test]
    fn life_exp_scale_spans_the_chart_height() {
        let scale = LinearScale::new((0.0, 90.0), (0.0, CHART_HEIGHT));
        assert_close(scale.map(0.0), 0.0);
        assert_close(scale.map(90.0), CHART_HEIGHT);

        // Larger life expectancy renders higher (closer to the top).
        let scales = ChartScales::default();
        assert!(scales.y(90.0) < scales.y(0.0));
        assert_close(scales.y(90.0), 0.0);
        assert_close(scales.y(0.0), CHART_HEIGHT);
    }

    #[test]
    fn population_scale_maps_onto_the_radius_range() {
        let scales = ChartScales::default();
        assert_close(scales.radius(0.0), 3.0);
        assert_close(scales.radius(5e8), 20.0);
        assert_close(scales.radius(2.5e8), 11.5);
    }

    #[test]
    fn log_scale_respects_its_base() {
        let scale = LogScale::new((1.0, 100.0), (0.0, 2.0), 10.0);
        assert_close(scale.map(10.0), 1.0);
    }

    #[test]
    fn each_continent_has_a_distinct_color() {
        let colors: Vec<_> = Continent::ALL.iter().map(|c| continent_color(*c)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
