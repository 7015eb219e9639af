// Chart core: scale mappings and the keyed bubble scene.

pub mod scale;
pub mod scene;

pub use scale::{continent_color, ChartScales, CHART_HEIGHT, CHART_WIDTH};
pub use scene::{Bubble, Scene, TRANSITION};
