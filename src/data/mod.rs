pub mod loader;
pub mod models;

pub use loader::{load_dataset, parse_dataset, LoadError};
pub use models::{Country, Dataset, YearRecord};
