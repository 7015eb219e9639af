// App module for gapminder-tui
// Holds application state, playback control and input handling

pub mod input;
pub mod playback;
pub mod state;

pub use input::{handle_key, handle_mouse};
pub use playback::Playback;
pub use state::App;
