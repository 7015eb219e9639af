pub mod bubbles;
pub mod popup;
