pub mod app;
pub mod backdrop;
pub mod calendar_grid;
pub mod confetti_canvas;
pub mod day_box;
pub mod reindeer_herds;
pub mod santa;
pub mod video_modal;

pub use app::{App, AppProps};
