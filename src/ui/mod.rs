//! Presentation layer: a ratatui terminal UI and a line-oriented headless
//! driver. Both only submit commands to the engine and display its events.

mod app;
mod game_view;
pub mod headless;

pub use app::App;
pub use game_view::token_style;
