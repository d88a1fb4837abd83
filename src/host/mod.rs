//! Terminal host
//!
//! Draws one component in a character-cell terminal with crossterm. One cell
//! is one unit of the component's metrics.

pub mod app;
pub mod display;
pub mod keys;
pub mod terminal;

pub use app::App;
pub use terminal::Terminal;
