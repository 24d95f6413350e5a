//! Ratatui front-end: the catalog list, the pet editor and the terminal loop
//! that drives them.

mod app;
mod catalog;
mod editor;
mod helpers;
mod terminal;

pub use app::App;
pub use terminal::run_app;
