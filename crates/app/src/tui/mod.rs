//! Terminal UI: directory grid and per-contact thread view

mod app;
mod compose;
mod directory;
mod theme;
mod thread;
mod ui;

pub use app::run;
