// Library surface for the binary, headless integration tests and reuse.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod keymap;
pub mod logging;
pub mod runtime;
pub mod sample;
pub mod session;
pub mod terminal;
pub mod tracker;
pub mod typing_policy;
pub mod ui;
pub mod util;
