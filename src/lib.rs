pub mod args;
pub mod config;
pub mod fact;
pub mod logging;
pub mod ui;
