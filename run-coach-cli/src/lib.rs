// Library exports for the run-coach CLI
// This allows testing of internal modules

pub mod commands;
pub mod config;
pub mod ui;
