pub mod commands;
pub mod config;
pub mod data_provider;
pub mod fixtures;
pub mod formatting;
pub mod sorting;
pub mod tui;
pub mod types;
