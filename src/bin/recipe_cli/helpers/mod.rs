// ABOUTME: Helper modules for recipe-cli
// ABOUTME: Proxy API access and terminal output formatting

pub mod api;
pub mod display;
