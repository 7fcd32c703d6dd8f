// ABOUTME: Command implementations for recipe-cli
// ABOUTME: Each submodule handles one group of subcommands

pub mod recipes;
