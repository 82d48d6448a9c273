//! CLI module graph.

pub mod command;
pub mod config;
pub mod evaluate;
pub mod generate;
pub mod output;
pub mod paths;
pub mod run;
pub mod summary;
