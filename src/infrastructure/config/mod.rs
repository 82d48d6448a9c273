//! Infrastructure configuration modules.

pub mod logging;
pub mod render;
pub mod settings;
pub mod simulation;
