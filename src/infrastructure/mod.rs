//! Infrastructure layer.
//!
//! Technical concerns that support the application without containing
//! simulation logic.
//!
//! - [`config`] - Configuration loading, validation and logging setup

pub mod config;
