//! Outbound adapters (driven side).

pub mod generated;
pub mod match_file;
pub mod render;

pub use generated::GeneratedMatches;
pub use match_file::JsonMatchFile;
