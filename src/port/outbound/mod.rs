//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod renderer;
pub mod source;
