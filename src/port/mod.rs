//! Trait definitions (hexagonal ports).
//!
//! Ports are the seams between the simulation and the outside world: where
//! matches come from and how charts are drawn.
//!
//! ```text
//!        ┌──────────────┐      ┌──────────────┐      ┌──────────────┐
//!        │ MatchSource  │ ───▶ │  Simulation  │ ───▶ │ChartRenderer │
//!        │ (generated,  │      │ (evaluate +  │      │ (terminal,   │
//!        │  json file)  │      │  animate)    │      │  headless)   │
//!        └──────────────┘      └──────────────┘      └──────────────┘
//! ```

pub mod outbound;

pub use outbound::renderer::{ChartFrame, ChartRenderer, ChartView, ViewControl};
pub use outbound::source::MatchSource;
