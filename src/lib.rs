//! orgchart-rs: collapsible organization chart engine.
//!
//! A static organization tree is rendered recursively into a render
//! description, laid out top-down and drawn through a pluggable renderer
//! inside a pan/zoom viewport. All mutable UI state lives in [`OrgChart`].

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{OrgChart, OrgChartConfig};
pub use error::{OrgChartError, OrgChartResult};
