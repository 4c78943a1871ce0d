//! Host-side hooks into the chart.
//!
//! Extensions observe chart events; they never reach into chart state.

pub mod plugins;

pub use plugins::{OrgChartEvent, OrgChartPlugin, PluginContext};
