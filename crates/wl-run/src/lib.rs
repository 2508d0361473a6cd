//! wl-run - Selective workflow invocation planning and monitoring
//!
//! Builds selective-execution requests whose target/tag semantics match the
//! remote service's filtering contract, submits them, and polls the
//! resulting invocation to a terminal state.

pub mod error;
pub mod monitor;
pub mod planner;

pub use error::{RunError, RunResult};
pub use monitor::InvocationMonitor;
pub use planner::plan;
