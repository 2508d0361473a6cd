//! CLI command implementations

pub mod catalog;
pub mod compile;
pub mod invocations;
pub mod run;
pub mod status;
