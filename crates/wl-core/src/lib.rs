//! wl-core - Core library for Warpline
//!
//! This crate provides the shared value types used across all Warpline
//! components: remote object identity, compiled actions, the asset/check
//! records handed to the orchestration host, workflow selection semantics,
//! and project configuration parsing.

pub mod action;
pub mod asset;
pub mod config;
pub mod error;
pub mod invocation;
pub mod target;

pub use action::{AssertionAction, CompilationAction, RelationAction};
pub use asset::{AssetSpec, CheckSpec};
pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use invocation::{InvocationRequest, InvocationSelection, InvocationState};
pub use target::Target;
