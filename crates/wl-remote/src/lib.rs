//! wl-remote - Remote service boundary for Warpline
//!
//! This crate defines the `RemoteService` trait consumed by the catalog and
//! run layers, the summary/invocation types exchanged across it, an HTTP
//! implementation, and an in-memory fake for tests and local development.

pub mod error;
pub mod http;
pub mod memory;
pub mod traits;
pub mod types;

pub use error::{RemoteError, RemoteResult};
pub use http::HttpService;
pub use memory::InMemoryService;
pub use traits::RemoteService;
pub use types::{CompilationConfig, CompilationSummary, InvocationAction, WorkflowInvocation};
