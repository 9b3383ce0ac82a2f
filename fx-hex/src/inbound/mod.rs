//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the application layer.

pub(crate) mod handlers;
mod page;
mod server;

pub use handlers::{AppState, UPSTREAM_FAILURE_MESSAGE};
pub use page::IndexPage;
pub use server::HttpServer;
