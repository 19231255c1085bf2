//! Tower middleware layers for the quill HTTP transport.
//!
//! Layers compose over the transport via [`crate::HyperClientBuilder::layer`];
//! the first layer added is the outermost (processes requests first).
//!
//! The client deliberately ships no retry, caching, or rate-limiting
//! middleware: those policies belong to calling layers. Anything with a
//! compatible Tower `Layer` implementation can still be plugged in through
//! the generic `layer()` seam.

mod logging;

pub use logging::{LogLevel, Logging, LoggingLayer};

// Re-export tower types for middleware composition
pub use tower::{Layer, ServiceBuilder};
