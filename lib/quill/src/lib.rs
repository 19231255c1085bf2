//! Typed async client for the quill blog REST API.
//!
//! The client is three layers:
//! - [`contracts`] - a static table of operation contracts plus the wire
//!   shapes they exchange
//! - [`BlogClient`] - one facade method per operation over a generic call
//!   function that owns all request construction
//! - [`HyperClient`] - the hyper-based transport with Tower middleware
//!
//! # Example
//!
//! ```ignore
//! use quill::{BlogClient, CallOptions, PaginatedPosts, PostsQuery};
//!
//! let client = BlogClient::builder()
//!     .base_url("https://blog.example.com")
//!     .configure_http(|http| http.with_logging())
//!     .build()?;
//!
//! let response = client
//!     .get_blog_posts(&PostsQuery { page: Some(1), ..PostsQuery::default() }, CallOptions::new())
//!     .await?;
//! let page: PaginatedPosts = response.error_for_status()?.json()?;
//! ```

mod api;
mod client;
mod config;
mod connector;
pub mod contracts;
pub mod middleware;
mod options;
pub mod prelude;

// Re-export client types
pub use api::{BlogClient, BlogClientBuilder};
pub use client::{HyperClient, HyperClientBuilder, ServiceFuture};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use options::{AbortHandle, CallOptions};

// Re-export the contract types at the crate root
pub use contracts::{
    CreatePostRequest, DraftsQuery, HealthResponse, PaginatedPosts, Post, PostSummary, PostsQuery,
    UpdatePostRequest,
};

// Re-export tower for middleware composition
pub use tower;

// Re-export core types
pub use quill_core::{
    ContentType, Error, Form, HttpClient, Loc, Method, Operation, Part, Patch, PathTemplate,
    Request, RequestBuilder, Response, Result, ValidationError, from_json, to_form, to_json,
    to_query_string,
};

// Re-export http types for status codes and headers
pub use quill_core::{StatusCode, header};
