//! Core types for the quill blog API client.
//!
//! This crate provides the transport-independent pieces:
//! - [`Operation`] and [`PathTemplate`] - static operation contracts
//! - [`Request`] and [`RequestBuilder`] - single-use request descriptors
//! - [`Response`] - response descriptor with lazy body decoding
//! - [`Error`] and [`Result`] - the error taxonomy
//! - [`Patch`] - tri-state fields for partial updates
//! - [`HttpClient`] - the transport seam
//! - [`Form`] and [`Part`] - multipart encoding
//! - [`StatusCode`] and [`header`] - re-exported from the `http` crate

mod body;
mod client;
mod contract;
mod error;
mod method;
mod multipart;
mod patch;
mod path_template;
pub mod prelude;
mod request;
mod response;

pub use body::{ContentType, from_json, to_form, to_json, to_query_string};
pub use client::HttpClient;
pub use contract::Operation;
pub use error::{Error, HttpValidationError, Loc, Result, ValidationError};
pub use method::Method;
pub use multipart::{Form, Part};
pub use patch::Patch;
pub use path_template::PathTemplate;
pub use request::{Request, RequestBuilder};
pub use response::Response;

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};
