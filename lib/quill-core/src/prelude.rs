//! Prelude module for convenient imports.
//!
//! ```ignore
//! use quill_core::prelude::*;
//! ```

pub use crate::{
    ContentType, Error, Form, HttpClient, Method, Operation, Part, Patch, PathTemplate, Request,
    RequestBuilder, Response, Result, ValidationError, from_json, to_form, to_json,
    to_query_string,
};
