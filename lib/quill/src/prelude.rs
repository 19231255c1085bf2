//! Prelude module for convenient imports.
//!
//! ```ignore
//! use quill::prelude::*;
//! ```

pub use crate::{
    AbortHandle, BlogClient, CallOptions, ContentType, CreatePostRequest, DraftsQuery, Error,
    HealthResponse, HttpClient, HyperClient, Method, PaginatedPosts, Patch, Post, PostSummary,
    PostsQuery, Request, Response, Result, StatusCode, UpdatePostRequest, ValidationError, header,
};
pub use serde::{Deserialize, Serialize};
