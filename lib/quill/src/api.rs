//! Blog API client: the per-operation facade and the generic executor.
//!
//! [`BlogClient`] binds the static operation table
//! ([`crate::contracts::ops`]) to a transport. Each facade method fills in
//! its table entry and delegates to [`BlogClient::call`], the one place
//! where requests are constructed: path rendering, query encoding, header
//! merging, credential injection, body serialization, and dispatch with
//! per-call deadline/abort handling.
//!
//! Calls are stateless and independent; issue as many concurrently as you
//! like. The only shared state is the client configuration, which is read
//! (never written) while a request is being built.

use std::sync::{Arc, PoisonError, RwLock};

use quill_core::{ContentType, Error, HttpClient, Operation, Request, Response, Result};
use serde::Serialize;
use url::Url;

use crate::client::{HyperClient, HyperClientBuilder};
use crate::contracts::{CreatePostRequest, DraftsQuery, PostsQuery, UpdatePostRequest, ops};
use crate::options::CallOptions;

/// Typed client for the blog REST API.
///
/// Cheap to clone; clones share the transport's connection pool and the
/// bearer token, so logging in through one clone authenticates them all.
///
/// # Example
///
/// ```ignore
/// use quill::{BlogClient, CallOptions, PostsQuery};
///
/// let client = BlogClient::new("https://blog.example.com")?;
/// let response = client
///     .get_blog_posts(&PostsQuery::default(), CallOptions::new())
///     .await?;
/// let page: quill::PaginatedPosts = response.error_for_status()?.json()?;
/// ```
#[derive(Debug)]
pub struct BlogClient<C = HyperClient> {
    http: C,
    base_url: Url,
    default_headers: Vec<(String, String)>,
    bearer_token: Arc<RwLock<Option<String>>>,
}

impl<C: Clone> Clone for BlogClient<C> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            default_headers: self.default_headers.clone(),
            bearer_token: Arc::clone(&self.bearer_token),
        }
    }
}

impl BlogClient<HyperClient> {
    /// Create a client over a default transport.
    ///
    /// The base URL should be origin-only (operation paths are absolute).
    ///
    /// # Errors
    ///
    /// Returns a contract error if the URL cannot be parsed.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Self::with_http(HyperClient::new(), base_url)
    }

    /// Create a new client builder.
    #[must_use]
    pub fn builder() -> BlogClientBuilder {
        BlogClientBuilder::default()
    }
}

impl<C> BlogClient<C> {
    /// Create a client over a custom transport.
    ///
    /// # Errors
    ///
    /// Returns a contract error if the URL cannot be parsed.
    pub fn with_http(http: C, base_url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            http,
            base_url: Url::parse(base_url.as_ref())?,
            default_headers: Vec::new(),
            bearer_token: Arc::new(RwLock::new(None)),
        })
    }

    /// The base URL all operation paths resolve against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Reference to the underlying transport.
    #[must_use]
    pub fn http(&self) -> &C {
        &self.http
    }

    /// Set the bearer token injected into subsequent requests.
    ///
    /// Calls already in flight may observe either the old or the new token;
    /// the client makes no transactional guarantee about configuration
    /// changes (re-issue a call after login if it must carry the new
    /// credential).
    pub fn set_bearer_token(&self, token: impl Into<String>) {
        *self
            .bearer_token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    /// Stop injecting a bearer token.
    pub fn clear_bearer_token(&self) {
        *self
            .bearer_token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn current_token(&self) -> Option<String> {
        self.bearer_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<C: HttpClient> BlogClient<C> {
    /// Execute one operation from the contract table.
    ///
    /// This is the generic call function behind every facade method; it is
    /// public so operations can be driven directly from a table entry.
    /// Header precedence, lowest to highest: client defaults, contract
    /// headers, the body encoding's `Content-Type`, call-time headers, and
    /// finally the bearer-token injector.
    ///
    /// # Errors
    ///
    /// - [`Error::Contract`] before any I/O when a path parameter is
    ///   missing, the body cannot be serialized, or a body is supplied to
    ///   an operation that declares none.
    /// - [`Error::Timeout`] / [`Error::Cancelled`] when the call's deadline
    ///   or abort handle fires first.
    /// - [`Error::Network`] / [`Error::Tls`] on transport failure.
    ///
    /// A completed exchange is returned as a [`Response`] whatever its
    /// status; use [`Response::error_for_status`] to branch.
    pub async fn call<Q, B>(
        &self,
        op: &Operation,
        path_params: &[(&str, &str)],
        query: Option<&Q>,
        body: Option<&B>,
        options: CallOptions,
    ) -> Result<Response>
    where
        Q: Serialize + Sync,
        B: Serialize + Sync,
    {
        let path = op.path.render(path_params)?;
        let mut url = self.base_url.join(&path)?;

        if let Some(query) = query {
            let encoded = quill_core::to_query_string(query)?;
            if !encoded.is_empty() {
                url.set_query(Some(&encoded));
            }
        }

        let mut builder = Request::builder(op.method, url);
        for (name, value) in &self.default_headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        for (name, value) in op.headers {
            builder = builder.header(*name, *value);
        }

        if let Some(body) = body {
            builder = match op.content_type {
                Some(ContentType::Json) => builder.json(body)?,
                Some(ContentType::FormUrlEncoded) => builder.form(body)?,
                Some(ContentType::OctetStream) | None => {
                    return Err(Error::contract(format!(
                        "operation `{}` declares no serializable request body",
                        op.name
                    )));
                }
            };
        }

        for (name, value) in &options.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        // Credential injector runs last and wins on conflict.
        if let Some(token) = self.current_token() {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }

        let request = builder.build();
        tracing::debug!(operation = op.name, url = %request.url(), "dispatching");

        self.dispatch(request, &options).await
    }

    /// Send a built request, honoring the call's deadline and abort handle.
    async fn dispatch(&self, request: Request, options: &CallOptions) -> Result<Response> {
        let execute = self.http.execute(request);
        let execute = async {
            match options.deadline {
                Some(deadline) => tokio::time::timeout(deadline, execute)
                    .await
                    .map_err(|_| Error::Timeout)?,
                None => execute.await,
            }
        };

        match &options.abort {
            Some(handle) => tokio::select! {
                result = execute => result,
                () = handle.aborted() => Err(Error::Cancelled),
            },
            None => execute.await,
        }
    }

    // ========================================================================
    // Operation facade
    // ========================================================================

    /// Check health of the application. 200 when OK, 500 when not.
    pub async fn check_health(&self, options: CallOptions) -> Result<Response> {
        self.call(&ops::CHECK_HEALTH, &[], None::<&()>, None::<&()>, options)
            .await
    }

    /// Get published posts with pagination and optional search/filtering.
    pub async fn get_blog_posts(
        &self,
        query: &PostsQuery,
        options: CallOptions,
    ) -> Result<Response> {
        self.call(&ops::GET_BLOG_POSTS, &[], Some(query), None::<&()>, options)
            .await
    }

    /// Create a new post.
    pub async fn create_blog_post(
        &self,
        body: &CreatePostRequest,
        options: CallOptions,
    ) -> Result<Response> {
        self.call(&ops::CREATE_BLOG_POST, &[], None::<&()>, Some(body), options)
            .await
    }

    /// Get a single post by slug.
    ///
    /// The backend increments the post's view counter as a side effect. A
    /// nonexistent slug yields a 404 response, signaled by status only.
    pub async fn get_blog_post(&self, slug: &str, options: CallOptions) -> Result<Response> {
        self.call(
            &ops::GET_BLOG_POST,
            &[("slug", slug)],
            None::<&()>,
            None::<&()>,
            options,
        )
        .await
    }

    /// Get all distinct categories from published posts.
    ///
    /// The response shape is not part of the contract; decode as
    /// `serde_json::Value` and validate defensively.
    pub async fn get_categories(&self, options: CallOptions) -> Result<Response> {
        self.call(&ops::GET_CATEGORIES, &[], None::<&()>, None::<&()>, options)
            .await
    }

    /// Get all distinct tags from published posts.
    ///
    /// The response shape is not part of the contract; decode as
    /// `serde_json::Value` and validate defensively.
    pub async fn get_tags(&self, options: CallOptions) -> Result<Response> {
        self.call(&ops::GET_TAGS, &[], None::<&()>, None::<&()>, options)
            .await
    }

    /// Partially update an existing post.
    ///
    /// Body fields use [`quill_core::Patch`] semantics: omitted fields stay
    /// unchanged, explicit nulls clear.
    pub async fn update_blog_post(
        &self,
        post_id: u64,
        body: &UpdatePostRequest,
        options: CallOptions,
    ) -> Result<Response> {
        let post_id = post_id.to_string();
        self.call(
            &ops::UPDATE_BLOG_POST,
            &[("post_id", post_id.as_str())],
            None::<&()>,
            Some(body),
            options,
        )
        .await
    }

    /// Delete a post.
    pub async fn delete_blog_post(&self, post_id: u64, options: CallOptions) -> Result<Response> {
        let post_id = post_id.to_string();
        self.call(
            &ops::DELETE_BLOG_POST,
            &[("post_id", post_id.as_str())],
            None::<&()>,
            None::<&()>,
            options,
        )
        .await
    }

    /// Get the caller's draft posts. Requires an authenticated caller.
    pub async fn get_draft_posts(
        &self,
        query: &DraftsQuery,
        options: CallOptions,
    ) -> Result<Response> {
        self.call(&ops::GET_DRAFT_POSTS, &[], Some(query), None::<&()>, options)
            .await
    }
}

/// Builder for [`BlogClient`].
///
/// # Example
///
/// ```ignore
/// let client = BlogClient::builder()
///     .base_url("https://blog.example.com")
///     .default_header("X-Client", "quill/0.1")
///     .configure_http(|http| http.with_logging())
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct BlogClientBuilder {
    base_url: Option<String>,
    default_headers: Vec<(String, String)>,
    http: Option<HyperClient>,
    http_builder: HyperClientBuilder,
}

impl BlogClientBuilder {
    /// Set the base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Add a header sent with every request. Contract and call-time headers
    /// win over it on name conflicts.
    #[must_use]
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Use a pre-built transport.
    ///
    /// Note: this replaces anything configured via [`Self::configure_http`].
    #[must_use]
    pub fn http(mut self, client: HyperClient) -> Self {
        self.http = Some(client);
        self
    }

    /// Configure the underlying transport builder.
    #[must_use]
    pub fn configure_http<F>(mut self, f: F) -> Self
    where
        F: FnOnce(HyperClientBuilder) -> HyperClientBuilder,
    {
        self.http_builder = f(self.http_builder);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns a contract error if the base URL is missing or unparsable.
    pub fn build(self) -> Result<BlogClient<HyperClient>> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::contract("base URL is required"))?;
        let http = self.http.unwrap_or_else(|| self.http_builder.build());

        let mut client = BlogClient::with_http(http, base_url)?;
        client.default_headers = self.default_headers;
        Ok(client)
    }
}
