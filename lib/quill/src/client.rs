//! HTTP transport implementation using hyper-util.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::time::Duration;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_rustls::HttpsConnector;
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use tower::Layer;
use tower::util::BoxCloneService;
use tower_service::Service;

use crate::{
    Error, Request, Response, Result,
    config::{ClientConfig, ClientConfigBuilder},
    connector::https_connector,
    middleware::LoggingLayer,
};

// ============================================================================
// Type-Erased Service for Middleware Composition
// ============================================================================

/// Type-erased service for middleware composition.
pub type BoxedService = BoxCloneService<Request, Response, Error>;

/// Future type for Tower Service implementations.
pub type ServiceFuture = Pin<Box<dyn Future<Output = Result<Response>> + Send + 'static>>;

/// Thread-safe wrapper for [`BoxedService`].
///
/// The Mutex makes the service Sync, which [`quill_core::HttpClient`]
/// requires; it is held only long enough to clone the service.
#[derive(Clone)]
struct SyncService {
    inner: Arc<Mutex<BoxedService>>,
}

impl SyncService {
    fn new(service: BoxedService) -> Self {
        Self {
            inner: Arc::new(Mutex::new(service)),
        }
    }

    fn call(&self, request: Request) -> ServiceFuture {
        // Lock, clone the service, and release the lock immediately
        let mut service = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone();

        Box::pin(async move { service.call(request).await })
    }
}

// ============================================================================
// Raw Client (internal, used for direct hyper access)
// ============================================================================

/// Raw HTTP transport using hyper-util (internal implementation).
#[derive(Clone)]
struct RawHyperClient {
    inner: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
}

impl RawHyperClient {
    fn new(config: &ClientConfig) -> Self {
        let connector = https_connector(config.connect_timeout);

        let inner = Client::builder(TokioExecutor::new())
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_idle_per_host)
            .build(connector);

        Self { inner }
    }

    /// Build a hyper request from a quill request descriptor.
    fn build_hyper_request(request: Request) -> Result<http::Request<Full<Bytes>>> {
        let (method, url, headers, body) = request.into_parts();

        let mut builder = http::Request::builder()
            .method(http::Method::from(method))
            .uri(url.as_str());

        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let body = body.map_or_else(Full::default, Full::new);
        builder
            .body(body)
            .map_err(|e| Error::contract(e.to_string()))
    }

    /// Extract response headers as a `HashMap`.
    fn extract_headers(headers: &http::HeaderMap) -> HashMap<String, String> {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    async fn execute(&self, request: Request) -> Result<Response> {
        let hyper_request = Self::build_hyper_request(request)?;

        let response = self
            .inner
            .request(hyper_request)
            .await
            .map_err(Self::map_hyper_error)?;

        let status = response.status().as_u16();
        let response_headers = Self::extract_headers(response.headers());

        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| Error::network(e.to_string()))?
            .to_bytes();

        Ok(Response::new(status, response_headers, body))
    }

    #[allow(clippy::needless_pass_by_value)]
    fn map_hyper_error(err: hyper_util::client::legacy::Error) -> Error {
        let msg = err.to_string();

        if msg.contains("ssl") || msg.contains("tls") || msg.contains("certificate") {
            return Error::tls(msg);
        }

        Error::network(msg)
    }
}

impl Service<Request> for RawHyperClient {
    type Response = Response;
    type Error = Error;
    type Future = ServiceFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let client = self.clone();
        Box::pin(async move { client.execute(request).await })
    }
}

// ============================================================================
// Public Client
// ============================================================================

/// HTTP transport using hyper-util with connection pooling, TLS, and Tower
/// middleware support.
///
/// Imposes no request deadline of its own and performs no retries; both are
/// the caller's to supply (deadlines per call, retries by re-invoking).
///
/// # Example
///
/// ```ignore
/// use quill::HyperClient;
///
/// let client = HyperClient::builder()
///     .pool_idle_per_host(16)
///     .with_logging()
///     .build();
/// ```
#[derive(Clone)]
pub struct HyperClient {
    service: SyncService,
    config: ClientConfig,
}

impl std::fmt::Debug for HyperClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HyperClient {
    /// Create a new client with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration (no middleware).
    #[must_use]
    pub fn with_config(config: ClientConfig) -> Self {
        let raw = RawHyperClient::new(&config);
        Self {
            service: SyncService::new(BoxCloneService::new(raw)),
            config,
        }
    }

    /// Create a client with a pre-composed service (used by the builder).
    fn with_service(service: BoxedService, config: ClientConfig) -> Self {
        Self {
            service: SyncService::new(service),
            config,
        }
    }

    /// Create a new client builder.
    #[must_use]
    pub fn builder() -> HyperClientBuilder {
        HyperClientBuilder::default()
    }

    /// Get the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl Default for HyperClient {
    fn default() -> Self {
        Self::new()
    }
}

impl quill_core::HttpClient for HyperClient {
    async fn execute(&self, request: Request) -> Result<Response> {
        self.service.call(request).await
    }
}

impl Service<Request> for HyperClient {
    type Response = Response;
    type Error = Error;
    type Future = ServiceFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<()>> {
        // SyncService is always ready (the underlying service is polled when called)
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request) -> Self::Future {
        self.service.call(request)
    }
}

/// Builder for [`HyperClient`].
///
/// # Example
///
/// ```ignore
/// use quill::HyperClient;
/// use std::time::Duration;
///
/// let client = HyperClient::builder()
///     .connect_timeout(Duration::from_secs(5))
///     .with_logging()
///     .build();
/// ```
#[derive(Default)]
pub struct HyperClientBuilder {
    config: ClientConfigBuilder,
    layers: Vec<Arc<dyn Fn(BoxedService) -> BoxedService + Send + Sync>>,
}

impl std::fmt::Debug for HyperClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperClientBuilder")
            .field("config", &self.config)
            .field("layers_count", &self.layers.len())
            .finish()
    }
}

impl HyperClientBuilder {
    /// Set the connection establishment timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.connect_timeout(timeout);
        self
    }

    /// Set the maximum idle connections per host.
    #[must_use]
    pub fn pool_idle_per_host(mut self, count: usize) -> Self {
        self.config = self.config.pool_idle_per_host(count);
        self
    }

    /// Set the idle connection timeout.
    #[must_use]
    pub fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.pool_idle_timeout(timeout);
        self
    }

    /// Add a Tower layer to the client.
    ///
    /// Layers are applied in order: first added = outermost (processes
    /// requests first).
    #[must_use]
    pub fn layer<L>(mut self, layer: L) -> Self
    where
        L: Layer<BoxedService> + Send + Sync + 'static,
        L::Service: Service<Request, Response = Response, Error = Error> + Clone + Send + 'static,
        <L::Service as Service<Request>>::Future: Send,
    {
        self.layers.push(Arc::new(move |service| {
            BoxCloneService::new(layer.layer(service))
        }));
        self
    }

    /// Add request/response logging via `tracing`.
    #[must_use]
    pub fn with_logging(self) -> Self {
        self.layer(LoggingLayer::new())
    }

    /// Add debug-level logging (includes headers and more detail).
    #[must_use]
    pub fn with_debug_logging(self) -> Self {
        self.layer(LoggingLayer::debug())
    }

    /// Build the client with all configured middleware.
    #[must_use]
    pub fn build(self) -> HyperClient {
        let config = self.config.build();
        let raw = RawHyperClient::new(&config);

        let mut service: BoxedService = BoxCloneService::new(raw);

        // Apply user layers in order (first added = outermost)
        for layer_fn in self.layers {
            service = layer_fn(service);
        }

        HyperClient::with_service(service, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_default() {
        let client = HyperClient::new();
        assert_eq!(
            client.config().connect_timeout,
            std::time::Duration::from_secs(10)
        );
    }

    #[test]
    fn client_builder() {
        let client = HyperClient::builder()
            .connect_timeout(std::time::Duration::from_secs(60))
            .pool_idle_per_host(16)
            .build();

        assert_eq!(
            client.config().connect_timeout,
            std::time::Duration::from_secs(60)
        );
        assert_eq!(client.config().pool_idle_per_host, 16);
    }

    #[test]
    fn client_is_clone_and_debug() {
        let client = HyperClient::new();
        let _cloned = client.clone();
        let debug = format!("{client:?}");
        assert!(debug.contains("HyperClient"));
    }
}
