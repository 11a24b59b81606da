//
//  foxnose-sdk
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport
//!
//! [`HttpTransport`] turns a logical [`Request`] into one or more physical
//! attempts and returns a single structured outcome.
//!
//! ## Features
//!
//! - Blocking ([`HttpTransport::request`]) and async
//!   ([`HttpTransport::request_async`]) execution paths on one instance
//! - Default headers merged with per-request overrides (case-insensitive)
//! - Authentication header computed for every attempt
//! - Retry with exponential backoff and `Retry-After` support
//! - Body negotiation into JSON, text, empty or raw
//!
//! Both paths drive the same decision step. They differ only in how one
//! attempt is sent and how the delay between attempts is waited out.
//!
//! ## Client ownership
//!
//! Network clients passed to the [`TransportBuilder`] belong to the caller and
//! are never closed by the transport. When none is passed, the transport
//! creates its own on first use of that path, and [`HttpTransport::close`] /
//! [`HttpTransport::aclose`] release them. A `reqwest::blocking::Client` must
//! not be created or dropped inside an async runtime, so the blocking client
//! is only built when the blocking path is actually used.
//!
//! ## Example
//!
//! ```rust,no_run
//! use foxnose_sdk::api::{HttpTransport, Request};
//! use foxnose_sdk::auth::SimpleKeyAuth;
//! use foxnose_sdk::config::FoxnoseConfig;
//!
//! let transport = HttpTransport::new(
//!     FoxnoseConfig::new("https://api.foxnose.net"),
//!     SimpleKeyAuth::new("public", "secret"),
//! )?;
//!
//! let body = transport.request(&Request::get("/organizations/"))?;
//! println!("{:?}", body.as_json());
//! transport.close();
//! # Ok::<(), foxnose_sdk::FoxnoseError>(())
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use url::Url;

use crate::api::sender::{AsyncSender, BlockingSender, PreparedRequest};
use crate::api::{Outcome, RawResponse, Request, ResponseBody, RetryPolicy};
use crate::auth::{AuthRequest, AuthStrategy};
use crate::config::{FoxnoseConfig, RetryConfig};
use crate::error::{FoxnoseError, Result, TransportError};

const BLOCKING: &str = "blocking";
const ASYNC: &str = "async";

/// What the shared decision step tells a loop to do next.
enum Step {
    Retry(Duration),
    Finish(Result<ResponseBody>),
}

enum SlotState<S: ?Sized> {
    Pending,
    Ready(Arc<S>),
    Closed,
}

/// One execution path's network handle plus its ownership flag.
struct Slot<S: ?Sized> {
    state: Mutex<SlotState<S>>,
    owned: bool,
}

impl<S: ?Sized> Slot<S> {
    fn owned() -> Self {
        Self {
            state: Mutex::new(SlotState::Pending),
            owned: true,
        }
    }

    fn with_sender(sender: Arc<S>, owned: bool) -> Self {
        Self {
            state: Mutex::new(SlotState::Ready(sender)),
            owned,
        }
    }

    fn lock(&self) -> MutexGuard<'_, SlotState<S>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn get_or_init(
        &self,
        path: &'static str,
        init: impl FnOnce() -> Result<Arc<S>>,
    ) -> Result<Arc<S>> {
        let mut state = self.lock();
        match &*state {
            SlotState::Ready(sender) => Ok(Arc::clone(sender)),
            SlotState::Closed => Err(FoxnoseError::Closed { path }),
            SlotState::Pending => {
                let sender = init()?;
                *state = SlotState::Ready(Arc::clone(&sender));
                Ok(sender)
            }
        }
    }

    /// Marks an owned slot closed and hands back the sender to release.
    /// Supplied senders are left untouched.
    fn shut(&self) -> Option<Arc<S>> {
        if !self.owned {
            return None;
        }
        match std::mem::replace(&mut *self.lock(), SlotState::Closed) {
            SlotState::Ready(sender) => Some(sender),
            SlotState::Pending | SlotState::Closed => None,
        }
    }
}

/// Builder for [`HttpTransport`].
///
/// ```rust,no_run
/// use foxnose_sdk::api::HttpTransport;
/// use foxnose_sdk::auth::BearerTokenAuth;
/// use foxnose_sdk::config::{FoxnoseConfig, RetryConfig};
///
/// let transport = HttpTransport::builder(FoxnoseConfig::new("https://api.foxnose.net"))
///     .auth(BearerTokenAuth::new("token"))
///     .retry(RetryConfig::disabled())
///     .async_client(reqwest::Client::new())
///     .build()?;
/// assert!(!transport.owns_async_client());
/// # Ok::<(), foxnose_sdk::FoxnoseError>(())
/// ```
pub struct TransportBuilder {
    config: FoxnoseConfig,
    auth: Option<Arc<dyn AuthStrategy>>,
    retry: Option<RetryConfig>,
    blocking: Option<(Arc<dyn BlockingSender>, bool)>,
    asynchronous: Option<(Arc<dyn AsyncSender>, bool)>,
}

impl TransportBuilder {
    fn new(config: FoxnoseConfig) -> Self {
        Self {
            config,
            auth: None,
            retry: None,
            blocking: None,
            asynchronous: None,
        }
    }

    /// Sets the authentication strategy.
    pub fn auth(self, auth: impl AuthStrategy + 'static) -> Self {
        self.shared_auth(Arc::new(auth))
    }

    /// Sets an authentication strategy shared with other transports.
    pub fn shared_auth(mut self, auth: Arc<dyn AuthStrategy>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Overrides the retry settings from the configuration.
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Uses a caller-owned blocking client. It is never closed by the transport.
    pub fn blocking_client(self, client: reqwest::blocking::Client) -> Self {
        self.blocking_sender(Arc::new(client))
    }

    /// Uses a caller-owned async client. It is never closed by the transport.
    pub fn async_client(self, client: reqwest::Client) -> Self {
        self.async_sender(Arc::new(client))
    }

    /// Uses a custom blocking sender. It is never closed by the transport.
    pub fn blocking_sender(mut self, sender: Arc<dyn BlockingSender>) -> Self {
        self.blocking = Some((sender, false));
        self
    }

    /// Uses a custom async sender. It is never closed by the transport.
    pub fn async_sender(mut self, sender: Arc<dyn AsyncSender>) -> Self {
        self.asynchronous = Some((sender, false));
        self
    }

    #[cfg(test)]
    pub(crate) fn owned_blocking_sender(mut self, sender: Arc<dyn BlockingSender>) -> Self {
        self.blocking = Some((sender, true));
        self
    }

    #[cfg(test)]
    pub(crate) fn owned_async_sender(mut self, sender: Arc<dyn AsyncSender>) -> Self {
        self.asynchronous = Some((sender, true));
        self
    }

    /// Validates the configuration and builds the transport.
    ///
    /// # Errors
    ///
    /// Returns [`FoxnoseError::Config`] when the base URL is not an absolute
    /// `http`/`https` URL, the timeout fails
    /// [`FoxnoseConfig::validate_timeout`], a default header is invalid, or
    /// the retry settings fail [`RetryConfig::validate`].
    pub fn build(self) -> Result<HttpTransport> {
        let base = Url::parse(self.config.base_url.trim()).map_err(|e| {
            FoxnoseError::Config(format!("invalid base URL {:?}: {}", self.config.base_url, e))
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(FoxnoseError::Config(format!(
                "base URL must use http or https, got {:?}",
                self.config.base_url
            )));
        }

        self.config.validate_timeout()?;
        let retry = self.retry.unwrap_or_else(|| self.config.retry.clone());
        retry.validate()?;

        let mut default_headers = HeaderMap::new();
        for (name, value) in &self.config.default_headers {
            insert_header(&mut default_headers, name, value)?;
        }

        let blocking = match self.blocking {
            Some((sender, owned)) => Slot::with_sender(sender, owned),
            None => Slot::owned(),
        };
        let asynchronous = match self.asynchronous {
            Some((sender, owned)) => Slot::with_sender(sender, owned),
            None => Slot::owned(),
        };

        Ok(HttpTransport {
            base_url: self.config.base_url.trim().trim_end_matches('/').to_string(),
            default_headers,
            config: self.config,
            auth: self.auth,
            policy: RetryPolicy::new(retry),
            blocking,
            asynchronous,
        })
    }
}

/// Retrying HTTP transport shared by every resource client.
pub struct HttpTransport {
    base_url: String,
    default_headers: HeaderMap,
    config: FoxnoseConfig,
    auth: Option<Arc<dyn AuthStrategy>>,
    policy: RetryPolicy,
    blocking: Slot<dyn BlockingSender>,
    asynchronous: Slot<dyn AsyncSender>,
}

impl HttpTransport {
    /// Creates a transport with its own network clients.
    pub fn new(config: FoxnoseConfig, auth: impl AuthStrategy + 'static) -> Result<Self> {
        Self::builder(config).auth(auth).build()
    }

    pub fn builder(config: FoxnoseConfig) -> TransportBuilder {
        TransportBuilder::new(config)
    }

    /// The base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn config(&self) -> &FoxnoseConfig {
        &self.config
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Whether the blocking client was created by this transport.
    pub fn owns_blocking_client(&self) -> bool {
        self.blocking.owned
    }

    /// Whether the async client was created by this transport.
    pub fn owns_async_client(&self) -> bool {
        self.asynchronous.owned
    }

    /// Performs a logical request on the calling thread.
    ///
    /// # Errors
    ///
    /// - [`FoxnoseError::Api`] for a failing status once retries are done
    /// - [`FoxnoseError::Transport`] when the final attempt got no response
    /// - [`FoxnoseError::Closed`] after [`close`](Self::close)
    /// - [`FoxnoseError::Config`] for an unusable path or header
    pub fn request(&self, request: &Request) -> Result<ResponseBody> {
        let sender = self.blocking_sender()?;
        let prepared = self.prepare(request)?;

        let mut attempt = 1;
        loop {
            let physical = self.authorize(&prepared)?;
            self.log_attempt(&physical, attempt);

            let result = sender.send(&physical);
            match self.evaluate(request, attempt, result) {
                Step::Retry(delay) => {
                    std::thread::sleep(delay);
                    attempt += 1;
                }
                Step::Finish(outcome) => return outcome,
            }
        }
    }

    /// Performs a logical request without blocking the executor.
    ///
    /// Suspends only while the attempt is in flight and while waiting out a
    /// retry delay. Errors are the same as for [`request`](Self::request).
    pub async fn request_async(&self, request: &Request) -> Result<ResponseBody> {
        let sender = self.async_sender()?;
        let prepared = self.prepare(request)?;

        let mut attempt = 1;
        loop {
            let physical = self.authorize(&prepared)?;
            self.log_attempt(&physical, attempt);

            let result = sender.send(&physical).await;
            match self.evaluate(request, attempt, result) {
                Step::Retry(delay) => {
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Step::Finish(outcome) => return outcome,
            }
        }
    }

    /// Releases the blocking client if this transport created it.
    ///
    /// Later blocking requests fail with [`FoxnoseError::Closed`]. Calling it
    /// again, or on a caller-supplied client, does nothing. The async path is
    /// not affected.
    pub fn close(&self) {
        if let Some(sender) = self.blocking.shut() {
            tracing::debug!("Closing owned blocking client for {}", self.base_url);
            sender.close();
        }
    }

    /// Releases the async client if this transport created it.
    ///
    /// Later async requests fail with [`FoxnoseError::Closed`]. Calling it
    /// again, or on a caller-supplied client, does nothing. The blocking path
    /// is not affected.
    pub async fn aclose(&self) {
        let sender = self.asynchronous.shut();
        if let Some(sender) = sender {
            tracing::debug!("Closing owned async client for {}", self.base_url);
            sender.close().await;
        }
    }

    fn blocking_sender(&self) -> Result<Arc<dyn BlockingSender>> {
        self.blocking.get_or_init(BLOCKING, || {
            let mut builder = reqwest::blocking::Client::builder()
                .user_agent(self.config.user_agent.clone())
                .timeout(self.config.timeout_duration());
            builder = builder
                .connect_timeout(self.connect_timeout())
                .redirect(reqwest::redirect::Policy::none());
            let client = builder.build().map_err(|e| {
                FoxnoseError::Config(format!("failed to create blocking HTTP client: {}", e))
            })?;
            Ok(Arc::new(client) as Arc<dyn BlockingSender>)
        })
    }

    fn async_sender(&self) -> Result<Arc<dyn AsyncSender>> {
        self.asynchronous.get_or_init(ASYNC, || {
            let mut builder = reqwest::Client::builder().user_agent(self.config.user_agent.clone());
            if let Some(timeout) = self.config.timeout_duration() {
                builder = builder.timeout(timeout);
            }
            builder = builder
                .connect_timeout(self.connect_timeout())
                .redirect(reqwest::redirect::Policy::none());
            let client = builder.build().map_err(|e| {
                FoxnoseError::Config(format!("failed to create async HTTP client: {}", e))
            })?;
            Ok(Arc::new(client) as Arc<dyn AsyncSender>)
        })
    }

    fn connect_timeout(&self) -> Duration {
        self.config
            .timeout_duration()
            .map_or(Duration::from_secs(30), |t| t.min(Duration::from_secs(30)))
    }

    /// Builds everything about the physical request that does not change
    /// between attempts: URL, merged headers and body bytes.
    fn prepare(&self, request: &Request) -> Result<PreparedRequest> {
        let url = self.resolve(request)?;

        let mut headers = self.default_headers.clone();
        for (name, value) in request.headers() {
            insert_header(&mut headers, name, value)?;
        }

        let body = request.body().map(serde_json::to_vec).transpose()?;
        if body.is_some() && !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        Ok(PreparedRequest {
            method: request.method(),
            url,
            headers,
            body,
        })
    }

    fn resolve(&self, request: &Request) -> Result<Url> {
        let joined = format!("{}/{}", self.base_url, request.path().trim_start_matches('/'));
        let mut url = Url::parse(&joined).map_err(|e| {
            FoxnoseError::Config(format!("invalid request path {:?}: {}", request.path(), e))
        })?;

        let mut has_query = url.query().is_some_and(|q| !q.is_empty());
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in request.query_params() {
                for value in value.values() {
                    pairs.append_pair(key, value);
                    has_query = true;
                }
            }
        }
        if !has_query {
            url.set_query(None);
        }

        Ok(url)
    }

    /// Adds the authentication header for one attempt. Auth wins over any
    /// default or override with the same name.
    fn authorize(&self, prepared: &PreparedRequest) -> Result<PreparedRequest> {
        let mut physical = prepared.clone();
        let Some(auth) = &self.auth else {
            return Ok(physical);
        };

        let path = match prepared.url.query() {
            Some(query) => format!("{}?{}", prepared.url.path(), query),
            None => prepared.url.path().to_string(),
        };
        let header = auth.auth_header(&AuthRequest::new(
            prepared.method,
            &path,
            prepared.body.as_deref(),
        ));

        let name = HeaderName::from_bytes(header.name.as_bytes()).map_err(|_| {
            FoxnoseError::Config(format!("invalid authentication header name {:?}", header.name))
        })?;
        let mut value = HeaderValue::from_str(&header.value).map_err(|_| {
            FoxnoseError::Config(format!("invalid value for authentication header {}", name.as_str()))
        })?;
        value.set_sensitive(true);
        physical.headers.insert(name, value);

        Ok(physical)
    }

    fn log_attempt(&self, physical: &PreparedRequest, attempt: u32) {
        tracing::debug!(
            "{} {} (attempt {}/{})",
            physical.method,
            physical.url,
            attempt,
            self.policy.max_attempts()
        );
    }

    /// The decision step shared by both execution paths.
    fn evaluate(
        &self,
        request: &Request,
        attempt: u32,
        result: std::result::Result<RawResponse, TransportError>,
    ) -> Step {
        let method = request.method();
        let max = self.policy.max_attempts();

        match result {
            Ok(response) if response.is_success() => Step::Finish(Ok(ResponseBody::from_success(
                response,
                request.wants_raw_response(),
            ))),
            Ok(response) => {
                let outcome = Outcome::Response(&response);
                if self.policy.should_retry(attempt, method, outcome) {
                    let delay = self.policy.delay_for(attempt, outcome);
                    tracing::warn!(
                        "{} {} returned {}, retrying in {:?} (attempt {}/{})",
                        method,
                        request.path(),
                        response.status(),
                        delay,
                        attempt,
                        max
                    );
                    return Step::Retry(delay);
                }

                let error = response.to_api_error();
                tracing::debug!("{} {} failed: {}", method, request.path(), error);
                Step::Finish(Err(error.into()))
            }
            Err(error) => {
                if self.policy.should_retry(attempt, method, Outcome::TransportFailure) {
                    let delay = self.policy.delay_for(attempt, Outcome::TransportFailure);
                    tracing::warn!(
                        "{} {} failed: {}, retrying in {:?} (attempt {}/{})",
                        method,
                        request.path(),
                        error,
                        delay,
                        attempt,
                        max
                    );
                    return Step::Retry(delay);
                }

                tracing::debug!("{} {} failed: {}", method, request.path(), error);
                Step::Finish(Err(error.into()))
            }
        }
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("auth", &self.auth)
            .field("retry", self.policy.config())
            .field("owns_blocking_client", &self.blocking.owned)
            .field("owns_async_client", &self.asynchronous.owned)
            .finish()
    }
}

fn insert_header(headers: &mut HeaderMap, name: &str, value: &str) -> Result<()> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| FoxnoseError::Config(format!("invalid header name {:?}", name)))?;
    let header_value = HeaderValue::from_str(value)
        .map_err(|_| FoxnoseError::Config(format!("invalid value for header {}", name)))?;
    headers.insert(header_name, header_value);
    Ok(())
}
