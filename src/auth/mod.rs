//
//  foxnose-sdk
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Authentication strategies compute the credential header attached to every
//! outgoing request. A strategy sees the method, the path (including the
//! encoded query string) and the exact body bytes that will be sent, and
//! returns a single header.
//!
//! ## Supported Schemes
//!
//! - [`SimpleKeyAuth`]: `Authorization: Simple <public>:<secret>`
//! - [`BearerTokenAuth`]: `Authorization: Bearer <token>`
//! - [`BasicAuth`]: `Authorization: Basic base64(<user>:<password>)`
//!
//! Strategies never perform I/O and never mutate state, so a single instance
//! is shared by every in-flight request of a transport.
//!
//! ## Example
//!
//! ```rust
//! use foxnose_sdk::api::Method;
//! use foxnose_sdk::auth::{AuthRequest, AuthStrategy, SimpleKeyAuth};
//!
//! let auth = SimpleKeyAuth::new("pub", "secret");
//! let header = auth.auth_header(&AuthRequest::new(Method::Get, "/v1/test", None));
//! assert_eq!(header.value, "Simple pub:secret");
//! ```

mod token;

pub use token::*;

use std::fmt;

use crate::api::Method;

/// Name of the header every built-in scheme writes.
pub const AUTHORIZATION: &str = "authorization";

/// The request facts a strategy may sign or inspect.
#[derive(Debug, Clone, Copy)]
pub struct AuthRequest<'a> {
    /// HTTP method of the attempt.
    pub method: Method,
    /// Path relative to the base URL, including the encoded query string.
    pub path: &'a str,
    /// Serialized body, exactly as it will be sent.
    pub body: Option<&'a [u8]>,
}

impl<'a> AuthRequest<'a> {
    pub fn new(method: Method, path: &'a str, body: Option<&'a [u8]>) -> Self {
        Self { method, path, body }
    }
}

/// A computed credential header.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthHeader {
    /// Header name (case-insensitive on the wire).
    pub name: String,
    /// Header value.
    pub value: String,
}

impl AuthHeader {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Shorthand for an `Authorization` header.
    pub fn authorization(value: impl Into<String>) -> Self {
        Self::new(AUTHORIZATION, value)
    }
}

impl fmt::Debug for AuthHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthHeader")
            .field("name", &self.name)
            .field("value", &"<redacted>")
            .finish()
    }
}

/// Computes the credential header for one physical attempt.
///
/// Implementations must be deterministic in their inputs, free of I/O, and
/// safe to call concurrently from many in-flight requests.
pub trait AuthStrategy: fmt::Debug + Send + Sync {
    fn auth_header(&self, request: &AuthRequest<'_>) -> AuthHeader;
}

/// Key-pair authentication for the Management and Flux APIs.
///
/// Sends the public and secret key verbatim:
/// `Authorization: Simple <public_key>:<secret_key>`.
#[derive(Clone)]
pub struct SimpleKeyAuth {
    public_key: String,
    secret_key: String,
}

impl SimpleKeyAuth {
    pub fn new(public_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            secret_key: secret_key.into(),
        }
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }
}

impl fmt::Debug for SimpleKeyAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleKeyAuth")
            .field("public_key", &self.public_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

impl AuthStrategy for SimpleKeyAuth {
    fn auth_header(&self, _request: &AuthRequest<'_>) -> AuthHeader {
        AuthHeader::authorization(format!("Simple {}:{}", self.public_key, self.secret_key))
    }
}
