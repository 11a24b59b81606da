//
//  foxnose-sdk
//  auth/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Token and password based schemes.
//!
//! These exist for deployments that sit behind a gateway expecting standard
//! `Bearer` or `Basic` credentials instead of the FoxNose key pair.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::{AuthHeader, AuthRequest, AuthStrategy};

/// Static bearer token: `Authorization: Bearer <token>`.
#[derive(Clone)]
pub struct BearerTokenAuth {
    token: String,
}

impl BearerTokenAuth {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl fmt::Debug for BearerTokenAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerTokenAuth")
            .field("token", &"<redacted>")
            .finish()
    }
}

impl AuthStrategy for BearerTokenAuth {
    fn auth_header(&self, _request: &AuthRequest<'_>) -> AuthHeader {
        AuthHeader::authorization(format!("Bearer {}", self.token))
    }
}

/// HTTP Basic credentials: `Authorization: Basic base64(<user>:<password>)`.
#[derive(Clone)]
pub struct BasicAuth {
    username: String,
    password: String,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl AuthStrategy for BasicAuth {
    fn auth_header(&self, _request: &AuthRequest<'_>) -> AuthHeader {
        let encoded = STANDARD.encode(format!("{}:{}", self.username, self.password));
        AuthHeader::authorization(format!("Basic {}", encoded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;

    #[test]
    fn test_bearer_header() {
        let auth = BearerTokenAuth::new("tok");
        let header = auth.auth_header(&AuthRequest::new(Method::Get, "/", None));
        assert_eq!(header.value, "Bearer tok");
    }

    #[test]
    fn test_basic_header() {
        let auth = BasicAuth::new("Aladdin", "open sesame");
        let header = auth.auth_header(&AuthRequest::new(Method::Delete, "/x", None));
        assert_eq!(header.value, "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==");
    }
}
