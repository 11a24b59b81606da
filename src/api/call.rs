//
//  foxnose-sdk
//  api/call.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Typed resource calls.
//!
//! Resource clients do not pick an execution path themselves. Each method
//! returns an [`ApiCall`] which the caller finishes with [`ApiCall::send`] on
//! a thread or [`ApiCall::send_async`] inside an async runtime.

use serde::de::DeserializeOwned;

use crate::api::{HttpTransport, Request, ResponseBody};
use crate::error::Result;

/// A prepared request whose successful body decodes into `T`.
///
/// Calls returning `()` discard whatever the server sends back on success.
#[must_use = "an ApiCall does nothing until it is sent"]
pub struct ApiCall<'a, T> {
    transport: &'a HttpTransport,
    request: Request,
    follow_up: Option<Request>,
    decode: fn(ResponseBody) -> Result<T>,
}

impl<'a> ApiCall<'a, ()> {
    /// A call that only reports success or failure. Any success body, JSON
    /// acknowledgement or plain text, is dropped.
    pub(crate) fn discarding(transport: &'a HttpTransport, request: Request) -> Self {
        Self {
            transport,
            request,
            follow_up: None,
            decode: |_| Ok(()),
        }
    }
}

impl<'a, T: DeserializeOwned> ApiCall<'a, T> {
    pub(crate) fn new(transport: &'a HttpTransport, request: Request) -> Self {
        Self {
            transport,
            request,
            follow_up: None,
            decode: ResponseBody::decode::<T>,
        }
    }

    /// Sends `request` after the main request succeeds and decodes its body
    /// instead. Used by endpoints that acknowledge a write without a body.
    pub(crate) fn then_fetch(mut self, request: Request) -> Self {
        self.follow_up = Some(request);
        self
    }

    /// The request that will be sent.
    pub fn request(&self) -> &Request {
        &self.request
    }

    /// Adds a header override to this call only.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let (name, value) = (name.into(), value.into());
        if let Some(next) = self.follow_up.take() {
            self.follow_up = Some(next.header(name.clone(), value.clone()));
        }
        self.request = self.request.header(name, value);
        self
    }

    /// Sends the call on the blocking path.
    pub fn send(self) -> Result<T> {
        let body = self.transport.request(&self.request)?;
        match &self.follow_up {
            Some(next) => (self.decode)(self.transport.request(next)?),
            None => (self.decode)(body),
        }
    }

    /// Sends the call on the async path.
    pub async fn send_async(self) -> Result<T> {
        let body = self.transport.request_async(&self.request).await?;
        match &self.follow_up {
            Some(next) => (self.decode)(self.transport.request_async(next).await?),
            None => (self.decode)(body),
        }
    }
}

impl<T> std::fmt::Debug for ApiCall<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCall")
            .field("request", &self.request)
            .field("follow_up", &self.follow_up)
            .finish()
    }
}
