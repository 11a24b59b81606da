//
//  foxnose-sdk
//  api/sender.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Network capabilities used by the transport core.
//!
//! The retry loop is written once; what differs between the blocking and the
//! async execution paths is only how one physical attempt is performed. That
//! single capability is expressed by [`BlockingSender`] and [`AsyncSender`].
//! `reqwest::blocking::Client` and `reqwest::Client` implement them, and tests
//! or custom stacks can supply their own.
//!
//! A sender returns the whole response buffered in memory, or a
//! [`TransportError`] when no response was obtained.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use url::Url;

use crate::api::{Method, RawResponse};
use crate::error::TransportError;

/// A fully built physical request.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Performs one attempt on the calling thread.
pub trait BlockingSender: Send + Sync {
    fn send(&self, request: &PreparedRequest) -> Result<RawResponse, TransportError>;

    /// Releases resources held by the sender. Called only for senders the
    /// transport created itself.
    fn close(&self) {}
}

/// Performs one attempt without blocking other tasks.
#[async_trait]
pub trait AsyncSender: Send + Sync {
    async fn send(&self, request: &PreparedRequest) -> Result<RawResponse, TransportError>;

    /// Releases resources held by the sender. Called only for senders the
    /// transport created itself.
    async fn close(&self) {}
}

impl BlockingSender for reqwest::blocking::Client {
    fn send(&self, request: &PreparedRequest) -> Result<RawResponse, TransportError> {
        let mut builder = self
            .request(request.method.into(), request.url.clone())
            .headers(request.headers.clone());

        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes()?;

        Ok(RawResponse::new(status, headers, body.to_vec()))
    }
}

#[async_trait]
impl AsyncSender for reqwest::Client {
    async fn send(&self, request: &PreparedRequest) -> Result<RawResponse, TransportError> {
        let mut builder = self
            .request(request.method.into(), request.url.clone())
            .headers(request.headers.clone());

        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(RawResponse::new(status, headers, body.to_vec()))
    }
}
