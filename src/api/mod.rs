//
//  foxnose-sdk
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP transport and the resource clients for the
//! FoxNose APIs.
//!
//! ## Supported APIs
//!
//! - **Management API**: administrative endpoints at `api.foxnose.net`
//! - **Flux API**: published content at the environment host
//!
//! ## Architecture
//!
//! - [`client`]: [`HttpTransport`], the shared request engine (auth,
//!   retries, body negotiation, error mapping)
//! - [`sender`]: the network seam under the transport
//! - [`request`] / [`response`]: request descriptors and response bodies
//! - [`retry`]: retry decisions and backoff
//! - [`call`]: [`ApiCall`], a typed call finished with `send` or `send_async`
//! - [`management`] / [`flux`]: the resource clients
//! - [`common`]: pagination and path helpers
//!
//! ## Usage
//!
//! ```rust,no_run
//! use foxnose_sdk::api::{HttpTransport, Request};
//! use foxnose_sdk::auth::SimpleKeyAuth;
//! use foxnose_sdk::config::FoxnoseConfig;
//!
//! # fn example() -> foxnose_sdk::Result<()> {
//! let transport = HttpTransport::new(
//!     FoxnoseConfig::new("https://api.foxnose.net"),
//!     SimpleKeyAuth::new("public", "secret"),
//! )?;
//!
//! let body = transport.request(&Request::get("/organizations/"))?;
//! println!("{:?}", body.as_json());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Failures surface as [`crate::FoxnoseError`]:
//!
//! - `Transport`: no response after the last attempt
//! - `Api`: a failing status, with the parsed error body
//! - `Config`: unusable configuration or request path
//! - `Closed`: the execution path was shut down
//! - `Decode`: a successful body did not match the expected type

/// Typed calls returned by the resource clients.
pub mod call;

/// Core HTTP transport.
///
/// Provides [`HttpTransport`] which handles:
/// - URL and header composition
/// - Authentication header injection on every attempt
/// - Retry with backoff and `Retry-After`
/// - Response body negotiation and error mapping
pub mod client;

/// Shared pagination types and path helpers.
pub mod common;

/// FoxNose Flux API.
pub mod flux;

/// FoxNose Management API.
///
/// Contains the [`management::ManagementClient`] and its response models.
pub mod management;

pub mod request;
pub mod response;
pub mod retry;

/// The network seam: blocking and async senders.
pub mod sender;

pub use call::ApiCall;
pub use client::{HttpTransport, TransportBuilder};
pub use flux::FluxClient;
pub use management::ManagementClient;
pub use request::{Method, QueryValue, Request};
pub use response::{RawResponse, ResponseBody};
pub use retry::{retry_after_secs, Outcome, RetryPolicy};
pub use sender::{AsyncSender, BlockingSender, PreparedRequest};
