//
//  foxnose-sdk
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # FoxNose SDK
//!
//! A client library for the FoxNose headless CMS.
//!
//! ## Overview
//!
//! Two clients are provided:
//!
//! - [`ManagementClient`] for the administrative API (organizations,
//!   projects, folders, resources, schemas, roles and keys)
//! - [`FluxClient`] for reading published content
//!
//! Both sit on one [`HttpTransport`] that can be driven from blocking code
//! or from an async runtime. Every client method returns an
//! [`api::ApiCall`] which is finished with `send()` or `send_async().await`.
//!
//! ## Features
//!
//! - **Dual execution paths**: blocking and async share auth, retries and
//!   error mapping
//! - **Retries**: exponential backoff for idempotent methods, honoring `Retry-After`
//! - **Pluggable auth**: key pairs, bearer tokens, basic auth or your own
//!   [`auth::AuthStrategy`]
//! - **Typed models**: unknown fields are kept, so models survive API changes
//!
//! ## Module Structure
//!
//! - [`api`]: transport, typed calls and the resource clients
//! - [`auth`]: authentication strategies
//! - [`config`]: transport and retry configuration
//! - [`error`]: the error taxonomy
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use foxnose_sdk::{FoxnoseConfig, ManagementClient, SimpleKeyAuth};
//!
//! # fn example() -> foxnose_sdk::Result<()> {
//! let config = FoxnoseConfig::load(std::path::Path::new("foxnose.toml"))?;
//! let client = ManagementClient::connect(config, "env-key", SimpleKeyAuth::new("public", "secret"))?;
//!
//! for folder in client.list_folders().send()? {
//!     println!("{} ({})", folder.name, folder.alias);
//! }
//! client.close();
//! # Ok(())
//! # }
//! ```

/// HTTP transport, typed calls and resource clients.
pub mod api;

/// Authentication strategies.
///
/// - Key pairs (`Simple <public>:<secret>`)
/// - Bearer tokens
/// - HTTP basic auth
pub mod auth;

/// Transport and retry configuration.
///
/// Settings can be built in code, read from a TOML file or taken from
/// `FOXNOSE_*` environment variables.
pub mod config;

/// Error types.
pub mod error;

pub use api::{FluxClient, HttpTransport, ManagementClient};
pub use auth::SimpleKeyAuth;
pub use config::{FoxnoseConfig, RetryConfig};
pub use error::{FoxnoseError, Result};

/// Library version, sent in the default `User-Agent`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
