//
//  foxnose-sdk
//  api/management/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! FoxNose Management API.
//!
//! [`ManagementClient`] exposes the administrative API: organizations,
//! projects and environments, the folder tree, resources and revisions,
//! component and folder schemas, roles, API keys and locales.
//!
//! # Module Organization
//!
//! - [`models`] - Response models
//! - `org` - Organizations, plans, projects and environments
//! - `content` - Folders, resources and revisions
//! - `schema` - Components, schema versions and fields
//! - `access` - Roles, permissions, API keys and locales
//!
//! # Paths
//!
//! Organization, project and environment endpoints live at the API root.
//! Everything else is scoped to one environment and lives under
//! `/v1/<environment_key>`.
//!
//! # Example
//!
//! ```rust,no_run
//! use foxnose_sdk::auth::SimpleKeyAuth;
//! use foxnose_sdk::config::FoxnoseConfig;
//! use foxnose_sdk::ManagementClient;
//! use serde_json::json;
//!
//! # async fn example() -> foxnose_sdk::Result<()> {
//! let client = ManagementClient::connect(
//!     FoxnoseConfig::new("https://api.foxnose.net"),
//!     "env-key",
//!     SimpleKeyAuth::new("public", "secret"),
//! )?;
//!
//! let folder = client
//!     .create_folder(json!({"name": "Blog", "alias": "blog", "folder_type": "collection"}))
//!     .send_async()
//!     .await?;
//! let resources = client.list_resources(&folder).send_async().await?;
//! println!("{} resources", resources.count());
//!
//! client.aclose().await;
//! # Ok(())
//! # }
//! ```

mod access;
mod content;
pub mod models;
mod org;
mod schema;

pub use access::ApiScope;
pub use models::*;
pub use schema::SchemaOwner;

use serde::de::DeserializeOwned;

use crate::api::common::{segment, PathBuilder};
use crate::api::{ApiCall, HttpTransport, Request};
use crate::auth::AuthStrategy;
use crate::config::FoxnoseConfig;
use crate::error::Result;

/// Client for the Management API of one environment.
#[derive(Debug)]
pub struct ManagementClient {
    transport: HttpTransport,
    environment_key: String,
}

impl ManagementClient {
    /// Wraps an existing transport.
    pub fn new(transport: HttpTransport, environment_key: impl Into<String>) -> Self {
        Self {
            transport,
            environment_key: environment_key.into(),
        }
    }

    /// Builds a transport with its own network clients and wraps it.
    pub fn connect(
        config: FoxnoseConfig,
        environment_key: impl Into<String>,
        auth: impl AuthStrategy + 'static,
    ) -> Result<Self> {
        Ok(Self::new(HttpTransport::new(config, auth)?, environment_key))
    }

    pub fn environment_key(&self) -> &str {
        &self.environment_key
    }

    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    /// Releases the blocking client, if the transport owns it.
    pub fn close(&self) {
        self.transport.close();
    }

    /// Releases the async client, if the transport owns it.
    pub async fn aclose(&self) {
        self.transport.aclose().await;
    }

    /// Paths at the API root.
    fn root(&self) -> PathBuilder {
        PathBuilder::new("")
    }

    /// Paths under `/v1/<environment_key>`.
    fn env(&self) -> PathBuilder {
        PathBuilder::new(&format!("/v1/{}", segment(&self.environment_key)))
    }

    fn call<T: DeserializeOwned>(&self, request: Request) -> ApiCall<'_, T> {
        ApiCall::new(&self.transport, request)
    }

    /// Calls whose success body carries nothing the caller needs.
    fn discard(&self, request: Request) -> ApiCall<'_, ()> {
        ApiCall::discarding(&self.transport, request)
    }
}
