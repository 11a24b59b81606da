//
//  foxnose-sdk
//  api/flux/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! FoxNose Flux API.
//!
//! Flux serves published content from an environment host such as
//! `https://<env>.fxns.io`. Resources are addressed by the alias path of
//! their folder under an API prefix, e.g. `/v1/blog/posts`.
//!
//! Results are returned as raw JSON since their shape follows the folder
//! schema.
//!
//! ```rust,no_run
//! use foxnose_sdk::auth::SimpleKeyAuth;
//! use foxnose_sdk::config::FoxnoseConfig;
//! use foxnose_sdk::FluxClient;
//! use serde_json::json;
//!
//! # fn example() -> foxnose_sdk::Result<()> {
//! let flux = FluxClient::connect(
//!     FoxnoseConfig::new("https://env.fxns.io"),
//!     "v1",
//!     SimpleKeyAuth::new("public", "secret"),
//! )?;
//!
//! let hits = flux
//!     .search("articles", json!({"where": {"$": {"all_of": []}}}))
//!     .send()?;
//! println!("{}", hits["results"]);
//! # Ok(())
//! # }
//! ```

use serde_json::Value;

use crate::api::common::{segment, PathBuilder};
use crate::api::{ApiCall, HttpTransport, QueryValue, Request};
use crate::auth::AuthStrategy;
use crate::config::FoxnoseConfig;
use crate::error::Result;

/// Client for the Flux delivery API.
#[derive(Debug)]
pub struct FluxClient {
    transport: HttpTransport,
    api_prefix: String,
}

impl FluxClient {
    /// Wraps an existing transport. `api_prefix` is the first path segment,
    /// usually `v1`.
    pub fn new(transport: HttpTransport, api_prefix: impl Into<String>) -> Self {
        let api_prefix: String = api_prefix.into();
        Self {
            transport,
            api_prefix: api_prefix.trim_matches('/').to_string(),
        }
    }

    /// Builds a transport with its own network clients and wraps it.
    pub fn connect(
        config: FoxnoseConfig,
        api_prefix: impl Into<String>,
        auth: impl AuthStrategy + 'static,
    ) -> Result<Self> {
        Ok(Self::new(HttpTransport::new(config, auth)?, api_prefix))
    }

    pub fn api_prefix(&self) -> &str {
        &self.api_prefix
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

    fn folder(&self, folder_path: &str) -> PathBuilder {
        let prefix = match self.api_prefix.as_str() {
            "" => String::new(),
            prefix => format!("/{}", segment(prefix)),
        };
        PathBuilder::new(&prefix).nested(folder_path)
    }

    /// Lists resources of a folder. `params` are passed through as query
    /// parameters (`limit`, `offset`, filters and so on).
    pub fn list_resources(
        &self,
        folder_path: &str,
        params: Vec<(&str, QueryValue)>,
    ) -> ApiCall<'_, Value> {
        let request = params.into_iter().fold(
            Request::get(self.folder(folder_path).build_bare()),
            |request, (key, value)| request.query(key, value),
        );
        ApiCall::new(&self.transport, request)
    }

    pub fn get_resource(&self, folder_path: &str, key: &str) -> ApiCall<'_, Value> {
        let path = self.folder(folder_path).id(key).build_bare();
        ApiCall::new(&self.transport, Request::get(path))
    }

    /// Runs a structured search over a folder.
    pub fn search(&self, folder_path: &str, body: Value) -> ApiCall<'_, Value> {
        let path = self.folder(folder_path).literal("_search").build_bare();
        ApiCall::new(&self.transport, Request::post(path).json(body))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::api::sender::scripted::{ScriptedSender, Step};
    use crate::auth::SimpleKeyAuth;
    use crate::config::RetryConfig;
    use serde_json::json;

    fn client(prefix: &str, steps: Vec<Step>) -> (FluxClient, Arc<ScriptedSender>) {
        let sender = Arc::new(ScriptedSender::new(steps));
        let transport = HttpTransport::builder(FoxnoseConfig::new("https://env.fxns.io"))
            .auth(SimpleKeyAuth::new("pub", "secret"))
            .retry(RetryConfig::disabled())
            .blocking_sender(sender.clone())
            .async_sender(sender.clone())
            .build()
            .unwrap();
        (FluxClient::new(transport, prefix), sender)
    }

    fn path_of(sender: &ScriptedSender, index: usize) -> String {
        sender.requests()[index].url.path().to_string()
    }

    #[tokio::test]
    async fn test_list_and_get_resources() {
        let (flux, sender) = client(
            "v1",
            vec![
                Step::json(200, json!({"results": [{"key": "article-1"}]})),
                Step::json(200, json!({"key": "article-1", "title": "Hello"})),
            ],
        );

        let listing = flux.list_resources("articles", Vec::new()).send_async().await.unwrap();
        assert_eq!(listing["results"][0]["key"], "article-1");
        assert_eq!(path_of(&sender, 0), "/v1/articles");
        assert_eq!(sender.requests()[0].url.query(), None);

        let article = flux.get_resource("articles", "article-1").send_async().await.unwrap();
        assert_eq!(article["title"], "Hello");
        assert_eq!(path_of(&sender, 1), "/v1/articles/article-1");
    }

    #[tokio::test]
    async fn test_search_posts_body() {
        let (flux, sender) = client("v1", vec![Step::json(200, json!({"results": []}))]);

        let body = json!({"where": {"$": {"all_of": []}}});
        let result = flux.search("articles", body.clone()).send_async().await.unwrap();
        assert_eq!(result["results"], json!([]));

        let request = &sender.requests()[0];
        assert_eq!(request.method.to_string(), "POST");
        assert_eq!(request.url.path(), "/v1/articles/_search");
        let sent: Value = serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(sent, body);
    }

    #[test]
    fn test_nested_folder_path_and_params() {
        let (flux, sender) = client("/v1/", vec![Step::json(200, json!({"results": []}))]);

        flux.list_resources(
            "/blog/posts/",
            vec![("limit", 10u32.into()), ("tag", vec!["a", "b"].into())],
        )
        .send()
        .unwrap();

        let request = &sender.requests()[0];
        assert_eq!(request.url.path(), "/v1/blog/posts");
        assert_eq!(request.url.query(), Some("limit=10&tag=a&tag=b"));
        assert_eq!(flux.api_prefix(), "v1");
    }

    #[test]
    fn test_auth_headers_sent_to_flux() {
        let (flux, sender) = client("v1", vec![Step::json(200, json!({}))]);

        flux.get_resource("articles", "a b").send().unwrap();
        let request = &sender.requests()[0];
        assert_eq!(request.url.path(), "/v1/articles/a%20b");
        assert!(request.headers.contains_key("authorization"));
    }
}
