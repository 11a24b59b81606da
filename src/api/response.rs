//
//  foxnose-sdk
//  api/response.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Response types and body negotiation.
//!
//! A successful body is decoded as follows:
//!
//! 1. Raw response requested → [`ResponseBody::Raw`]
//! 2. Zero-length body (typically `204 No Content`) → [`ResponseBody::Empty`]
//! 3. Valid JSON → [`ResponseBody::Json`]
//! 4. Anything else → [`ResponseBody::Text`]
//!
//! A non-JSON success body is not an error. Failing responses take a
//! different route and become [`ApiErrorDetails`](crate::error::ApiErrorDetails).

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiErrorDetails, Result};

/// A fully buffered HTTP response from one physical attempt.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: u16,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, headers: HeaderMap, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the first value of a header, if it is valid text.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Deserializes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Builds the API-level error for a failing response.
    pub fn to_api_error(&self) -> ApiErrorDetails {
        ApiErrorDetails::from_body(self.status, &self.text())
    }
}

/// The result of a successful logical request.
#[derive(Debug, Clone)]
pub enum ResponseBody {
    /// The body parsed as JSON.
    Json(Value),
    /// The body was not JSON; returned verbatim.
    Text(String),
    /// The body was empty.
    Empty,
    /// The caller asked for the unparsed response.
    Raw(RawResponse),
}

impl ResponseBody {
    /// Negotiates the body of a successful response.
    pub(crate) fn from_success(response: RawResponse, raw: bool) -> Self {
        if raw {
            return Self::Raw(response);
        }
        if response.body().is_empty() {
            return Self::Empty;
        }
        match serde_json::from_slice::<Value>(response.body()) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(response.text()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Converts the body into a JSON value: text becomes a string, empty
    /// becomes `null`, a raw response is parsed (or `null` when empty).
    pub fn into_value(self) -> Result<Value> {
        match self {
            Self::Json(value) => Ok(value),
            Self::Text(text) => Ok(Value::String(text)),
            Self::Empty => Ok(Value::Null),
            Self::Raw(response) if response.body().is_empty() => Ok(Value::Null),
            Self::Raw(response) => response.json(),
        }
    }

    /// Deserializes the body into `T`. Empty bodies decode from `null`, so
    /// `()` and `Option<_>` accept them.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T> {
        Ok(serde_json::from_value(self.into_value()?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(status: u16, body: &str) -> RawResponse {
        RawResponse::new(status, HeaderMap::new(), body.as_bytes().to_vec())
    }

    #[test]
    fn test_negotiates_json() {
        let body = ResponseBody::from_success(response(200, r#"{"ok": true}"#), false);
        assert_eq!(body.as_json(), Some(&json!({"ok": true})));
    }

    #[test]
    fn test_negotiates_empty() {
        let body = ResponseBody::from_success(response(204, ""), false);
        assert!(body.is_empty());
        body.decode::<()>().unwrap();
    }

    #[test]
    fn test_negotiates_text() {
        let body = ResponseBody::from_success(response(200, "plain text response"), false);
        assert_eq!(body.as_text(), Some("plain text response"));
    }

    #[test]
    fn test_raw_bypasses_parsing() {
        let body = ResponseBody::from_success(response(200, r#"{"data": "test"}"#), true);
        match body {
            ResponseBody::Raw(raw) => {
                assert_eq!(raw.status(), 200);
                assert_eq!(raw.json::<Value>().unwrap()["data"], "test");
            }
            other => panic!("expected raw response, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_typed() {
        #[derive(serde::Deserialize)]
        struct Item {
            key: String,
        }
        let body = ResponseBody::from_success(response(200, r#"{"key": "k1"}"#), false);
        let item: Item = body.decode().unwrap();
        assert_eq!(item.key, "k1");
    }

    #[test]
    fn test_success_range() {
        assert!(response(204, "").is_success());
        assert!(!response(304, "").is_success());
        assert!(!response(500, "").is_success());
    }
}
