//! REST access to the property collection endpoint.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: [`HttpPropertyApi`] returns a communication error for every
//! call since there is no browser `fetch` to drive.
//!
//! ERROR HANDLING
//! ==============
//! Every non-success status becomes [`ClientError::Communication`]. The text
//! comes from a JSON `{message}` body when one parses, else a generic
//! status-code message. Delete never reads the body.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Property, PropertyId, PropertyPayload};
use crate::error::ClientError;
#[cfg(any(test, feature = "csr"))]
use super::types::ErrorBody;

/// Remote operations on the property collection.
///
/// Implementations only move data; user notification and cache
/// reconciliation live in the session.
#[allow(async_fn_in_trait)]
pub trait PropertyApi {
    /// `GET {base}`
    async fn list(&self) -> Result<Vec<Property>, ClientError>;
    /// `GET {base}/{id}`
    async fn get(&self, id: PropertyId) -> Result<Property, ClientError>;
    /// `POST {base}`
    async fn create(&self, payload: &PropertyPayload) -> Result<Property, ClientError>;
    /// `PUT {base}/{id}`
    async fn update(&self, id: PropertyId, payload: &PropertyPayload) -> Result<Property, ClientError>;
    /// `DELETE {base}/{id}`; success is decided by status alone.
    async fn delete(&self, id: PropertyId) -> Result<(), ClientError>;
}

pub(crate) fn property_endpoint(base_url: &str, id: PropertyId) -> String {
    format!("{}/{id}", base_url.trim_end_matches('/'))
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn status_failure_message(status: u16) -> String {
    format!("HTTP error! status: {status}")
}

/// Error text for a failed response: the body's `message` when present, else
/// the generic status message.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn failure_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| status_failure_message(status))
}

/// Browser HTTP implementation of [`PropertyApi`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpPropertyApi {
    base_url: String,
}

impl HttpPropertyApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> ClientError {
    ClientError::transport("HTTP transport is only available in the browser build")
}

#[cfg(feature = "csr")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ClientError> {
    if !resp.ok() {
        return Err(failure(resp).await);
    }
    resp.json::<T>()
        .await
        .map_err(|e| ClientError::status(resp.status(), e.to_string()))
}

#[cfg(feature = "csr")]
async fn failure(resp: gloo_net::http::Response) -> ClientError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ClientError::status(status, failure_message(status, &body))
}

#[cfg(feature = "csr")]
fn transport_error(e: gloo_net::Error) -> ClientError {
    ClientError::transport(e.to_string())
}

impl PropertyApi for HttpPropertyApi {
    async fn list(&self) -> Result<Vec<Property>, ClientError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.base_url)
                .send()
                .await
                .map_err(transport_error)?;
            decode(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(unavailable())
        }
    }

    async fn get(&self, id: PropertyId) -> Result<Property, ClientError> {
        let url = property_endpoint(&self.base_url, id);
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(transport_error)?;
            decode(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = url;
            Err(unavailable())
        }
    }

    async fn create(&self, payload: &PropertyPayload) -> Result<Property, ClientError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.base_url)
                .json(payload)
                .map_err(transport_error)?
                .send()
                .await
                .map_err(transport_error)?;
            decode(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = payload;
            Err(unavailable())
        }
    }

    async fn update(&self, id: PropertyId, payload: &PropertyPayload) -> Result<Property, ClientError> {
        let url = property_endpoint(&self.base_url, id);
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::put(&url)
                .json(payload)
                .map_err(transport_error)?
                .send()
                .await
                .map_err(transport_error)?;
            decode(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, payload);
            Err(unavailable())
        }
    }

    async fn delete(&self, id: PropertyId) -> Result<(), ClientError> {
        let url = property_endpoint(&self.base_url, id);
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::delete(&url)
                .send()
                .await
                .map_err(transport_error)?;
            if !resp.ok() {
                return Err(ClientError::status(resp.status(), status_failure_message(resp.status())));
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = url;
            Err(unavailable())
        }
    }
}
