//! Browser HTTP transport.
//!
//! Client-side (hydrate): real `fetch` calls via `gloo-net`.
//! Server-side (SSR): every send fails, since the referral service is only
//! ever called from the browser.

#![allow(clippy::unused_async)]

use super::transport::{ApiRequest, ApiResponse, Transport, TransportError};
#[cfg(feature = "hydrate")]
use super::transport::Method;
use crate::config;

/// `Transport` that issues `fetch` requests against `base_url`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Transport pointed at the configured referral service.
    pub fn from_config() -> Self {
        Self::new(config::api_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(feature = "hydrate")]
fn transport_error(e: gloo_net::Error) -> TransportError {
    TransportError(e.to_string())
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = request.url(&self.base_url);
            let method = request.endpoint.method();
            let mut builder = match method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Delete => Request::delete(&url),
            };
            for (name, value) in request.headers() {
                builder = builder.header(name, &value);
            }

            let sent = match &request.body {
                Some(body) => builder.body(body.to_string()).map_err(transport_error)?.send().await,
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| {
                leptos::logging::warn!("{method} {} failed: {e}", request.endpoint.path());
                transport_error(e)
            })?;

            let status = resp.status();
            let authorization = resp.headers().get("Authorization");
            let body = resp.text().await.map_err(transport_error)?;
            let response = ApiResponse::new(status, body);
            Ok(match authorization {
                Some(value) => response.with_authorization(value),
                None => response,
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.base_url, request);
            Err(TransportError("not available on server".to_owned()))
        }
    }
}
