//! Platform-abstracted HTTP client with Send-safe futures.
//!
//! On native the request runs directly on reqwest. On WASM `reqwest::Response`
//! holds JS values and is not `Send`, so the request is spawned on the JS
//! thread with `wasm_bindgen_futures::spawn_local` and its result is handed
//! back through a `flume` channel.

use std::collections::HashMap;

use thiserror::Error;

/// A response reduced to Send-safe data.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    /// Returns true if the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// The request did not complete: connection refused, DNS, aborted body, ...
#[derive(Debug, Clone, Error)]
#[error("HTTP error: {message}")]
pub struct HttpError {
    pub message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

#[derive(Debug, Clone)]
pub struct RequestBuilder {
    url: String,
    headers: HashMap<String, String>,
    body: Option<Vec<u8>>,
}

impl RequestBuilder {
    fn post(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Set the body as JSON together with its content type.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, serde_json::Error> {
        self.body = Some(serde_json::to_vec(value)?);
        self.headers
            .insert("content-type".to_owned(), "application/json".to_owned());
        Ok(self)
    }

    pub async fn send(self) -> HttpResult<Response> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.execute().await
        }

        #[cfg(target_arch = "wasm32")]
        {
            let (tx, rx) = flume::bounded::<HttpResult<Response>>(1);

            wasm_bindgen_futures::spawn_local(async move {
                let result = self.execute().await;
                // The receiver only goes away if the caller stopped waiting.
                let _ = tx.send_async(result).await;
            });

            rx.recv_async()
                .await
                .map_err(|_| HttpError::new("Request cancelled"))?
        }
    }

    async fn execute(self) -> HttpResult<Response> {
        let client = reqwest::Client::new();
        let mut request = client.post(&self.url);

        for (name, value) in &self.headers {
            request = request.header(name, value);
        }

        if let Some(body) = self.body {
            request = request.body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?;

        // Read the status before the body consumes the response
        let status = response.status().as_u16();

        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?
            .to_vec();

        Ok(Response { status, body })
    }
}

/// Entry point for building requests.
///
/// ```ignore
/// let response = Client::post(config.login_url().as_str())
///     .json(&request)?
///     .send()
///     .await?;
/// ```
pub struct Client;

impl Client {
    pub fn post(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::post(url)
    }
}
