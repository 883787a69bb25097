//! Platform-abstracted HTTP client with Send-safe futures, plus the JSON request helper.
//!
//! On WASM, `reqwest::Response` is not `Send` because it holds JS values. To keep every
//! request future `Send` (so the controller can spawn it the same way on both targets):
//! - On **native**: use reqwest directly (futures are Send)
//! - On **WASM**: run the request on the JS thread with `wasm_bindgen_futures::spawn_local`
//!   and ship the result back through a `flume` channel (which is Send-safe)

use std::collections::HashMap;

use log::{debug, info};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::RequestError;

/// HTTP method for requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    Get,
    #[default]
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Whether the request helper attaches a JSON body for this verb.
    pub fn carries_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A simplified HTTP response that contains only Send-safe data.
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

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, RequestError> {
        serde_json::from_slice(&self.body).map_err(|e| RequestError::Decode(e.to_string()))
    }
}

pub type HttpResult<T> = Result<T, RequestError>;

/// A builder for constructing HTTP requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: String,
    headers: HashMap<String, String>,
    body: Option<Vec<u8>>,
}

impl RequestBuilder {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> HttpResult<Self> {
        let json_bytes =
            serde_json::to_vec(value).map_err(|e| RequestError::Encode(e.to_string()))?;
        self.body = Some(json_bytes);
        self.headers
            .insert("content-type".to_owned(), "application/json".to_owned());
        Ok(self)
    }

    /// Send the request and return a Send-safe future.
    pub async fn send(self) -> HttpResult<Response> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.send_native().await
        }

        #[cfg(target_arch = "wasm32")]
        {
            self.send_wasm().await
        }
    }

    fn into_reqwest(self) -> reqwest::RequestBuilder {
        let client = reqwest::Client::new();

        let mut request = match self.method {
            Method::Get => client.get(&self.url),
            Method::Post => client.post(&self.url),
            Method::Put => client.put(&self.url),
            Method::Delete => client.delete(&self.url),
        };

        // Cookies of the page's origin go along, nothing cross-site.
        #[cfg(target_arch = "wasm32")]
        {
            request = request.fetch_credentials_same_origin();
        }

        for (name, value) in &self.headers {
            request = request.header(name, value);
        }

        if let Some(body) = self.body {
            request = request.body(body);
        }

        request
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn send_native(self) -> HttpResult<Response> {
        execute(self.into_reqwest()).await
    }

    #[cfg(target_arch = "wasm32")]
    async fn send_wasm(self) -> HttpResult<Response> {
        let (tx, rx) = flume::bounded::<HttpResult<Response>>(1);
        let request = self.into_reqwest();

        // This closure is NOT Send, but spawn_local doesn't require Send
        wasm_bindgen_futures::spawn_local(async move {
            let result = execute(request).await;
            // Receiver dropped means nobody is waiting anymore.
            drop(tx.send_async(result).await);
        });

        rx.recv_async()
            .await
            .map_err(|_disconnected| RequestError::Network("Request cancelled".to_owned()))?
    }
}

async fn execute(request: reqwest::RequestBuilder) -> HttpResult<Response> {
    let response = request.send().await.map_err(|e| network_error(&e))?;

    let status = response.status().as_u16();

    let body = response
        .bytes()
        .await
        .map_err(|e| network_error(&e))?
        .to_vec();

    Ok(Response { status, body })
}

/// Flattens the error and its sources, since reqwest's top-level message
/// rarely names the actual cause.
fn network_error(err: &reqwest::Error) -> RequestError {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    RequestError::Network(message)
}

/// Sends `data` as JSON to `url` with `method` and decodes the JSON reply.
///
/// Every non-GET request carries `content-type: application/json`; only POST
/// and PUT carry the serialized body. A non-2xx status is an error even when
/// the server sent a JSON body along with it.
pub async fn server_request<T, D>(url: &str, data: &D, method: Method) -> HttpResult<T>
where
    T: DeserializeOwned,
    D: Serialize + ?Sized,
{
    let mut request = RequestBuilder::new(method, url);
    if method.carries_body() {
        request = request.json(data)?;
    } else if method != Method::Get {
        request = request.header("content-type", "application/json");
    }

    info!("{method} {url}");
    let response = request.send().await?;
    debug!("{method} {url} -> {}", response.status);

    if !response.is_success() {
        return Err(RequestError::Status {
            status: response.status,
        });
    }

    response.json()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_is_success() {
        let response = Response {
            status: 201,
            body: Vec::new(),
        };
        assert!(response.is_success());

        let response = Response {
            status: 404,
            body: Vec::new(),
        };
        assert!(!response.is_success());
    }

    #[test]
    fn test_response_json_shape_mismatch_is_decode_error() {
        #[derive(Debug, serde::Deserialize)]
        struct Expected {
            #[expect(dead_code, reason = "only the decode failure matters")]
            success: bool,
        }

        let response = Response {
            status: 200,
            body: br#"{"message": "hello"}"#.to_vec(),
        };

        let result = response.json::<Expected>();
        assert!(matches!(result, Err(RequestError::Decode(_))));
    }

    #[test]
    fn test_request_builder_json_sets_content_type() {
        #[derive(serde::Serialize)]
        struct Body {
            first_name: String,
        }

        let builder = RequestBuilder::new(Method::Post, "https://example.com/users")
            .json(&Body {
                first_name: "Ada".to_owned(),
            })
            .expect("body should serialize");

        assert_eq!(
            builder.headers.get("content-type"),
            Some(&"application/json".to_owned())
        );
        assert_eq!(
            builder.body.as_deref(),
            Some(br#"{"first_name":"Ada"}"#.as_slice())
        );
    }

    #[test]
    fn test_only_post_and_put_carry_body() {
        assert!(Method::Post.carries_body());
        assert!(Method::Put.carries_body());
        assert!(!Method::Delete.carries_body());
        assert!(!Method::Get.carries_body());
    }
}
