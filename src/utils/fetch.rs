//! Network fetching utilities with timeout support.
//!
//! [`JsonFetcher`] is the seam between API clients and the network:
//! [`BrowserFetcher`] implements it with the Fetch API, tests implement it
//! with canned responses.

use js_sys::{Array, Promise};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout.
///
/// # Returns
/// * `RaceResult::Completed` if promise resolves before timeout
/// * `RaceResult::TimedOut` if timeout occurs first
/// * `RaceResult::Error` if promise rejects
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Resolves to undefined, which marks the timeout branch
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(error_message(&e)),
    }
}

/// Extract a readable message from a rejected promise value or thrown JS error.
pub(crate) fn error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| "Unknown error".to_string())
}

// =============================================================================
// Fetcher Abstraction
// =============================================================================

/// Source of JSON documents addressed by URL.
#[allow(async_fn_in_trait)]
pub trait JsonFetcher {
    /// GET `url` and deserialize the body as `T`.
    ///
    /// Non-2xx responses must map to [`FetchError::HttpError`].
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError>;
}

/// [`JsonFetcher`] backed by the browser Fetch API.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserFetcher {
    /// Value for the `Accept` header, if any.
    pub accept: Option<&'static str>,
}

impl BrowserFetcher {
    pub fn with_accept(accept: &'static str) -> Self {
        Self {
            accept: Some(accept),
        }
    }
}

impl JsonFetcher for BrowserFetcher {
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let text = fetch_url(url, self.accept).await?;
        serde_json::from_str(&text).map_err(|e| FetchError::JsonParseError(e.to_string()))
    }
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// Fetch text from a URL using the Fetch API with timeout.
///
/// Uses [`race_with_timeout`] to implement timeout behavior. If the request
/// takes longer than `FETCH_TIMEOUT_MS`, returns `FetchError::Timeout`.
async fn fetch_url(url: &str, accept: Option<&str>) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    if let Some(accept) = accept {
        request
            .headers()
            .set("Accept", accept)
            .map_err(|_| FetchError::RequestCreationFailed)?;
    }

    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(FetchError::Timeout),
        RaceResult::Error(msg) => Err(FetchError::NetworkError(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;

            if !resp.ok() {
                return Err(FetchError::HttpError(resp.status()));
            }

            let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
                .await
                .map_err(|_| FetchError::ResponseReadFailed)?;

            text.as_string().ok_or(FetchError::InvalidContent)
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn error_message_reads_js_error() {
        let err: JsValue = js_sys::Error::new("Write permission denied.").into();
        assert_eq!(error_message(&err), "Write permission denied.");
    }

    #[wasm_bindgen_test]
    fn error_message_passes_strings_through() {
        assert_eq!(error_message(&JsValue::from_str("rejected")), "rejected");
        assert_eq!(error_message(&JsValue::NULL), "Unknown error");
    }
}
