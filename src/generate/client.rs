//! Transport for the Gemini `generateContent` call: blocking reqwest
//! on native, browser `fetch` on wasm32.

use serde_json::Value;

use super::{GenerationError, endpoint_url, extract_text};

#[cfg(not(target_arch = "wasm32"))]
pub fn api_key() -> Result<String, GenerationError> {
    std::env::var("GOOGLE_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| GenerationError::Transport("GOOGLE_API_KEY is not set".to_owned()))
}

#[cfg(target_arch = "wasm32")]
pub fn api_key() -> Result<String, GenerationError> {
    key_from_meta()
        .or_else(key_from_local_storage)
        .ok_or_else(|| {
            GenerationError::Transport(
                "no API key: set a <meta name='topic-quiz-api-key'> tag \
                 or the `topic_quiz_api_key` localStorage entry"
                    .to_owned(),
            )
        })
}

#[cfg(target_arch = "wasm32")]
fn key_from_meta() -> Option<String> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let meta = document
        .query_selector("meta[name='topic-quiz-api-key']")
        .ok()??;

    meta.get_attribute("content").filter(|k| !k.trim().is_empty())
}

#[cfg(target_arch = "wasm32")]
fn key_from_local_storage() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage
        .get_item("topic_quiz_api_key")
        .ok()?
        .filter(|k| !k.trim().is_empty())
}

/// Sends the request and returns the concatenated candidate text
/// (possibly empty; the caller decides what an empty response means).
#[cfg(not(target_arch = "wasm32"))]
pub fn generate_content(api_key: &str, body: &Value) -> Result<String, GenerationError> {
    let client = reqwest::blocking::Client::new();
    let response = client
        .post(endpoint_url(api_key))
        .json(body)
        .send()
        .map_err(|err| GenerationError::Transport(format!("request failed: {err}")))?;

    if !response.status().is_success() {
        let status = response.status();
        let body_text = response.text().unwrap_or_default();
        return Err(GenerationError::Transport(format!(
            "model service returned HTTP {status}: {}",
            body_text.trim()
        )));
    }

    let value: Value = response
        .json()
        .map_err(|err| GenerationError::Transport(format!("invalid JSON from model service: {err}")))?;
    Ok(extract_text(&value))
}

#[cfg(target_arch = "wasm32")]
pub async fn generate_content(api_key: &str, body: &Value) -> Result<String, GenerationError> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let payload = serde_json::to_string(body)
        .map_err(|err| GenerationError::Transport(format!("could not serialize payload: {err}")))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&payload));

    let request = Request::new_with_str_and_init(&endpoint_url(api_key), &opts)
        .map_err(|err| GenerationError::Transport(format!("could not build request: {err:?}")))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|err| GenerationError::Transport(format!("could not set headers: {err:?}")))?;

    let window = web_sys::window()
        .ok_or_else(|| GenerationError::Transport("no window in wasm environment".to_owned()))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| GenerationError::Transport(format!("fetch failed: {err:?}")))?;
    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| GenerationError::Transport("fetch returned a non-Response value".to_owned()))?;

    if !response.ok() {
        return Err(GenerationError::Transport(format!(
            "model service returned HTTP {}",
            response.status()
        )));
    }

    let text_promise = response
        .text()
        .map_err(|err| GenerationError::Transport(format!("could not read body: {err:?}")))?;
    let text_value = JsFuture::from(text_promise)
        .await
        .map_err(|err| GenerationError::Transport(format!("could not read body: {err:?}")))?;
    let body_text = text_value.as_string().unwrap_or_default();

    let value: Value = serde_json::from_str(&body_text)
        .map_err(|err| GenerationError::Transport(format!("invalid JSON from model service: {err}")))?;
    Ok(extract_text(&value))
}
