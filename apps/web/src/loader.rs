use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::error::LoadError;
use crate::model::TicketDataset;

/// Fetches and parses the dataset once. The body is parsed as text so the
/// file's key order survives; a JS object would reorder numeric keys.
pub async fn fetch_dataset(url: &str) -> Result<TicketDataset, LoadError> {
    let window = web_sys::window().ok_or(LoadError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| LoadError::Request(describe(&e)))?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| LoadError::Request(describe(&e)))?;

    let response = response_value
        .dyn_into::<Response>()
        .map_err(|e| LoadError::Request(describe(&e)))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let body = response.text().map_err(|e| LoadError::Body(describe(&e)))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| LoadError::Body(describe(&e)))?
        .as_string()
        .ok_or_else(|| LoadError::Body("body is not text".to_string()))?;

    Ok(TicketDataset::from_json(&text)?)
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
