use scrawl_core::{ScrawlError, TransformOptions, TransformRequest, TransformResponse};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

// ============================================================================
// Config
// ============================================================================

/// Reads `TransformOptions` from a JS object, falling back to defaults when
/// the value is missing or malformed.
fn parse_config(config: JsValue) -> TransformOptions {
    if config.is_undefined() || config.is_null() {
        return TransformOptions::default();
    }
    serde_wasm_bindgen::from_value(config).unwrap_or_default()
}

fn to_js_error(err: &ScrawlError) -> JsError {
    JsError::new(err.user_message())
}

fn to_js_response(response: &TransformResponse) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(response)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

// ============================================================================
// Transform API
// ============================================================================

/// Validates, escapes and transforms raw user text.
///
/// # Arguments
///
/// * `text` - Raw text typed by the user
/// * `config` - Optional options object (`title_max_chars`,
///   `section_title_max_chars`, `keep_entities`, or their camelCase forms)
///
/// # Returns
///
/// `{ formatted_text: string }`, or throws `"No text provided"` when the text
/// is blank.
///
/// # Example (JavaScript)
///
/// ```javascript
/// import { transform } from './scrawl_wasm';
///
/// const { formatted_text } = transform('Groceries:\n- milk', { keepEntities: true });
/// preview.innerHTML = formatted_text;
/// ```
#[wasm_bindgen]
pub fn transform(text: &str, config: JsValue) -> Result<JsValue, JsError> {
    let options = parse_config(config);
    let response = scrawl_core::handle_transform(&TransformRequest::new(text), &options)
        .map_err(|e| to_js_error(&e))?;
    to_js_response(&response)
}

/// Same as [`transform`], taking the request as a JSON body
/// (`{"text": "..."}`).
#[wasm_bindgen(js_name = transform_json)]
pub fn transform_json(body: &str, config: JsValue) -> Result<JsValue, JsError> {
    let options = parse_config(config);
    let response =
        scrawl_core::handle_transform_json(body, &options).map_err(|e| to_js_error(&e))?;
    to_js_response(&response)
}

/// Transforms already-escaped text without validation.
#[wasm_bindgen(js_name = transform_text)]
pub fn transform_text(text: &str, config: JsValue) -> String {
    scrawl_core::transform_with_options(text, &parse_config(config))
}

/// Renders the print view body; empty text gives an empty string.
#[wasm_bindgen(js_name = render_print)]
pub fn render_print(text: &str, config: JsValue) -> String {
    scrawl_core::render_print(text, &parse_config(config))
}
