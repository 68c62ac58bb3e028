//! WASM bindings for the wordcloud-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.

use wasm_bindgen::prelude::*;

use crate::output::{layout_json, CloudOutput};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

fn respond(input: &str, config: Option<&str>) -> String {
    let output = match layout_json(input, config) {
        Ok(output) => output,
        Err(e) => {
            console_error(&format!("Error laying out word cloud: {}", e));
            CloudOutput::from_error(&e)
        }
    };
    serde_json::to_string(&output)
        .unwrap_or_else(|_| "{\"items\": [], \"error\": \"serialization failed\"}".to_string())
}

/// Lay out the report's `wordCloud` section with the default settings.
/// Returns the JSON-encoded `CloudOutput`.
#[wasm_bindgen]
pub fn layout_word_cloud(input: &str) -> String {
    respond(input, None)
}

/// Same as `layout_word_cloud`, with a partial camelCase config object,
/// e.g. `{"limit": 24, "padding": 2.0}`.
#[wasm_bindgen]
pub fn layout_word_cloud_with_config(input: &str, config: &str) -> String {
    respond(input, Some(config))
}
