//! WASM bridge for the quadra core engine.
//!
//! The frontend calls `solve` and `sample` with the raw (pre-sanitized)
//! input string. Results cross the boundary as serde-serialized values;
//! every engine failure becomes a `{ message }` object, never a thrown
//! panic.

use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

/// Error payload handed to the frontend.
#[derive(Serialize)]
struct ErrorPayload {
    message: String,
}

fn error_value(message: String) -> JsValue {
    to_value(&ErrorPayload {
        message: message.clone(),
    })
    .unwrap_or_else(|_| JsValue::from_str(&message))
}

/// Solves the input and returns the structured `Solution`
/// (`{ kind: "value" | "integral" | "ode_curve", ... }`).
#[wasm_bindgen]
pub fn solve(input: &str) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let solution = quadra_core::solve::solve(input).map_err(|e| error_value(e.to_string()))?;
    to_value(&solution).map_err(|e| error_value(format!("Serialization error: {e}")))
}

/// Solves the input and returns the rendered result text for the result
/// area.
#[wasm_bindgen]
pub fn solve_display(input: &str) -> Result<String, JsValue> {
    console_error_panic_hook::set_once();

    quadra_core::solve::solve(input)
        .map(|solution| solution.to_string())
        .map_err(|e| error_value(e.to_string()))
}

/// Samples the input over the graph window. Returns an array of
/// `{ x, y }` points where `y` is `null` at gaps; never fails.
#[wasm_bindgen]
pub fn sample(input: &str) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let curve = quadra_core::graph::sample(input);
    to_value(&curve).map_err(|e| error_value(format!("Serialization error: {e}")))
}
