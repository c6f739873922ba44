use wasm_bindgen::prelude::*;

pub mod deck;
pub mod game;
pub mod hand;
pub mod report;
pub mod round;

#[wasm_bindgen]
pub fn play_round(params: &JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let input: round::RoundInput = serde_wasm_bindgen::from_value(params.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;

    let result = round::run(input)
        .map_err(|err| JsValue::from_str(&format!("Round failed: {err}")))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}
