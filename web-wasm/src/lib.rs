//! kaitori-diff ranking view (WASM)

pub mod app;
pub mod api;
pub mod dom;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = app::start() {
        gloo::console::error!(format!("起動失敗: {}", e));
    }
}
