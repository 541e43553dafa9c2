#![cfg(target_arch = "wasm32")]

use crate::create_app;
use crate::settings::DashboardSettings;
use crate::store::{DatasetSource, Store};
use eframe::WebRunner;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Launch the dashboard on the bundled dataset inside the canvas
/// referenced by `index.html`.
#[wasm_bindgen]
pub async fn start() -> Result<(), JsValue> {
    use web_sys::HtmlCanvasElement;

    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .ok_or("No window")?
        .document()
        .ok_or("No document")?;

    let canvas = document
        .get_element_by_id("the_canvas_id")
        .ok_or("Canvas not found")?
        .dyn_into::<HtmlCanvasElement>()?;

    let source = DatasetSource::Bundled;
    let session = source
        .open()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let store = Store::new(session, source, DashboardSettings::default());

    let web_options = eframe::WebOptions::default();

    WebRunner::new()
        .start(canvas, web_options, Box::new(|cc| Ok(Box::new(create_app(cc, store)))))
        .await
}
