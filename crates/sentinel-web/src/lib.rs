use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

mod dom;
mod storage;
mod view;
mod widget;

pub use storage::LocalStorage;
pub use view::DomView;
pub use widget::mount;

/// Initialize the WASM application and mount the chat widget
#[wasm_bindgen(start)]
pub fn init() -> Result<(), JsValue> {
    // Set panic hook for better error messages
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());

    if document()?.get_element_by_id(view::CHAT_BODY_ID).is_none() {
        log::info!("No chat widget on this page");
        return Ok(());
    }

    log::info!("AGi Sentinel widget initialized");
    widget::mount()
}

/// Get the window object
fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window object"))
}

/// Get the document object
fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document object"))
}
