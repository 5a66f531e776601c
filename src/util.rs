// Console logging helper shared by the tracker and the demo.

pub fn clog(msg: &str) {
    // Release builds stay quiet
    if cfg!(debug_assertions) {
        web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
    }
}
