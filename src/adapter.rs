//! JS-facing surface. Nothing here runs unless the embedding page uses it:
//! `new Swipe(selector, options)` from the wasm module, and `registerPlugin`
//! to add a chainable `Swipe(options)` method to a jQuery-style host.

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::prelude::*;

use crate::dom::{Selector, Tracker};
use crate::model::SwipeOptions;

/// Reads `{ sensitivity?, timeOut? }`. Non-numeric fields count as absent.
pub fn options_from_js(options: &JsValue) -> SwipeOptions {
    if !options.is_object() {
        return SwipeOptions::default();
    }
    let number = |field: &str| {
        Reflect::get(options, &JsValue::from_str(field))
            .ok()
            .and_then(|v| v.as_f64())
    };
    SwipeOptions {
        sensitivity: number("sensitivity"),
        time_out: number("timeOut"),
    }
}

/// Tracker handle exported to JS. Freeing it detaches its listeners.
#[wasm_bindgen(js_name = Swipe)]
pub struct JsSwipe {
    tracker: Tracker,
}

#[wasm_bindgen(js_class = Swipe)]
impl JsSwipe {
    #[wasm_bindgen(constructor)]
    pub fn new(selector: JsValue, options: JsValue) -> JsSwipe {
        let tracker = Tracker::with_options(Selector::from_js(&selector), options_from_js(&options));
        JsSwipe { tracker }
    }

    #[wasm_bindgen(getter)]
    pub fn els(&self) -> Array {
        self.tracker.elements().iter().collect()
    }

    /// Adds `callback` as a DOM listener for `event` on every bound element.
    /// Returns `undefined`, so calls do not chain: a wasm-bindgen method cannot
    /// hand back the wrapper it was invoked on.
    pub fn on(&self, event: &str, callback: &Function) {
        for el in self.tracker.elements() {
            el.add_event_listener_with_callback(event, callback).ok();
        }
    }
}

/// Installs `host.fn.Swipe(options)`, which binds a permanent tracker to the
/// host's current selection and returns the selection for chaining.
#[wasm_bindgen(js_name = registerPlugin)]
pub fn register_plugin(host: &JsValue) -> Result<(), JsValue> {
    let proto = Reflect::get(host, &JsValue::from_str("fn"))?;
    if !proto.is_object() && !proto.is_function() {
        return Err(JsValue::from_str("swipe: plugin host has no `fn` prototype"));
    }
    let attach = Closure::wrap(Box::new(|selection: JsValue, options: JsValue| {
        Tracker::with_options(Selector::from_js(&selection), options_from_js(&options)).forget();
    }) as Box<dyn FnMut(JsValue, JsValue)>);
    // `this` is only reachable from a JS function body
    let factory = Function::new_with_args(
        "attach",
        "return function (options) { attach(this, options); return this; };",
    );
    let method = factory.call1(&JsValue::NULL, attach.as_ref())?;
    attach.forget();
    Reflect::set(&proto, &JsValue::from_str("Swipe"), &method)?;
    Ok(())
}
