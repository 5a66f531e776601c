use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, CustomEventInit, Element, Event};

use crate::model::SwipeDetail;

/// `{ direction, duration, distance }` as a plain JS object.
pub fn detail_object(detail: &SwipeDetail) -> JsValue {
    let obj = Object::new();
    let _ = Reflect::set(&obj, &"direction".into(), &detail.direction.as_str().into());
    let _ = Reflect::set(&obj, &"duration".into(), &detail.duration.into());
    let _ = Reflect::set(&obj, &"distance".into(), &detail.distance.into());
    obj.into()
}

/// Dispatches `name` on `el` with `detail` attached. Hosts without a usable
/// `CustomEvent` constructor get a plain `Event` with a `detail` property.
pub fn fire_event(el: &Element, name: &str, detail: &JsValue) {
    let Some(event) = custom_event(name, detail).or_else(|| legacy_event(el, name, detail)) else {
        return;
    };
    let _ = el.dispatch_event(&event);
}

fn custom_event(name: &str, detail: &JsValue) -> Option<Event> {
    let init = CustomEventInit::new();
    init.set_detail(detail);
    CustomEvent::new_with_event_init_dict(name, &init)
        .ok()
        .map(|ev| ev.unchecked_into())
}

fn legacy_event(el: &Element, name: &str, detail: &JsValue) -> Option<Event> {
    let event = el.owner_document()?.create_event("Event").ok()?;
    event.init_event_with_bubbles_and_cancelable(name, true, true);
    Reflect::set(&event, &"detail".into(), detail).ok()?;
    Some(event)
}
