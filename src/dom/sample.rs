use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, PointerEvent, TouchEvent};

use crate::model::{TouchSample, Transport};
use crate::state::InteractionKey;

/// First touch point's page coordinates for touch events, the pointer's own
/// page coordinates otherwise. `None` when a touch event carries no touches.
pub fn capture(transport: Transport, event: &Event) -> Option<TouchSample> {
    let time = event.time_stamp();
    match transport {
        Transport::Touch => {
            let t0 = event.unchecked_ref::<TouchEvent>().touches().item(0)?;
            Some(TouchSample::new(
                page_coord(&t0, "pageX", t0.page_x()),
                page_coord(&t0, "pageY", t0.page_y()),
                time,
            ))
        }
        Transport::Pointer => {
            let e = event.unchecked_ref::<PointerEvent>();
            Some(TouchSample::new(
                page_coord(e, "pageX", e.page_x()),
                page_coord(e, "pageY", e.page_y()),
                time,
            ))
        }
    }
}

// web-sys exposes page coordinates as i32; browsers report sub-pixel values
fn page_coord(source: &JsValue, field: &str, whole: i32) -> f64 {
    let reported = Reflect::get(source, &JsValue::from_str(field))
        .ok()
        .and_then(|v| v.as_f64());
    prefer_fractional(reported, whole)
}

fn prefer_fractional(reported: Option<f64>, whole: i32) -> f64 {
    reported.unwrap_or(whole as f64)
}

pub fn key(transport: Transport, element: usize, event: &Event) -> InteractionKey {
    match transport {
        Transport::Touch => InteractionKey::element(element),
        Transport::Pointer => {
            InteractionKey::pointer(element, event.unchecked_ref::<PointerEvent>().pointer_id())
        }
    }
}
