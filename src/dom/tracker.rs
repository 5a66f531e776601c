use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event};

use super::dispatch::{detail_object, fire_event};
use super::sample;
use super::selector::Selector;
use crate::detector::{SwipeDetector, SwipeEvent};
use crate::model::{SwipeConfig, SwipeOptions};
use crate::util::clog;

struct Binding {
    element: Element,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// Swipe detection bound to a set of elements.
///
/// Listeners stay attached while the tracker is alive; dropping it detaches
/// them. Call [`Tracker::forget`] to keep them for the rest of the page's life.
pub struct Tracker {
    elements: Vec<Element>,
    detector: Rc<SwipeDetector<Element>>,
    bindings: Vec<Binding>,
}

impl Tracker {
    pub fn new(selector: impl Into<Selector>, config: SwipeConfig) -> Self {
        let elements = selector.into().resolve();
        let detector = Rc::new(SwipeDetector::new(config));
        let mut tracker = Self {
            elements,
            detector,
            bindings: Vec::new(),
        };
        tracker.bind();
        if !tracker.elements.is_empty() {
            clog(&format!(
                "swipe: bound {} element(s) via {:?}",
                tracker.elements.len(),
                config.transport
            ));
        }
        tracker
    }

    pub fn with_options(selector: impl Into<Selector>, options: SwipeOptions) -> Self {
        Self::new(selector, options.into())
    }

    fn bind(&mut self) {
        let transport = self.detector.config().transport;
        let emit_dom_events = self.detector.config().emit_dom_events;
        let [start_ev, move_ev, end_ev, cancel_ev] = transport.event_names();

        for (index, el) in self.elements.iter().enumerate() {
            let start_cb = {
                let det = self.detector.clone();
                Closure::wrap(Box::new(move |e: Event| {
                    if let Some(s) = sample::capture(transport, &e) {
                        det.start(sample::key(transport, index, &e), s);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let move_cb = {
                let det = self.detector.clone();
                Closure::wrap(Box::new(move |e: Event| {
                    if let Some(s) = sample::capture(transport, &e) {
                        det.record_move(sample::key(transport, index, &e), s);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let end_cb = {
                let det = self.detector.clone();
                let target = el.clone();
                Closure::wrap(Box::new(move |e: Event| {
                    let key = sample::key(transport, index, &e);
                    let fired = det.end(key, &target, |emission| {
                        if emit_dom_events {
                            fire_event(&target, emission.name, &detail_object(&emission.detail));
                        }
                    });
                    if let Some(first) = fired.first() {
                        clog(&format!(
                            "swipe: {} {:.0}px in {:.0}ms",
                            first.name, first.detail.distance, first.detail.duration
                        ));
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let cancel_cb = {
                let det = self.detector.clone();
                Closure::wrap(Box::new(move |e: Event| {
                    det.cancel(sample::key(transport, index, &e));
                }) as Box<dyn FnMut(_)>)
            };

            for (event, callback) in [
                (start_ev, start_cb),
                (move_ev, move_cb),
                (end_ev, end_cb),
                (cancel_ev, cancel_cb),
            ] {
                el.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                    .ok();
                self.bindings.push(Binding {
                    element: el.clone(),
                    event,
                    callback,
                });
            }
        }
    }

    /// Elements resolved from the selector, in document/caller order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn config(&self) -> &SwipeConfig {
        self.detector.config()
    }

    /// Subscribes `callback` to `name` (`swipe`, `swipeLeft`, ...) for every
    /// bound element. On a tracker with no elements this never fires.
    pub fn on(&self, name: &str, callback: impl Fn(&SwipeEvent<Element>) + 'static) -> &Self {
        self.detector.on(name, callback);
        self
    }

    /// Removes every listener this tracker added.
    pub fn detach(&mut self) {
        for b in self.bindings.drain(..) {
            let _ = b
                .element
                .remove_event_listener_with_callback(b.event, b.callback.as_ref().unchecked_ref());
        }
    }

    /// Leaves the listeners attached for the lifetime of the page.
    pub fn forget(mut self) {
        for b in std::mem::take(&mut self.bindings) {
            b.callback.forget();
        }
    }
}

impl Drop for Tracker {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selectors_build_inert_trackers() {
        for selector in [Selector::None, Selector::from(""), Selector::from(Vec::new())] {
            let tracker = Tracker::new(selector, SwipeConfig::default());
            tracker.on("swipe", |_| {}).on("swipeLeft", |_| {});
            assert!(tracker.elements().is_empty());
            assert_eq!(tracker.detector.in_flight(), 0);
        }
    }

    #[test]
    fn inert_tracker_keeps_configured_thresholds() {
        let tracker = Tracker::with_options(
            None::<Element>,
            SwipeOptions {
                sensitivity: Some(40.0),
                time_out: None,
            },
        );
        assert_eq!(tracker.config().sensitivity, 40.0);
        assert_eq!(tracker.config().time_out, 500.0);
        tracker.forget();
    }
}
