//! Swipe state machine: Idle -> Starting -> Moving -> Evaluating -> Idle.
//!
//! `SwipeDetector` is generic over the element handle so the whole decision
//! path runs without a browser. The DOM binding in [`crate::dom`] feeds it
//! samples and forwards its emissions to the page.

use std::cell::RefCell;
use std::rc::Rc;

use crate::model::{Emission, SwipeConfig, SwipeDetail, TouchSample};
use crate::state::{InteractionKey, InteractionTable, Observers};

/// What subscribers receive for every fired swipe.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeEvent<T> {
    /// `swipeLeft`, `swipeRight`, `swipeUp`, `swipeDown` or `swipe`.
    pub name: &'static str,
    pub detail: SwipeDetail,
    /// Element whose end-event completed the gesture.
    pub target: T,
}

pub struct SwipeDetector<T> {
    config: SwipeConfig,
    interactions: RefCell<InteractionTable>,
    observers: RefCell<Observers<SwipeEvent<T>>>,
}

impl<T: Clone> SwipeDetector<T> {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            interactions: RefCell::new(InteractionTable::new(config.isolation)),
            observers: RefCell::new(Observers::default()),
        }
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn on(&self, name: &str, callback: impl Fn(&SwipeEvent<T>) + 'static) {
        self.observers.borrow_mut().subscribe(name, Rc::new(callback));
    }

    pub fn start(&self, key: InteractionKey, sample: TouchSample) {
        self.interactions.borrow_mut().begin(key, sample);
    }

    pub fn record_move(&self, key: InteractionKey, sample: TouchSample) {
        self.interactions.borrow_mut().record_move(key, sample);
    }

    /// Drops the interaction without evaluating it.
    pub fn cancel(&self, key: InteractionKey) {
        self.interactions.borrow_mut().finish(key);
    }

    /// End of gesture. Evaluates and clears the interaction for `key`; for a
    /// qualifying swipe, each emission is handed to `dispatch` and then to the
    /// subscribers of its name. Returns the emissions that fired.
    pub fn end(
        &self,
        key: InteractionKey,
        target: &T,
        mut dispatch: impl FnMut(&Emission),
    ) -> Vec<Emission> {
        let interaction = self.interactions.borrow_mut().finish(key);
        let Some(result) = interaction.and_then(|it| it.evaluate(&self.config)) else {
            return Vec::new();
        };
        let emissions = result.emissions();
        for emission in &emissions {
            dispatch(emission);
            let event = SwipeEvent {
                name: emission.name,
                detail: emission.detail,
                target: target.clone(),
            };
            let listeners = self.observers.borrow().listeners(emission.name);
            for listener in listeners {
                listener(&event);
            }
        }
        emissions
    }

    /// Number of gestures currently in flight.
    pub fn in_flight(&self) -> usize {
        self.interactions.borrow().active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Direction, Isolation, SwipeOptions};

    fn s(x: f64, y: f64, t: f64) -> TouchSample {
        TouchSample::new(x, y, t)
    }

    fn recorder(det: &SwipeDetector<&'static str>, name: &str) -> Rc<RefCell<Vec<SwipeEvent<&'static str>>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        det.on(name, move |e| sink.borrow_mut().push(e.clone()));
        seen
    }

    #[test]
    fn right_swipe_fires_specific_then_generic() {
        let det = SwipeDetector::new(SwipeConfig::default());
        let order = Rc::new(RefCell::new(Vec::new()));
        for name in ["swipeRight", "swipe", "swipeLeft"] {
            let order = order.clone();
            det.on(name, move |e: &SwipeEvent<&'static str>| order.borrow_mut().push(e.name));
        }
        let k = InteractionKey::element(0);
        det.start(k, s(0.0, 10.0, 0.0));
        det.record_move(k, s(100.0, 10.0, 80.0));
        let mut dispatched = Vec::new();
        let fired = det.end(k, &"pad", |e| dispatched.push(e.name));
        assert_eq!(fired.len(), 2);
        assert_eq!(dispatched, vec!["swipeRight", "swipe"]);
        assert_eq!(*order.borrow(), vec!["swipeRight", "swipe"]);
        assert_eq!(fired[1].detail.direction, Direction::Right);
        assert_eq!(fired[1].detail.distance, 100.0);
    }

    #[test]
    fn subscribers_see_origin_element() {
        let det = SwipeDetector::new(SwipeConfig::default());
        let seen = recorder(&det, "swipe");
        let a = InteractionKey::element(0);
        det.start(a, s(100.0, 0.0, 0.0));
        det.record_move(a, s(0.0, 0.0, 50.0));
        det.end(a, &"second", |_| {});
        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].target, "second");
        assert_eq!(seen[0].detail.direction, Direction::Left);
    }

    #[test]
    fn tap_without_move_fires_nothing() {
        let det = SwipeDetector::new(SwipeConfig::default());
        let seen = recorder(&det, "swipe");
        let k = InteractionKey::element(0);
        det.start(k, s(0.0, 0.0, 0.0));
        assert!(det.end(k, &"pad", |_| panic!("no dispatch expected")).is_empty());
        assert!(seen.borrow().is_empty());
        assert_eq!(det.in_flight(), 0);
    }

    #[test]
    fn state_resets_after_rejected_gesture() {
        let det = SwipeDetector::new(SwipeConfig::default());
        let seen = recorder(&det, "swipe");
        let k = InteractionKey::element(0);

        det.start(k, s(0.0, 0.0, 0.0));
        det.record_move(k, s(5.0, 0.0, 10.0));
        assert!(det.end(k, &"pad", |_| {}).is_empty());
        assert_eq!(det.in_flight(), 0);

        // a lone move after the reset must not pair with the old start
        det.record_move(k, s(300.0, 0.0, 20.0));
        assert!(det.end(k, &"pad", |_| {}).is_empty());

        det.start(k, s(0.0, 300.0, 1000.0));
        det.record_move(k, s(0.0, 100.0, 1100.0));
        let fired = det.end(k, &"pad", |_| {});
        assert_eq!(fired[0].name, "swipeUp");
        assert_eq!(fired[0].detail.duration, 100.0);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn cancel_discards_gesture() {
        let det = SwipeDetector::new(SwipeConfig::default());
        let k = InteractionKey::element(0);
        det.start(k, s(0.0, 0.0, 0.0));
        det.record_move(k, s(200.0, 0.0, 40.0));
        det.cancel(k);
        assert!(det.end(k, &"pad", |_| {}).is_empty());
    }

    #[test]
    fn custom_thresholds_apply() {
        let cfg = SwipeConfig::from(SwipeOptions {
            sensitivity: Some(150.0),
            time_out: Some(100.0),
        });
        let det = SwipeDetector::new(cfg);
        let k = InteractionKey::element(0);
        det.start(k, s(0.0, 0.0, 0.0));
        det.record_move(k, s(120.0, 0.0, 50.0));
        assert!(det.end(k, &"pad", |_| {}).is_empty());
        det.start(k, s(0.0, 0.0, 0.0));
        det.record_move(k, s(160.0, 0.0, 99.0));
        assert_eq!(det.end(k, &"pad", |_| {}).len(), 2);
    }

    #[test]
    fn isolated_elements_do_not_cross_talk() {
        let det = SwipeDetector::new(SwipeConfig::default());
        let a = InteractionKey::element(0);
        let b = InteractionKey::element(1);
        det.start(a, s(0.0, 0.0, 0.0));
        det.start(b, s(0.0, 0.0, 0.0));
        det.record_move(a, s(100.0, 0.0, 50.0));
        det.record_move(b, s(0.0, 100.0, 50.0));
        assert_eq!(det.end(a, &"a", |_| {})[0].name, "swipeRight");
        assert_eq!(det.end(b, &"b", |_| {})[0].name, "swipeDown");
    }

    #[test]
    fn shared_isolation_mixes_interleaved_gestures() {
        let det = SwipeDetector::new(SwipeConfig {
            isolation: Isolation::Shared,
            ..Default::default()
        });
        let a = InteractionKey::element(0);
        let b = InteractionKey::element(1);
        det.start(a, s(0.0, 0.0, 0.0));
        det.record_move(b, s(0.0, 100.0, 50.0));
        // b's move completes a's gesture; the event lands on whoever ends first
        let fired = det.end(a, &"a", |_| {});
        assert_eq!(fired[0].name, "swipeDown");
        assert!(det.end(b, &"b", |_| {}).is_empty());
    }

    #[test]
    fn shared_start_on_other_element_reuses_pending_move() {
        let det = SwipeDetector::new(SwipeConfig {
            isolation: Isolation::Shared,
            ..Default::default()
        });
        let a = InteractionKey::element(0);
        let b = InteractionKey::element(1);
        det.start(a, s(0.0, 0.0, 0.0));
        det.record_move(a, s(200.0, 0.0, 50.0));
        det.start(b, s(0.0, 0.0, 60.0));
        let fired = det.end(b, &"b", |_| {});
        let names: Vec<_> = fired.iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["swipeRight", "swipe"]);
        assert_eq!(fired[0].detail.duration, 10.0);
    }

    #[test]
    fn callbacks_may_subscribe_while_notified() {
        let det = Rc::new(SwipeDetector::new(SwipeConfig::default()));
        {
            let inner = Rc::downgrade(&det);
            det.on("swipe", move |_| {
                if let Some(d) = inner.upgrade() {
                    d.on("swipe", |_| {});
                }
            });
        }
        let k = InteractionKey::element(0);
        det.start(k, s(0.0, 0.0, 0.0));
        det.record_move(k, s(0.0, 90.0, 10.0));
        assert_eq!(det.end(k, &"pad", |_| {}).len(), 2);
        assert_eq!(det.observers.borrow().len("swipe"), 2);
    }
}
