//! Single-pointer swipe detection for DOM elements.
//!
//! A [`Tracker`] binds touch (or pointer) listeners to a set of elements and,
//! when a gesture ends, fires `swipeLeft`/`swipeRight`/`swipeUp`/`swipeDown`
//! followed by a generic `swipe`, both carrying
//! `{ direction, duration, distance }`.
//!
//! ```ignore
//! let tracker = Tracker::new(".card", SwipeConfig::default());
//! tracker.on("swipeLeft", |e| clog(&format!("{:?}", e.detail)));
//! tracker.forget();
//! ```

pub mod adapter;
pub mod detector;
pub mod dom;
pub mod model;
pub mod state;
pub mod util;

pub use detector::{SwipeDetector, SwipeEvent};
pub use dom::{Selector, Tracker};
pub use model::{
    Direction, Isolation, SWIPE, SwipeConfig, SwipeDetail, SwipeOptions, TouchSample, Transport,
};
