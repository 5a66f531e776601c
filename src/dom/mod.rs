//! Browser binding for the detector: resolves targets, captures samples from
//! touch/pointer events and re-emits swipes on the page.

pub mod dispatch;
pub mod sample;
pub mod selector;
pub mod tracker;

pub use dispatch::{detail_object, fire_event};
pub use selector::Selector;
pub use tracker::Tracker;
