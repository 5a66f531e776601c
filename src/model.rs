//! Core data types for swipe detection.
//! Nothing in here touches the DOM, so the whole module is testable on the host.

use serde::{Deserialize, Serialize};

/// Generic event fired alongside every direction-specific swipe.
pub const SWIPE: &str = "swipe";

pub const DEFAULT_SENSITIVITY: f64 = 20.0;
pub const DEFAULT_TIME_OUT: f64 = 500.0;

/// Snapshot of a single touch/pointer event, in page coordinates.
/// `time` is the event's `timeStamp` in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TouchSample {
    pub x: f64,
    pub y: f64,
    pub time: f64,
}

impl TouchSample {
    pub fn new(x: f64, y: f64, time: f64) -> Self {
        Self { x, y, time }
    }

    fn coord(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Dominant axis of a displacement. Ties go to `Y`.
    pub fn dominant(dx: f64, dy: f64) -> Self {
        if dx > dy { Axis::X } else { Axis::Y }
    }

    /// `Left`/`Up` when the start coordinate is past the end one, else `Right`/`Down`.
    fn direction(self, decreasing: bool) -> Direction {
        match (self, decreasing) {
            (Axis::X, true) => Direction::Left,
            (Axis::X, false) => Direction::Right,
            (Axis::Y, true) => Direction::Up,
            (Axis::Y, false) => Direction::Down,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Lowercase name used in event payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Name of the direction-specific event, e.g. `swipeLeft`.
    pub fn event_name(&self) -> &'static str {
        match self {
            Direction::Left => "swipeLeft",
            Direction::Right => "swipeRight",
            Direction::Up => "swipeUp",
            Direction::Down => "swipeDown",
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Direction::Left => "←",
            Direction::Right => "→",
            Direction::Up => "↑",
            Direction::Down => "↓",
        }
    }
}

/// Which DOM events feed the detector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// touchstart / touchmove / touchend (+ touchcancel)
    #[default]
    Touch,
    /// pointerdown / pointermove / pointerup (+ pointercancel)
    Pointer,
}

impl Transport {
    /// Event names in start, move, end, cancel order.
    pub fn event_names(&self) -> [&'static str; 4] {
        match self {
            Transport::Touch => ["touchstart", "touchmove", "touchend", "touchcancel"],
            Transport::Pointer => ["pointerdown", "pointermove", "pointerup", "pointercancel"],
        }
    }
}

/// How in-flight interactions are separated from each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Isolation {
    /// One slot per element (and per pointer id with the pointer transport).
    #[default]
    PerElement,
    /// A single slot shared by every bound element. Interleaved gestures on
    /// different elements overwrite each other's samples.
    Shared,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwipeConfig {
    /// Minimum displacement in px along the dominant axis (exclusive).
    pub sensitivity: f64,
    /// Maximum elapsed ms between start and last move (exclusive).
    pub time_out: f64,
    pub transport: Transport,
    pub isolation: Isolation,
    /// Re-dispatch every swipe as a `CustomEvent` on the originating element.
    pub emit_dom_events: bool,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            time_out: DEFAULT_TIME_OUT,
            transport: Transport::Touch,
            isolation: Isolation::PerElement,
            emit_dom_events: true,
        }
    }
}

impl SwipeConfig {
    /// Overlay caller options on this config. Missing, zero and NaN values keep
    /// the current threshold.
    pub fn with_options(mut self, options: &SwipeOptions) -> Self {
        self.sensitivity = or_fallback(options.sensitivity, self.sensitivity);
        self.time_out = or_fallback(options.time_out, self.time_out);
        self
    }
}

fn or_fallback(value: Option<f64>, fallback: f64) -> f64 {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => v,
        _ => fallback,
    }
}

/// Partial thresholds as passed by callers (`{ sensitivity?, timeOut? }`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeOptions {
    pub sensitivity: Option<f64>,
    #[serde(rename = "timeOut")]
    pub time_out: Option<f64>,
}

impl From<SwipeOptions> for SwipeConfig {
    fn from(options: SwipeOptions) -> Self {
        SwipeConfig::default().with_options(&options)
    }
}

/// Outcome of evaluating a start/move pair at end-of-gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeResult {
    pub dx: f64,
    pub dy: f64,
    pub elapsed: f64,
    pub axis: Axis,
    pub direction: Direction,
    pub qualifies: bool,
}

impl SwipeResult {
    pub fn evaluate(start: &TouchSample, last: &TouchSample, config: &SwipeConfig) -> Self {
        let dx = (start.x - last.x).abs();
        let dy = (start.y - last.y).abs();
        let elapsed = (last.time - start.time).abs();
        let axis = Axis::dominant(dx, dy);
        let amount = match axis {
            Axis::X => dx,
            Axis::Y => dy,
        };
        let qualifies = amount > config.sensitivity && elapsed < config.time_out;
        let direction = axis.direction(start.coord(axis) > last.coord(axis));
        Self {
            dx,
            dy,
            elapsed,
            axis,
            direction,
            qualifies,
        }
    }

    /// Displacement along the dominant axis.
    pub fn distance(&self) -> f64 {
        match self.axis {
            Axis::X => self.dx,
            Axis::Y => self.dy,
        }
    }

    pub fn detail(&self) -> SwipeDetail {
        SwipeDetail {
            direction: self.direction,
            duration: self.elapsed,
            distance: self.distance(),
        }
    }

    /// Events to fire for this gesture: the direction-specific one, then the
    /// generic `swipe`. Empty when the gesture does not qualify.
    pub fn emissions(&self) -> Vec<Emission> {
        if !self.qualifies {
            return Vec::new();
        }
        let detail = self.detail();
        vec![
            Emission {
                name: self.direction.event_name(),
                detail,
            },
            Emission { name: SWIPE, detail },
        ]
    }
}

/// Payload carried by every swipe event.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwipeDetail {
    pub direction: Direction,
    /// ms
    pub duration: f64,
    /// px
    pub distance: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Emission {
    pub name: &'static str,
    pub detail: SwipeDetail,
}
