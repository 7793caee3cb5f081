//! Input model: keys and the gesture state machine.
//!
//! `InputState` is the gesture being tracked between press and release. A
//! drag carries everything needed to compute the live offset and the release
//! velocity; `Animating` marks a snap transition that has been started but
//! has not reported `transitionend` yet.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// A keyboard key as reported by the browser (e.g. `"ArrowLeft"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// The slide step this key requests, if any.
    #[must_use]
    pub fn step(&self) -> Option<Step> {
        match self.0.as_str() {
            "ArrowLeft" => Some(Step::Prev),
            "ArrowRight" => Some(Step::Next),
            _ => None,
        }
    }
}

/// Direction of a single-slide move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Prev,
    Next,
}

/// Internal state for the gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// Nothing in flight; waiting for the next press.
    #[default]
    Idle,
    /// The user is dragging the track.
    Dragging {
        /// Pointer x at press time.
        start_x: f64,
        /// Pointer x at the previous move sample, for velocity.
        last_x: f64,
        /// Timestamp (ms) of the previous sample.
        last_time_ms: f64,
    },
    /// A snap transition is running.
    Animating,
}

impl InputState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}
