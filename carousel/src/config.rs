//! Carousel tuning parameters.
//!
//! Defaults come from [`crate::consts`]. The `site` crate embeds this struct
//! in its page configuration, so any field can be overridden from the JSON
//! config block without touching the others.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{DRAG_SLOP_PX, RESIZE_DEBOUNCE_MS, SLIDE_GAP_PX, SWIPE_DISTANCE_RATIO, SWIPE_VELOCITY_PX_PER_MS};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Gap between slides in CSS pixels.
    pub gap_px: f64,
    /// Fraction of viewport width that counts as a swipe.
    pub distance_ratio: f64,
    /// Release velocity (px/ms) that counts as a flick.
    pub velocity_threshold: f64,
    /// Drag distance after which page scrolling is suppressed.
    pub drag_slop_px: f64,
    /// Resize debounce in milliseconds.
    pub resize_debounce_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            gap_px: SLIDE_GAP_PX,
            distance_ratio: SWIPE_DISTANCE_RATIO,
            velocity_threshold: SWIPE_VELOCITY_PX_PER_MS,
            drag_slop_px: DRAG_SLOP_PX,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
        }
    }
}
