//! Default numeric constants for the carousel crate.

// ── Layout ──────────────────────────────────────────────────────

/// Horizontal gap between slides in CSS pixels. Must match the track's CSS `gap`.
pub const SLIDE_GAP_PX: f64 = 24.0;

// ── Gestures ────────────────────────────────────────────────────

/// Fraction of the viewport width a drag must cover to change slides.
pub const SWIPE_DISTANCE_RATIO: f64 = 0.15;

/// Release velocity (px/ms) that changes slides regardless of distance.
pub const SWIPE_VELOCITY_PX_PER_MS: f64 = 0.5;

/// Drag distance after which native scrolling is suppressed.
pub const DRAG_SLOP_PX: f64 = 10.0;

// ── Timing ──────────────────────────────────────────────────────

/// CSS transition used when snapping to a slide.
pub const SNAP_TRANSITION: &str = "transform 0.6s cubic-bezier(0.16, 1, 0.3, 1)";

/// Quiet period before a viewport resize re-centers the active slide.
pub const RESIZE_DEBOUNCE_MS: u32 = 250;
