#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// Measured geometry of the carousel, in CSS pixels.
///
/// `slide_width` is the width of one slide, `container_width` the visible
/// carousel box, `viewport_width` the window (used for the swipe threshold).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Layout {
    pub slide_width: f64,
    pub container_width: f64,
    pub viewport_width: f64,
}

impl Layout {
    #[must_use]
    pub fn new(slide_width: f64, container_width: f64, viewport_width: f64) -> Self {
        Self { slide_width, container_width, viewport_width }
    }

    /// Track translation that centers slide `index` in the container.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn offset_for(&self, index: usize, gap: f64) -> f64 {
        let offset = -(index as f64) * (self.slide_width + gap);
        let center = (self.container_width - self.slide_width) / 2.0;
        offset + center
    }

    /// Minimum drag distance that commits a slide change.
    #[must_use]
    pub fn swipe_threshold(&self, ratio: f64) -> f64 {
        self.viewport_width * ratio
    }
}
