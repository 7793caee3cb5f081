//! Rendering: writes engine actions onto the carousel's DOM elements.
//!
//! This module is the only place that touches track styles and the `active`
//! class. It never mutates engine state.
//!
//! All fallible DOM calls propagate errors via `Result<_, JsValue>`; the
//! caller in [`crate::dom`] logs them.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement};

use crate::consts::SNAP_TRANSITION;
use crate::engine::{Action, Transition};

const ACTIVE_CLASS: &str = "active";
const DOT_CLASS: &str = "carousel-dot";

/// CSS `transition` value for a track transition mode.
#[must_use]
pub fn transition_css(transition: Transition) -> &'static str {
    match transition {
        Transition::None => "none",
        Transition::Snap => SNAP_TRANSITION,
    }
}

/// CSS `transform` value for a horizontal track offset.
#[must_use]
pub fn translate_x(px: f64) -> String {
    format!("translateX({px}px)")
}

/// Accessible label for the dot that jumps to slide `index` (0-based).
#[must_use]
pub fn dot_label(index: usize) -> String {
    format!("Go to slide {}", index + 1)
}

/// Apply `actions` in order. Returns `true` if any action asked to prevent the event default.
///
/// # Errors
///
/// Returns `Err` if a style or class update fails.
pub fn apply(
    track: &HtmlElement,
    slides: &[HtmlElement],
    dots: &[Element],
    actions: &[Action],
) -> Result<bool, JsValue> {
    let mut prevent_default = false;
    for action in actions {
        match action {
            Action::SetTransition(transition) => {
                track.style().set_property("transition", transition_css(*transition))?;
            }
            Action::SetTransform(px) => {
                track.style().set_property("transform", &translate_x(*px))?;
            }
            Action::SetActive(index) => {
                for (i, dot) in dots.iter().enumerate() {
                    dot.class_list().toggle_with_force(ACTIVE_CLASS, i == *index)?;
                }
                for (i, slide) in slides.iter().enumerate() {
                    slide.class_list().toggle_with_force(ACTIVE_CLASS, i == *index)?;
                }
            }
            Action::PreventDefault => prevent_default = true,
        }
    }
    Ok(prevent_default)
}

/// Create one dot button per slide inside `host`; the first starts active.
///
/// # Errors
///
/// Returns `Err` if element creation or insertion fails.
pub fn create_dots(document: &Document, host: &Element, count: usize) -> Result<Vec<Element>, JsValue> {
    let mut dots = Vec::with_capacity(count);
    for index in 0..count {
        let dot = document.create_element("button")?;
        dot.class_list().add_1(DOT_CLASS)?;
        dot.set_attribute("aria-label", &dot_label(index))?;
        if index == 0 {
            dot.class_list().add_1(ACTIVE_CLASS)?;
        }
        host.append_child(&dot)?;
        dots.push(dot);
    }
    Ok(dots)
}
