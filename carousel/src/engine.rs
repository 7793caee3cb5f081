use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::config::CarouselConfig;
use crate::input::{InputState, Key, Step};
use crate::layout::Layout;
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Set the track's CSS transition.
    SetTransition(Transition),
    /// Translate the track horizontally by this many pixels.
    SetTransform(f64),
    /// Mark exactly this slide and dot as active.
    SetActive(usize),
    /// Suppress the browser's default handling of the current event.
    PreventDefault,
}

/// Track transition mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Direct manipulation while dragging.
    None,
    /// Eased snap to a slide.
    Snap,
}

/// Core carousel state: everything that does not touch the DOM.
///
/// Separated from [`Carousel`] so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone)]
pub struct CarouselCore {
    pub config: CarouselConfig,
    pub layout: Layout,
    pub input: InputState,
    slide_count: usize,
    current_index: usize,
    current_translate: f64,
    prev_translate: f64,
    velocity: f64,
}

impl CarouselCore {
    #[must_use]
    pub fn new(slide_count: usize, config: CarouselConfig) -> Self {
        Self {
            config,
            layout: Layout::default(),
            input: InputState::Idle,
            slide_count,
            current_index: 0,
            current_translate: 0.0,
            prev_translate: 0.0,
            velocity: 0.0,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Last velocity sample in px/ms (negative = leftward).
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Current track translation in pixels.
    #[must_use]
    pub fn translate(&self) -> f64 {
        self.current_translate
    }

    // --- Navigation ---

    /// Snap to slide `index`, clamped to the valid range.
    pub fn go_to_slide(&mut self, index: usize) -> Vec<Action> {
        if self.slide_count == 0 {
            return Vec::new();
        }
        let index = index.min(self.slide_count - 1);
        self.current_index = index;

        let offset = self.layout.offset_for(index, self.config.gap_px);
        self.current_translate = offset;
        self.prev_translate = offset;
        self.input = InputState::Animating;

        vec![
            Action::SetTransition(Transition::Snap),
            Action::SetTransform(offset),
            Action::SetActive(index),
        ]
    }

    /// Advance one slide, wrapping from the last to the first.
    pub fn next_slide(&mut self) -> Vec<Action> {
        if self.slide_count == 0 {
            return Vec::new();
        }
        let index = if self.current_index + 1 < self.slide_count { self.current_index + 1 } else { 0 };
        self.go_to_slide(index)
    }

    /// Retreat one slide, wrapping from the first to the last.
    pub fn prev_slide(&mut self) -> Vec<Action> {
        if self.slide_count == 0 {
            return Vec::new();
        }
        let index = if self.current_index > 0 { self.current_index - 1 } else { self.slide_count - 1 };
        self.go_to_slide(index)
    }

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        match key.step() {
            Some(Step::Prev) => self.prev_slide(),
            Some(Step::Next) => self.next_slide(),
            None => Vec::new(),
        }
    }

    // --- Layout ---

    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    /// Apply new geometry and re-center the current slide.
    pub fn on_resize(&mut self, layout: Layout) -> Vec<Action> {
        self.set_layout(layout);
        self.go_to_slide(self.current_index)
    }

    // --- Gestures ---

    pub fn on_pointer_down(&mut self, x: f64, now_ms: f64) -> Vec<Action> {
        if self.slide_count == 0 {
            return Vec::new();
        }
        // Leaving `Animating` here cancels the in-flight snap.
        self.input = InputState::Dragging { start_x: x, last_x: x, last_time_ms: now_ms };
        self.velocity = 0.0;
        vec![Action::SetTransition(Transition::None)]
    }

    pub fn on_pointer_move(&mut self, x: f64, now_ms: f64) -> Vec<Action> {
        let InputState::Dragging { start_x, last_x, last_time_ms } = &mut self.input else {
            return Vec::new();
        };

        let diff = x - *start_x;
        let dt = now_ms - *last_time_ms;
        if dt > 0.0 {
            self.velocity = (x - *last_x) / dt;
        }
        *last_x = x;
        *last_time_ms = now_ms;

        self.current_translate = self.prev_translate + diff;

        let mut actions = vec![Action::SetTransform(self.current_translate)];
        if diff.abs() > self.config.drag_slop_px {
            actions.push(Action::PreventDefault);
        }
        actions
    }

    /// Finish a drag: commit to a neighbour or snap back.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        if !self.input.is_dragging() {
            return Vec::new();
        }

        let moved = self.current_translate - self.prev_translate;
        let threshold = self.layout.swipe_threshold(self.config.distance_ratio);
        let flick = self.config.velocity_threshold;

        let mut index = self.current_index;
        if (moved < -threshold || self.velocity < -flick) && index + 1 < self.slide_count {
            index += 1;
        } else if (moved > threshold || self.velocity > flick) && index > 0 {
            index -= 1;
        }
        self.go_to_slide(index)
    }

    /// The pointer left the track; only a live drag cares.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.on_pointer_up()
    }

    pub fn on_transition_end(&mut self) {
        if self.input == InputState::Animating {
            self.input = InputState::Idle;
        }
    }
}

/// The mounted carousel. Wraps [`CarouselCore`] and owns the DOM elements it drives.
pub struct Carousel {
    container: HtmlElement,
    track: HtmlElement,
    slides: Vec<HtmlElement>,
    dots: Vec<Element>,
    pub core: CarouselCore,
}

impl Carousel {
    /// Build a carousel from its container, creating one dot per slide in `dots_host`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the container has no `.carousel-track` or a DOM call fails.
    pub fn mount(
        document: &Document,
        container: HtmlElement,
        dots_host: Option<&Element>,
        config: CarouselConfig,
    ) -> Result<Self, JsValue> {
        let track = container
            .query_selector(".carousel-track")?
            .ok_or_else(|| JsValue::from_str("carousel has no .carousel-track"))?
            .dyn_into::<HtmlElement>()?;

        let nodes = container.query_selector_all(".carousel-slide")?;
        let mut slides = Vec::new();
        for i in 0..nodes.length() {
            if let Some(node) = nodes.get(i) {
                slides.push(node.dyn_into::<HtmlElement>()?);
            }
        }

        let dots = match dots_host {
            Some(host) => render::create_dots(document, host, slides.len())?,
            None => Vec::new(),
        };

        let core = CarouselCore::new(slides.len(), config);
        let mut carousel = Self { container, track, slides, dots, core };
        carousel.relayout()?;
        Ok(carousel)
    }

    /// Wrap a mounted carousel for sharing between event listeners.
    #[must_use]
    pub fn shared(self) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(self))
    }

    #[must_use]
    pub fn track(&self) -> &HtmlElement {
        &self.track
    }

    #[must_use]
    pub fn slides(&self) -> &[HtmlElement] {
        &self.slides
    }

    #[must_use]
    pub fn dots(&self) -> &[Element] {
        &self.dots
    }

    /// Measure the live DOM geometry.
    #[must_use]
    pub fn measure(&self) -> Layout {
        let slide_width = self.slides.first().map_or(0.0, |s| f64::from(s.offset_width()));
        let container_width = f64::from(self.container.offset_width());
        let viewport_width = match web_sys::window().map(|w| w.inner_width()) {
            Some(Ok(width)) => width.as_f64().unwrap_or(container_width),
            Some(Err(err)) => {
                log::debug!("carousel: innerWidth unavailable: {err:?}");
                container_width
            }
            None => container_width,
        };
        Layout::new(slide_width, container_width, viewport_width)
    }

    /// Re-measure and re-center the current slide.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a style or class update fails.
    pub fn relayout(&mut self) -> Result<(), JsValue> {
        let layout = self.measure();
        let actions = self.core.on_resize(layout);
        self.apply(&actions).map(|_| ())
    }

    /// Apply actions to the DOM. Returns whether the triggering event should be default-prevented.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a style or class update fails.
    pub fn apply(&self, actions: &[Action]) -> Result<bool, JsValue> {
        render::apply(&self.track, &self.slides, &self.dots, actions)
    }

    // --- Delegated inputs ---

    /// # Errors
    ///
    /// Returns `Err` if applying the resulting actions fails.
    pub fn go_to_slide(&mut self, index: usize) -> Result<(), JsValue> {
        let actions = self.core.go_to_slide(index);
        self.apply(&actions).map(|_| ())
    }

    /// # Errors
    ///
    /// Returns `Err` if applying the resulting actions fails.
    pub fn next_slide(&mut self) -> Result<(), JsValue> {
        let actions = self.core.next_slide();
        self.apply(&actions).map(|_| ())
    }

    /// # Errors
    ///
    /// Returns `Err` if applying the resulting actions fails.
    pub fn prev_slide(&mut self) -> Result<(), JsValue> {
        let actions = self.core.prev_slide();
        self.apply(&actions).map(|_| ())
    }

    /// # Errors
    ///
    /// Returns `Err` if applying the resulting actions fails.
    pub fn key_down(&mut self, key: &Key) -> Result<(), JsValue> {
        let actions = self.core.on_key_down(key);
        self.apply(&actions).map(|_| ())
    }

    /// # Errors
    ///
    /// Returns `Err` if applying the resulting actions fails.
    pub fn pointer_down(&mut self, x: f64) -> Result<(), JsValue> {
        let actions = self.core.on_pointer_down(x, js_sys::Date::now());
        self.apply(&actions).map(|_| ())
    }

    /// # Errors
    ///
    /// Returns `Err` if applying the resulting actions fails.
    pub fn pointer_move(&mut self, x: f64) -> Result<bool, JsValue> {
        let actions = self.core.on_pointer_move(x, js_sys::Date::now());
        self.apply(&actions)
    }

    /// # Errors
    ///
    /// Returns `Err` if applying the resulting actions fails.
    pub fn pointer_up(&mut self) -> Result<(), JsValue> {
        let actions = self.core.on_pointer_up();
        self.apply(&actions).map(|_| ())
    }

    /// # Errors
    ///
    /// Returns `Err` if applying the resulting actions fails.
    pub fn pointer_leave(&mut self) -> Result<(), JsValue> {
        let actions = self.core.on_pointer_leave();
        self.apply(&actions).map(|_| ())
    }

    pub fn transition_end(&mut self) {
        self.core.on_transition_end();
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.core.input.is_dragging()
    }
}
