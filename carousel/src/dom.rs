//! Event wiring for a mounted [`Carousel`].
//!
//! Track gestures (touch and mouse), dot clicks, previous/next buttons, and
//! `transitionend` are bound here. Page-level input (keyboard, resize) is
//! forwarded by the host so a single document listener can serve the page.
//!
//! Listeners live for the page lifetime, so their closures are leaked with
//! `Closure::forget`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Element, Event, EventTarget, MouseEvent, TouchEvent};

use crate::engine::Carousel;

/// Register `handler` for `kind` on `target` for the rest of the page lifetime.
///
/// `passive` sets the listener's passive flag when given.
///
/// # Errors
///
/// Returns `Err` if the browser rejects the registration.
pub fn listen<F>(target: &EventTarget, kind: &str, passive: Option<bool>, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    match passive {
        Some(passive) => {
            let options = AddEventListenerOptions::new();
            options.set_passive(passive);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                cb.as_ref().unchecked_ref(),
                &options,
            )?;
        }
        None => target.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())?,
    }
    cb.forget();
    Ok(())
}

/// Horizontal pointer position for a mouse or touch event.
///
/// Mouse events report `pageX`; touch events the first touch's `clientX`.
#[must_use]
pub fn pointer_x(event: &Event) -> Option<f64> {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        return Some(f64::from(mouse.page_x()));
    }
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some(f64::from(touch.client_x()))
}

fn report(result: Result<(), JsValue>, what: &str) {
    if let Err(err) = result {
        log::warn!("carousel {what} failed: {err:?}");
    }
}

/// Bind all carousel-local listeners.
///
/// `prev_button` and `next_button` are optional; a page without them still
/// gets gestures, dots, and keyboard navigation.
///
/// # Errors
///
/// Returns `Err` if any listener registration fails.
pub fn bind(
    carousel: &Rc<RefCell<Carousel>>,
    prev_button: Option<&Element>,
    next_button: Option<&Element>,
) -> Result<(), JsValue> {
    let track: EventTarget = carousel.borrow().track().clone().into();

    for kind in ["touchstart", "mousedown"] {
        let c = Rc::clone(carousel);
        let passive = (kind == "touchstart").then_some(true);
        listen(&track, kind, passive, move |ev| {
            if let Some(x) = pointer_x(&ev) {
                report(c.borrow_mut().pointer_down(x), "press");
            }
        })?;
    }

    for kind in ["touchmove", "mousemove"] {
        let c = Rc::clone(carousel);
        let passive = (kind == "touchmove").then_some(false);
        listen(&track, kind, passive, move |ev| {
            let Some(x) = pointer_x(&ev) else {
                return;
            };
            match c.borrow_mut().pointer_move(x) {
                Ok(true) => ev.prevent_default(),
                Ok(false) => {}
                Err(err) => log::warn!("carousel move failed: {err:?}"),
            }
        })?;
    }

    for kind in ["touchend", "mouseup"] {
        let c = Rc::clone(carousel);
        listen(&track, kind, None, move |_| report(c.borrow_mut().pointer_up(), "release"))?;
    }

    {
        let c = Rc::clone(carousel);
        listen(&track, "mouseleave", None, move |_| report(c.borrow_mut().pointer_leave(), "leave"))?;
    }
    {
        let c = Rc::clone(carousel);
        listen(&track, "contextmenu", None, move |ev| {
            if c.borrow().is_dragging() {
                ev.prevent_default();
            }
        })?;
    }
    {
        let c = Rc::clone(carousel);
        listen(&track, "transitionend", None, move |_| c.borrow_mut().transition_end())?;
    }

    for slide in carousel.borrow().slides() {
        if let Some(img) = slide.query_selector("img")? {
            listen(&img, "dragstart", None, |ev| ev.prevent_default())?;
        }
    }

    for (index, dot) in carousel.borrow().dots().iter().enumerate() {
        let c = Rc::clone(carousel);
        listen(dot, "click", None, move |_| report(c.borrow_mut().go_to_slide(index), "dot"))?;
    }

    if let Some(button) = prev_button {
        let c = Rc::clone(carousel);
        listen(button, "click", None, move |_| report(c.borrow_mut().prev_slide(), "prev"))?;
    }
    if let Some(button) = next_button {
        let c = Rc::clone(carousel);
        listen(button, "click", None, move |_| report(c.borrow_mut().next_slide(), "next"))?;
    }

    Ok(())
}
