//! Screenshot carousel engine for the landing page.
//!
//! This crate is compiled to WebAssembly as part of the `site` module. It owns
//! the slide state machine: translating raw pointer, touch, and keyboard input
//! into slide changes, computing the track offset that centers the active
//! slide, and applying the result to the DOM. The `site` crate only decides
//! *whether* a carousel exists on the page and forwards page-level events
//! (keyboard, resize) to it.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::CarouselCore`] and the DOM-owning [`engine::Carousel`] |
//! | [`input`] | Gesture state machine and key types |
//! | [`layout`] | Slide geometry and offset math |
//! | [`config`] | Tunable thresholds, deserializable from page config |
//! | [`render`] | Applies engine actions to the track, slides, and dots |
//! | [`dom`] | Event listener wiring for a mounted carousel |
//! | [`consts`] | Default numeric constants (gap, thresholds, timings) |

pub mod config;
pub mod consts;
pub mod dom;
pub mod engine;
pub mod input;
pub mod layout;
pub mod render;
