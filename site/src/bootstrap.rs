//! Page startup and event routing.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`Page`] holds everything the synchronous behaviors need (view, preference
//! store, dictionaries, config). [`Page::boot`] runs once at load;
//! [`Page::handle`] serves the page-level [`PageEvent`]s.
//!
//! In the browser, `start` (hydrate only) reads config, installs logging,
//! boots the page, mounts the carousel, and registers every DOM listener.
//! Listeners only publish events; subscribers do the work. The exceptions
//! are carousel gestures and the intersection observers, which act directly.
//!
//! ERROR HANDLING
//! ==============
//! Missing optional elements are skipped with a `debug` log. A failed
//! listener registration aborts wiring and is returned to the entry point.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use crate::config::SiteConfig;
use crate::dictionary::Dictionary;
use crate::events::PageEvent;
use crate::i18n::{self, Language};
use crate::prefs::PreferenceStore;
use crate::reveal;
use crate::theme::{self, Theme};
use crate::view::ViewBinding;

/// Body class added once the window has finished loading.
pub const LOADED_CLASS: &str = "loaded";

/// What [`Page::boot`] applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootReport {
    pub theme: Theme,
    pub language: Language,
    /// Elements tagged for scroll reveal.
    pub reveal_targets: usize,
}

pub struct Page<V, S> {
    view: V,
    store: S,
    dictionary: Dictionary,
    config: SiteConfig,
}

impl<V, S> Page<V, S>
where
    V: ViewBinding,
    S: PreferenceStore,
{
    pub fn new(view: V, store: S, dictionary: Dictionary, config: SiteConfig) -> Self {
        Self { view, store, dictionary, config }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Apply theme and language and tag reveal targets.
    pub fn boot(&self, prefers_dark: bool) -> BootReport {
        let keys = &self.config.storage;
        let theme = theme::initialize(&self.view, &self.store, &keys.theme, prefers_dark);
        let language =
            i18n::initialize(&self.view, &self.store, &keys.language, &self.dictionary, self.config.default_language);
        let reveal_targets = reveal::tag_reveal_targets(&self.view, &self.config.reveal.reveal_targets);
        BootReport { theme, language, reveal_targets }
    }

    /// React to `event`. Returns `false` for events this page leaves to
    /// browser-side subscribers (downloads, carousel keys, resize).
    pub fn handle(&self, event: &PageEvent) -> bool {
        let keys = &self.config.storage;
        match event {
            PageEvent::ThemeToggleRequested => {
                let theme = theme::toggle(&self.view, &self.store, &keys.theme);
                log::debug!("bootstrap: theme -> {}", theme.as_str());
            }
            PageEvent::LanguageToggleRequested => {
                let lang = i18n::toggle(
                    &self.view,
                    &self.store,
                    &keys.language,
                    &self.dictionary,
                    self.config.default_language,
                );
                log::debug!("bootstrap: language -> {}", lang.code());
            }
            PageEvent::Scrolled { y } => {
                reveal::on_scroll(&self.view, self.config.reveal.home_offset_px, &self.config.reveal.home_href, *y);
            }
            PageEvent::SectionInFocus { id } => {
                reveal::highlight_section(&self.view, id);
            }
            PageEvent::Loaded => {
                if let Some(body) = self.view.body() {
                    self.view.add_class(&body, LOADED_CLASS);
                }
            }
            PageEvent::DownloadRequested { .. } | PageEvent::KeyPressed(_) | PageEvent::Resized => return false,
        }
        true
    }
}

/// Whether `DOMContentLoaded` has already fired for a `document.readyState`.
#[must_use]
pub fn dom_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

/// Whether the window `load` event has already fired for a `document.readyState`.
#[must_use]
pub fn window_loaded(ready_state: &str) -> bool {
    ready_state == "complete"
}

#[cfg(feature = "hydrate")]
pub use browser::start;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use carousel::dom::listen;
    use carousel::engine::Carousel;
    use carousel::input::Key;
    use gloo_timers::callback::Timeout;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, EventTarget, HtmlElement, KeyboardEvent, Window};

    use super::{Page, dom_parsed, window_loaded};
    use crate::config::SiteConfig;
    use crate::dictionary::Dictionary;
    use crate::download::{self, DownloadOutcome, HERO_DOWNLOAD_ID, NAV_DOWNLOAD_ID};
    use crate::events::{EventBus, PageEvent};
    use crate::i18n::LANG_TOGGLE_ID;
    use crate::platform::{self, Platform};
    use crate::prefs::{self, PreferenceStore};
    use crate::release::GithubReleases;
    use crate::reveal;
    use crate::theme::{self, THEME_TOGGLE_ID};
    use crate::view::ViewBinding;
    use crate::view::web::WebView;

    const CAROUSEL_ID: &str = "carousel";
    const CAROUSEL_DOTS_ID: &str = "carousel-dots";
    const PREV_BUTTON_ID: &str = "prev-btn";
    const NEXT_BUTTON_ID: &str = "next-btn";

    type WebPage = Page<WebView, Box<dyn PreferenceStore>>;
    type Bus = Rc<EventBus<PageEvent>>;

    /// Entry point: install logging, then wire the page once the DOM is parsed.
    ///
    /// # Errors
    ///
    /// Returns `Err` if there is no window or document, or if wiring fails.
    pub fn start() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
        let view = WebView::new(document.clone());

        let (config, config_error) = match SiteConfig::read(&view) {
            Ok(config) => (config, None),
            Err(err) => (SiteConfig::default(), Some(err)),
        };
        if let Err(err) = console_log::init_with_level(config.log_level()) {
            web_sys::console::warn_1(&JsValue::from_str(&format!("landing logger not installed: {err}")));
        }
        console_error_panic_hook::set_once();
        if let Some(err) = config_error {
            log::warn!("bootstrap: {err}; using defaults");
        }

        if dom_parsed(&document.ready_state()) {
            return run(&window, view, config);
        }
        let mut pending = Some((view, config));
        listen(&document, "DOMContentLoaded", None, move |_| {
            if let Some((view, config)) = pending.take()
                && let Err(err) = run(&window, view, config)
            {
                log::warn!("bootstrap: wiring failed: {err:?}");
            }
        })
    }

    fn run(window: &Window, view: WebView, config: SiteConfig) -> Result<(), JsValue> {
        let document = view.document().clone();
        let dictionary = Dictionary::embedded().unwrap_or_else(|err| {
            log::warn!("bootstrap: {err}; page keeps its static text");
            Dictionary::default()
        });

        let page: Rc<WebPage> = Rc::new(Page::new(view.clone(), prefs::browser_store(), dictionary, config));
        let report = page.boot(theme::system_prefers_dark(window));

        let bus: Bus = Rc::new(EventBus::new());
        {
            let page = Rc::clone(&page);
            bus.subscribe(move |event: &PageEvent| {
                page.handle(event);
            });
        }

        let has_carousel = match mount_carousel(&document, page.config())? {
            Some(carousel) => {
                subscribe_carousel(&bus, carousel);
                true
            }
            None => false,
        };
        subscribe_downloads(&bus, &page, platform::detect_browser(window));

        let reveal_config = &page.config().reveal;
        let sections = reveal::install_section_observer(&view, reveal_config, Rc::clone(&bus))?;
        let reveals = reveal::install_reveal_observer(&view, reveal_config)?;
        let anchors = reveal::install_smooth_scroll(&view)?;
        wire_listeners(window, &document, &bus)?;

        log::info!(
            "bootstrap: theme={} language={} carousel={has_carousel} sections={sections} reveals={reveals}/{} anchors={anchors}",
            report.theme.as_str(),
            report.language.code(),
            report.reveal_targets,
        );
        Ok(())
    }

    fn mount_carousel(document: &Document, config: &SiteConfig) -> Result<Option<Rc<RefCell<Carousel>>>, JsValue> {
        let Some(container) = document.get_element_by_id(CAROUSEL_ID) else {
            log::debug!("bootstrap: no #{CAROUSEL_ID}");
            return Ok(None);
        };
        let container = container.dyn_into::<HtmlElement>()?;
        let dots_host = document.get_element_by_id(CAROUSEL_DOTS_ID);
        let carousel = Carousel::mount(document, container, dots_host.as_ref(), config.carousel)?.shared();

        let prev = document.get_element_by_id(PREV_BUTTON_ID);
        let next = document.get_element_by_id(NEXT_BUTTON_ID);
        carousel::dom::bind(&carousel, prev.as_ref(), next.as_ref())?;
        Ok(Some(carousel))
    }

    /// Forward arrow keys to the carousel and re-center it after resizing settles.
    fn subscribe_carousel(bus: &Bus, carousel: Rc<RefCell<Carousel>>) {
        let debounce_ms = carousel.borrow().core.config.resize_debounce_ms;
        // Replacing the pending timeout drops it, which cancels it.
        let pending: RefCell<Option<Timeout>> = RefCell::new(None);

        bus.subscribe(move |event: &PageEvent| match event {
            PageEvent::KeyPressed(key) => {
                if let Err(err) = carousel.borrow_mut().key_down(&Key(key.clone())) {
                    log::warn!("bootstrap: carousel key failed: {err:?}");
                }
            }
            PageEvent::Resized => {
                let c = Rc::clone(&carousel);
                let timeout = Timeout::new(debounce_ms, move || {
                    if let Err(err) = c.borrow_mut().relayout() {
                        log::warn!("bootstrap: carousel relayout failed: {err:?}");
                    }
                });
                *pending.borrow_mut() = Some(timeout);
            }
            _ => {}
        });
    }

    fn subscribe_downloads(bus: &Bus, page: &Rc<WebPage>, platform: Platform) {
        let page = Rc::clone(page);
        let source = Rc::new(GithubReleases::new(&page.config().release));

        bus.subscribe(move |event: &PageEvent| {
            let PageEvent::DownloadRequested { control_id } = event else {
                return;
            };
            let page = Rc::clone(&page);
            let source = Rc::clone(&source);
            let control_id = control_id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let view = page.view();
                let control = view.by_id(&control_id);
                let release = &page.config().release;
                let outcome =
                    download::initiate_download(view, control.as_ref(), platform, source.as_ref(), release).await;
                if outcome == DownloadOutcome::Busy {
                    log::debug!("bootstrap: #{control_id} is still loading");
                }
            });
        });
    }

    fn publish_on(
        target: &EventTarget,
        kind: &str,
        passive: Option<bool>,
        bus: &Bus,
        event: PageEvent,
    ) -> Result<(), JsValue> {
        let bus = Rc::clone(bus);
        listen(target, kind, passive, move |ev| {
            if event.cancels_default() {
                ev.prevent_default();
            }
            bus.publish(&event);
        })
    }

    fn wire_listeners(window: &Window, document: &Document, bus: &Bus) -> Result<(), JsValue> {
        let clicks = [
            (THEME_TOGGLE_ID, PageEvent::ThemeToggleRequested),
            (LANG_TOGGLE_ID, PageEvent::LanguageToggleRequested),
            (NAV_DOWNLOAD_ID, PageEvent::DownloadRequested { control_id: NAV_DOWNLOAD_ID.into() }),
            (HERO_DOWNLOAD_ID, PageEvent::DownloadRequested { control_id: HERO_DOWNLOAD_ID.into() }),
        ];
        for (id, event) in clicks {
            match document.get_element_by_id(id) {
                Some(el) => publish_on(&el, "click", None, bus, event)?,
                None => log::debug!("bootstrap: no #{id}"),
            }
        }

        {
            let bus = Rc::clone(bus);
            listen(document, "keydown", None, move |ev| {
                if let Some(key) = ev.dyn_ref::<KeyboardEvent>() {
                    bus.publish(&PageEvent::KeyPressed(key.key()));
                }
            })?;
        }
        publish_on(window, "resize", None, bus, PageEvent::Resized)?;
        {
            let bus = Rc::clone(bus);
            let win = window.clone();
            listen(window, "scroll", Some(true), move |_| {
                let y = win.scroll_y().unwrap_or_default();
                bus.publish(&PageEvent::Scrolled { y });
            })?;
        }

        if window_loaded(&document.ready_state()) {
            bus.publish(&PageEvent::Loaded);
        } else {
            publish_on(window, "load", None, bus, PageEvent::Loaded)?;
        }
        Ok(())
    }
}
