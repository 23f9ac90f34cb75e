//! Owns every listener, observer and timer the page effects register.

use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, MouseEvent, Window};

use crate::config::CoordinatorConfig;
use crate::dom::{self, Listener, Observer};
use crate::error::DomError;
use crate::frame::{LayoutSnapshot, ScrollFrame};
use crate::navigation::{self, ANCHOR_SELECTOR};
use crate::overlay;
use crate::parallax;
use crate::reveal::{self, RevealRegistry};
use crate::scroll_top;
use crate::scrollspy::{NavLinks, SectionBoundary};
use crate::scrub::TriggerRegion;
use crate::theme::{self, LocalStore, ThemeState};
use crate::timeline::{stagger_delays, Schedule};
use crate::typing::{self, TypingFrame};

const SECTION_SELECTOR: &str = ".section, .hero";

pub struct Coordinator {
    schedule: Schedule,
    overlay: Option<HtmlElement>,
    listeners: Vec<Listener>,
    observers: Vec<Observer>,
}

impl Coordinator {
    pub fn init(config: CoordinatorConfig) -> Option<Self> {
        let Some(window) = web_sys::window() else {
            warn!("{}", DomError::NoWindow);
            return None;
        };
        let document = window.document()?;
        let config = Rc::new(config);

        let mut coordinator = Self {
            schedule: Schedule::new(),
            overlay: None,
            listeners: Vec::new(),
            observers: Vec::new(),
        };

        if config.overlay.enabled {
            coordinator.init_overlay(&window, &document, &config);
        }
        coordinator.init_theme(&document, &config);
        coordinator.init_scroll(&window, &document, &config);
        coordinator.init_scroll_top(&window, &document);
        coordinator.init_anchors(&window, &document, &config);
        coordinator.init_reveal(&document, &config);
        coordinator.init_stagger(&document, &config);
        coordinator.init_pointer(&document, &config);
        if config.typing.enabled {
            coordinator.init_typing(&document, &config);
        }

        info!(
            "Coordinator ready with {} listeners and {} observers",
            coordinator.listeners.len(),
            coordinator.observers.len()
        );
        Some(coordinator)
    }

    pub fn teardown(self) {
        drop(self);
    }

    fn keep(&mut self, what: &str, listener: Result<Listener, DomError>) {
        match listener {
            Ok(listener) => self.listeners.push(listener),
            Err(e) => warn!("Skipping {}: {}", what, e),
        }
    }

    fn init_overlay(&mut self, window: &Window, document: &Document, config: &CoordinatorConfig) {
        let Some(element) = overlay::mount(document) else {
            return;
        };
        self.overlay = Some(element.clone());

        let steps = overlay::plan(&config.overlay);
        let schedule = self.schedule.clone();
        let start = move || schedule.run(steps, move |action| overlay::apply(&element, action));

        if overlay::already_loaded(document) {
            start();
        } else {
            let mut start = Some(start);
            let listener = Listener::new(window, "load", move |_| {
                if let Some(start) = start.take() {
                    start();
                }
            });
            self.keep("loading overlay", listener);
        }
    }

    fn init_theme(&mut self, document: &Document, config: &CoordinatorConfig) {
        let toggle = dom::by_id(document, "darkModeToggle");
        let icon = toggle
            .as_ref()
            .and_then(|t| t.query_selector(".theme-icon").ok().flatten());

        let mut state = ThemeState::init(
            LocalStore::from_window(),
            config.theme_storage_key.clone(),
            config.default_theme,
        );
        theme::apply(document, icon.as_ref(), state.current());

        let Some(toggle) = toggle else {
            return;
        };
        let document = document.clone();
        let listener = Listener::new(&toggle, "click", move |_| {
            let theme = state.toggle();
            theme::apply(&document, icon.as_ref(), theme);
            debug!("Theme switched to {:?}", theme);
        });
        self.keep("theme toggle", listener);
    }

    fn init_scroll(&mut self, window: &Window, document: &Document, config: &Rc<CoordinatorConfig>) {
        let targets = ScrollTargets::collect(document, config);
        if targets.is_empty() {
            debug!("Nothing on the page reacts to scrolling");
            return;
        }

        let config = Rc::clone(config);
        let document = document.clone();
        let scroll_window = window.clone();
        let listener = Listener::new(window, "scroll", move |_| {
            let scroll = scroll_window.scroll_y().unwrap_or(0.0);
            let layout = targets.snapshot(&document);
            let frame = ScrollFrame::compute(&config, scroll, &layout);
            targets.apply(&config, &frame);
        });

        if let Ok(listener) = &listener {
            listener.fire_now();
        }
        self.keep("scroll effects", listener);
    }

    fn init_scroll_top(&mut self, window: &Window, document: &Document) {
        let Some(button) = dom::by_id(document, "scrollTopBtn") else {
            return;
        };
        let window = window.clone();
        let listener = Listener::new(&button, "click", move |_| {
            scroll_top::smooth_scroll_to(&window, 0.0);
        });
        self.keep("scroll-to-top", listener);
    }

    fn init_anchors(&mut self, window: &Window, document: &Document, config: &Rc<CoordinatorConfig>) {
        for link in dom::query_all(document, ANCHOR_SELECTOR) {
            let window = window.clone();
            let document = document.clone();
            let header_offset = config.header_offset;
            let target_link = link.clone();
            let listener = Listener::new(&link, "click", move |event: Event| {
                let Some(href) = target_link.get_attribute("href") else {
                    return;
                };
                let Some(id) = navigation::fragment_target(&href) else {
                    return;
                };
                event.prevent_default();
                let target = Some(id).filter(|id| !id.is_empty()).and_then(|id| dom::by_id(&document, id));
                match target {
                    Some(target) => {
                        let top = navigation::scroll_destination(target.offset_top() as f64, header_offset);
                        scroll_top::smooth_scroll_to(&window, top);
                    }
                    None => debug!("{}", DomError::UnresolvedTarget(id.to_string())),
                }
            });
            self.keep("anchor link", listener);
        }
    }

    fn init_reveal(&mut self, document: &Document, config: &CoordinatorConfig) {
        let elements = dom::query_all(document, reveal::REVEAL_SELECTOR);
        if elements.is_empty() {
            return;
        }

        let mut registry = RevealRegistry::with_len(elements.len());
        let reveal_config = config.reveal.clone();
        let schedule = self.schedule.clone();
        let observer = Observer::new(
            config.reveal.threshold,
            Some(config.reveal_root_margin().as_str()),
            move |entry, observer| {
                let target = entry.target();
                let Some(index) = target
                    .get_attribute(reveal::INDEX_ATTRIBUTE)
                    .and_then(|v| v.parse::<usize>().ok())
                else {
                    return;
                };
                if registry.is_revealed(index) {
                    // Queued before the unobserve below took effect.
                    observer.unobserve(&target);
                    return;
                }
                if !registry.observe(index, entry.is_intersecting()) {
                    return;
                }
                observer.unobserve(&target);
                debug!("Revealed {}/{} elements", registry.revealed_count(), registry.len());

                let Ok(element) = target.dyn_into::<HtmlElement>() else {
                    return;
                };
                dom::set_styles(&element, &reveal::visible_style());
                if reveal::wants_bounce(element.class_name().split_whitespace()) {
                    schedule.run(reveal::bounce_plan(&reveal_config), move |transform: String| {
                        dom::set_style(&element, "transform", &transform)
                    });
                }
            },
        );

        // Only hide elements once something is there to show them again.
        match observer {
            Ok(observer) => {
                for (index, element) in elements.iter().enumerate() {
                    let _ = element.set_attribute(reveal::INDEX_ATTRIBUTE, &index.to_string());
                    dom::set_styles(element, &reveal::hidden_style(index, &config.reveal));
                    observer.observe(element);
                }
                self.observers.push(observer);
            }
            Err(e) => warn!("Reveal animations disabled: {}", e),
        }
    }

    fn init_stagger(&mut self, document: &Document, config: &CoordinatorConfig) {
        let containers = dom::query_all(document, reveal::STAGGER_CONTAINER_SELECTOR);
        if containers.is_empty() {
            return;
        }

        let step_ms = config.stagger.step_ms;
        let schedule = self.schedule.clone();
        let observer = Observer::new(config.stagger.threshold, None, move |entry, observer| {
            if !entry.is_intersecting() {
                return;
            }
            let container = entry.target();
            observer.unobserve(&container);

            let items = dom::query_all_within(&container, reveal::STAGGER_ITEM_SELECTOR);
            let delays = stagger_delays(items.len(), step_ms);
            for (item, delay) in items.into_iter().zip(delays) {
                schedule.after(delay, move || {
                    dom::set_styles(&item, &reveal::stagger_item_visible_style())
                });
            }
        });

        match observer {
            Ok(observer) => {
                for container in &containers {
                    observer.observe(container);
                }
                self.observers.push(observer);
            }
            Err(e) => warn!("Staggered reveals disabled: {}", e),
        }
    }

    fn init_pointer(&mut self, document: &Document, config: &CoordinatorConfig) {
        let cursor = dom::query(document, ".custom-cursor");
        let orbs = dom::query_all(document, ".gradient-orb");
        if cursor.is_none() && orbs.is_empty() {
            return;
        }

        let pointer = config.pointer.clone();
        let listener = Listener::new(document, "mousemove", move |event: Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let (x, y) = (event.client_x() as f64, event.client_y() as f64);
            if let Some(cursor) = &cursor {
                dom::set_style(cursor, "left", &format!("{}px", x));
                dom::set_style(cursor, "top", &format!("{}px", y));
            }
            for (index, orb) in orbs.iter().enumerate() {
                let (dx, dy) = parallax::orb_offset(index, x, y, &pointer);
                dom::set_style(orb, "transform", &format!("translate({}px, {}px)", dx, dy));
            }
        });
        self.keep("pointer effects", listener);
    }

    fn init_typing(&mut self, document: &Document, config: &CoordinatorConfig) {
        let typing_config = config.typing.clone();
        let document = document.clone();
        let schedule = self.schedule.clone();
        self.schedule.after(typing_config.start_delay_ms, move || {
            let Some(title) = dom::query(&document, typing::TITLE_SELECTOR) else {
                return;
            };
            let text = title.text_content().unwrap_or_default();
            schedule.run(typing::plan(&text, &typing_config), move |frame| {
                apply_typing(&title, frame)
            });
        });
    }
}

impl Drop for Coordinator {
    fn drop(&mut self) {
        self.schedule.cancel();
        if let Some(overlay) = self.overlay.take() {
            overlay.remove();
        }
        debug!(
            "Coordinator torn down, releasing {} listeners and {} observers",
            self.listeners.len(),
            self.observers.len()
        );
    }
}

fn apply_typing(title: &HtmlElement, frame: TypingFrame) {
    match frame {
        TypingFrame::Clear => {
            title.set_text_content(Some(""));
            dom::set_style(title, "opacity", "1");
        }
        TypingFrame::Text(text) => title.set_text_content(Some(&text)),
        TypingFrame::CursorOn => {
            dom::set_style(title, "border-right", "2px solid var(--text-accent)");
            dom::set_style(title, "animation", "blink 1s infinite");
        }
        TypingFrame::CursorOff => {
            dom::set_style(title, "border-right", "none");
            dom::set_style(title, "animation", "none");
        }
    }
}

struct ScrollTargets {
    sections: Vec<HtmlElement>,
    nav: NavLinks,
    scroll_top: Option<HtmlElement>,
    hero_background: Option<HtmlElement>,
    layers: Vec<HtmlElement>,
    progress_bar: Option<HtmlElement>,
    scrub: Vec<(Option<HtmlElement>, Option<HtmlElement>)>,
}

impl ScrollTargets {
    fn collect(document: &Document, config: &CoordinatorConfig) -> Self {
        let scrub = config
            .scrub
            .iter()
            .map(|decl| (dom::query(document, &decl.target), dom::query(document, &decl.trigger)))
            .collect();
        Self {
            sections: dom::query_all(document, SECTION_SELECTOR),
            nav: NavLinks::new(dom::query_all(document, ".nav-link")),
            scroll_top: dom::by_id(document, "scrollTopBtn"),
            hero_background: dom::query(document, ".hero-background"),
            layers: dom::query_all(document, ".parallax-element"),
            progress_bar: dom::query(document, ".scroll-progress"),
            scrub,
        }
    }

    fn is_empty(&self) -> bool {
        self.sections.is_empty()
            && self.nav.is_empty()
            && self.scroll_top.is_none()
            && self.hero_background.is_none()
            && self.layers.is_empty()
            && self.progress_bar.is_none()
            && self.scrub.iter().all(|(target, _)| target.is_none())
    }

    fn snapshot(&self, document: &Document) -> LayoutSnapshot {
        let sections = self
            .sections
            .iter()
            .filter(|s| !s.id().is_empty())
            .map(|s| SectionBoundary::new(s.id(), s.offset_top() as f64, s.offset_height() as f64))
            .collect();
        let (scroll_height, client_height) = document
            .document_element()
            .map(|root| (root.scroll_height() as f64, root.client_height() as f64))
            .unwrap_or((0.0, 0.0));
        let scrub_regions = self
            .scrub
            .iter()
            .map(|(target, trigger)| match (target, trigger) {
                (Some(_), Some(trigger)) => Some(TriggerRegion::of_element(
                    trigger.offset_top() as f64,
                    trigger.offset_height() as f64,
                )),
                _ => None,
            })
            .collect();

        LayoutSnapshot {
            sections,
            scroll_height,
            client_height,
            parallax_layers: self.layers.len(),
            scrub_regions,
        }
    }

    fn apply(&self, config: &CoordinatorConfig, frame: &ScrollFrame) {
        self.nav.mark(frame.active_section.as_deref());

        if let Some(button) = &self.scroll_top {
            let _ = button
                .class_list()
                .toggle_with_force(scroll_top::VISIBLE_CLASS, frame.scroll_top_visible);
        }
        if let Some(background) = &self.hero_background {
            dom::set_style(background, "transform", &parallax::translate_y(frame.hero_offset));
        }
        for (layer, offset) in self.layers.iter().zip(&frame.layer_offsets) {
            dom::set_style(layer, "transform", &parallax::translate_y(*offset));
        }
        if let Some(bar) = &self.progress_bar {
            dom::set_style(bar, "width", &format!("{}%", frame.progress_percent));
        }
        for ((decl, (target, _)), value) in config.scrub.iter().zip(&self.scrub).zip(&frame.scrub_values) {
            if let (Some(target), Some(value)) = (target, value) {
                let (property, css) = decl.property.css(*value);
                dom::set_style(target, property, &css);
            }
        }
    }
}
