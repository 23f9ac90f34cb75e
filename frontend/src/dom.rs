use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Function};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::error::DomError;

pub fn query(root: &Document, selector: &str) -> Option<HtmlElement> {
    let found = root
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if found.is_none() {
        debug!("{}", DomError::MissingElement(selector.to_string()));
    }
    found
}

pub fn query_all(root: &Document, selector: &str) -> Vec<HtmlElement> {
    query_all_in(root.query_selector_all(selector).ok())
}

pub fn query_all_within(root: &Element, selector: &str) -> Vec<HtmlElement> {
    query_all_in(root.query_selector_all(selector).ok())
}

fn query_all_in(list: Option<web_sys::NodeList>) -> Vec<HtmlElement> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    let found = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if found.is_none() {
        debug!("{}", DomError::MissingElement(format!("#{}", id)));
    }
    found
}

pub fn set_styles(element: &HtmlElement, styles: &[(&str, String)]) {
    let style = element.style();
    for (property, value) in styles {
        let _ = style.set_property(property, value);
    }
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    pub fn fire_now(&self) {
        if let Ok(event) = Event::new(self.event) {
            let function = self.callback.as_ref().unchecked_ref::<Function>();
            let _ = function.call1(&JsValue::NULL, &event);
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observer {
    /// `handler` receives each entry together with the observer so it can
    /// unobserve targets it is done with.
    pub fn new<F>(threshold: f64, root_margin: Option<&str>, mut handler: F) -> Result<Self, DomError>
    where
        F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    handler(&entry, &observer);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
