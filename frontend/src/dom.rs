use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use js_sys::{Array, Date};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::error::{SiteError, SiteResult};
use crate::scroll::{CancelToken, ScrollAnimation, ScrollSample, SectionBounds, SectionId, Viewport};

pub fn window() -> SiteResult<Window> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> SiteResult<Document> {
    window()?.document().ok_or(SiteError::NoDocument)
}

/// Milliseconds on the same clock `requestAnimationFrame` reports.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(Date::now)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| Ok(w.scroll_y()?)).unwrap_or(0.0)
}

pub fn viewport() -> SiteResult<Viewport> {
    let window = window()?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    let document_height = document()?
        .document_element()
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(height);
    Ok(Viewport { width, height, document_height })
}

pub fn element_by_id(id: &str) -> SiteResult<Element> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::MissingElement(id.to_string()))
}

/// Document-space bounds of every mounted section, in page order.
pub fn measure_sections() -> Vec<SectionBounds> {
    SectionId::ALL
        .into_iter()
        .filter_map(|id| {
            let element = element_by_id(id.as_str()).ok()?;
            let html = element.dyn_ref::<HtmlElement>()?;
            Some(SectionBounds::new(id, html.offset_top() as f64, html.offset_height() as f64))
        })
        .collect()
}

pub fn sample() -> SiteResult<ScrollSample> {
    Ok(ScrollSample {
        scroll_y: window()?.scroll_y()?,
        now: now_ms(),
        viewport: viewport()?,
        sections: measure_sections(),
    })
}

pub fn scroll_to(y: f64) {
    if let Ok(window) = window() {
        window.scroll_to_with_x_and_y(0.0, y);
    }
}

pub fn push_fragment(fragment: &str) -> SiteResult<()> {
    window()?
        .history()?
        .push_state_with_url(&JsValue::NULL, "", Some(fragment))?;
    Ok(())
}

pub fn set_root_class(class: &str, enabled: bool) -> SiteResult<()> {
    let root = document()?.document_element().ok_or(SiteError::NoDocument)?;
    root.class_list().toggle_with_force(class, enabled)?;
    Ok(())
}

pub fn prefers_dark() -> bool {
    window()
        .ok()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map_or(false, |query| query.matches())
}

pub fn is_online() -> bool {
    window().map_or(true, |w| w.navigator().on_line())
}

pub fn page_loaded() -> bool {
    document().map_or(false, |d| d.ready_state() == "complete")
}

pub fn open_in_new_tab(url: &str) {
    if let Ok(window) = window() {
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            log::warn!("could not open {}: {:?}", url, e);
        }
    }
}

pub fn navigate_to(url: &str) {
    if let Ok(window) = window() {
        if let Err(e) = window.location().set_href(url) {
            log::warn!("could not navigate to {}: {:?}", url, e);
        }
    }
}

/// An event listener that is removed again when dropped.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event: &'static str, callback: F) -> SiteResult<Self>
    where
        F: FnMut(Event) + 'static,
    {
        Self::register(target, event, callback, false)
    }

    /// Listener that never calls `preventDefault`, so scrolling stays on the
    /// compositor.
    pub fn passive<F>(target: &EventTarget, event: &'static str, callback: F) -> SiteResult<Self>
    where
        F: FnMut(Event) + 'static,
    {
        Self::register(target, event, callback, true)
    }

    fn register<F>(target: &EventTarget, event: &'static str, callback: F, passive: bool) -> SiteResult<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Intersection reporting for one element; disconnects when dropped.
pub struct IntersectionWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl IntersectionWatcher {
    pub fn observe<F>(element: &Element, thresholds: &[f64], root_margin: &str, mut on_entry: F) -> SiteResult<Self>
    where
        F: FnMut(f64, bool) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_entry(entry.intersection_ratio(), entry.is_intersecting());
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let threshold: Array = thresholds.iter().map(|t| JsValue::from_f64(*t)).collect();
        let options = IntersectionObserverInit::new();
        options.set_threshold(&threshold);
        options.set_root_margin(root_margin);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);
        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for IntersectionWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Drive `animation` on animation frames until it finishes or `token` is
/// cancelled. `on_done` runs only for a finished animation.
pub fn run_scroll_animation<F>(animation: ScrollAnimation, token: CancelToken, on_done: F) -> SiteResult<()>
where
    F: FnOnce() + 'static,
{
    let window = window()?;
    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next_frame = frame.clone();
    let frame_window = window.clone();
    let mut on_done = Some(on_done);

    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        if token.is_cancelled() {
            debug!("scroll animation cancelled");
            let _ = next_frame.borrow_mut().take();
            return;
        }
        let step = animation.step(timestamp);
        frame_window.scroll_to_with_x_and_y(0.0, step.y);
        if step.finished {
            if let Some(done) = on_done.take() {
                done();
            }
            let _ = next_frame.borrow_mut().take();
            return;
        }
        if let Some(callback) = next_frame.borrow().as_ref() {
            let _ = frame_window.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(callback) = frame.borrow().as_ref() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }
    Ok(())
}
