//! Thin wrappers over browser APIs. Each resource is an owned guard that
//! undoes itself on drop, so components can keep them in `use_mut_ref` and
//! let Yew's lifecycle release them.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    window, Element, Event, HtmlElement, HtmlImageElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MouseEvent,
};

use crate::error::UiError;

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn body() -> Result<HtmlElement, UiError> {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .ok_or(UiError::MissingElement("body"))
}

/// Locks page scrolling behind an overlay; restores the previous value on drop.
pub struct ScrollLock {
    body: HtmlElement,
    previous: String,
}

impl ScrollLock {
    pub fn acquire() -> Result<Self, UiError> {
        let body = body()?;
        let style = body.style();
        let previous = style.get_property_value("overflow").unwrap_or_default();
        let _ = style.set_property("overflow", "hidden");
        Ok(Self { body, previous })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let style = self.body.style();
        let _ = if self.previous.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", &self.previous)
        };
    }
}

/// Runs `on_done` once, when `element` finishes a CSS transition of its own
/// or when `fallback_ms` elapses, whichever comes first. Dropping the guard
/// cancels both.
pub struct TransitionTeardown {
    element: Element,
    listener: Closure<dyn FnMut(Event)>,
    _fallback: Timeout,
}

impl TransitionTeardown {
    pub fn new(element: &Element, fallback_ms: u32, on_done: impl FnOnce() + 'static) -> Self {
        let pending: Rc<RefCell<Option<Box<dyn FnOnce()>>>> =
            Rc::new(RefCell::new(Some(Box::new(on_done))));

        let listener = {
            let pending = pending.clone();
            let element = element.clone();
            Closure::wrap(Box::new(move |e: Event| {
                // transitions bubbling up from children don't count
                let own = e
                    .target()
                    .map(|t| AsRef::<JsValue>::as_ref(&t) == AsRef::<JsValue>::as_ref(&element))
                    .unwrap_or(false);
                if !own {
                    return;
                }
                let done = pending.borrow_mut().take();
                if let Some(done) = done {
                    done();
                }
            }) as Box<dyn FnMut(Event)>)
        };
        let _ = element
            .add_event_listener_with_callback("transitionend", listener.as_ref().unchecked_ref());

        let fallback = Timeout::new(fallback_ms, move || {
            let done = pending.borrow_mut().take();
            if let Some(done) = done {
                debug!("transitionend not seen, tearing down on timeout");
                done();
            }
        });

        Self {
            element: element.clone(),
            listener,
            _fallback: fallback,
        }
    }
}

impl Drop for TransitionTeardown {
    fn drop(&mut self) {
        let _ = self.element.remove_event_listener_with_callback(
            "transitionend",
            self.listener.as_ref().unchecked_ref(),
        );
    }
}

/// Best-effort prefetch. Load errors are ignored: a failed preload only
/// means the real load happens later.
pub fn preload_image(src: &str) {
    if let Ok(img) = HtmlImageElement::new() {
        img.set_src(src);
    }
}

/// `requestAnimationFrame` loop. The callback gets the frame timestamp and
/// returns whether to keep going. Dropping the loop cancels the next frame.
pub struct AnimationLoop {
    handle: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl AnimationLoop {
    pub fn start(mut frame: impl FnMut(f64) -> bool + 'static) -> Result<Self, UiError> {
        let win = window().ok_or(UiError::MissingElement("window"))?;
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

        let weak: Weak<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::downgrade(&callback);
        let handle_inner = handle.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            handle_inner.set(None);
            if !frame(ts) {
                return;
            }
            let (Some(win), Some(cb)) = (window(), weak.upgrade()) else {
                return;
            };
            let cb = cb.borrow();
            if let Some(cb) = cb.as_ref() {
                handle_inner.set(win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
            }
        }) as Box<dyn FnMut(f64)>));

        if let Some(cb) = callback.borrow().as_ref() {
            handle.set(win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        }
        Ok(Self { handle, callback })
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(win)) = (self.handle.take(), window()) {
            let _ = win.cancel_animation_frame(id);
        }
        self.callback.borrow_mut().take();
    }
}

/// IntersectionObserver on a single element. The callback gets each
/// intersection change and returns whether to keep watching; returning
/// `false` unobserves the element.
pub struct IntersectionWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl IntersectionWatch {
    pub fn new(
        element: &Element,
        threshold: f64,
        root_margin: &str,
        mut on_change: impl FnMut(bool) -> bool + 'static,
    ) -> Result<Self, UiError> {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !on_change(entry.is_intersecting()) {
                    observer.unobserve(&entry.target());
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|_| UiError::MissingElement("IntersectionObserver"))?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Event delegation: the closest ancestor of the event target (itself
/// included) that matches `selector`.
pub fn closest_target(event: &Event, selector: &str) -> Option<Element> {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
}

/// Delegated click on a trigger: the trigger's `attr` value.
pub fn trigger_attribute(event: &MouseEvent, selector: &str, attr: &str) -> Option<String> {
    closest_target(event, selector).and_then(|el| el.get_attribute(attr))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn scroll_lock_restores_previous_overflow() {
        let body = body().unwrap();
        let _ = body.style().set_property("overflow", "auto");
        {
            let _lock = ScrollLock::acquire().unwrap();
            assert_eq!(body.style().get_property_value("overflow").unwrap(), "hidden");
        }
        assert_eq!(body.style().get_property_value("overflow").unwrap(), "auto");
        let _ = body.style().remove_property("overflow");
    }

    #[wasm_bindgen_test(async)]
    async fn teardown_falls_back_to_timeout() {
        let document = window().unwrap().document().unwrap();
        let element = document.create_element("div").unwrap();
        let done = Rc::new(Cell::new(0));

        let _guard = {
            let done = done.clone();
            TransitionTeardown::new(&element, 20, move || done.set(done.get() + 1))
        };
        TimeoutFuture::new(60).await;
        assert_eq!(done.get(), 1);
    }

    #[wasm_bindgen_test(async)]
    async fn dropped_teardown_never_runs() {
        let document = window().unwrap().document().unwrap();
        let element = document.create_element("div").unwrap();
        let done = Rc::new(Cell::new(false));

        let guard = {
            let done = done.clone();
            TransitionTeardown::new(&element, 20, move || done.set(true))
        };
        drop(guard);
        TimeoutFuture::new(60).await;
        assert!(!done.get());
    }

    #[wasm_bindgen_test]
    fn delegated_click_finds_trigger() {
        let document = window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_inner_html(r#"<button class="services__button" data-id="audit"><span>go</span></button>"#);
        document.body().unwrap().append_child(&root).unwrap();

        let span = root.query_selector("span").unwrap().unwrap();
        let found = std::rc::Rc::new(std::cell::RefCell::new(None));
        let listener = {
            let found = found.clone();
            Closure::wrap(Box::new(move |e: MouseEvent| {
                *found.borrow_mut() = trigger_attribute(&e, ".services__button", "data-id");
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        root.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .unwrap();
        span.dyn_ref::<HtmlElement>().unwrap().click();

        assert_eq!(found.borrow().as_deref(), Some("audit"));
        root.remove();
    }
}
