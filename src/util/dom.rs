//! Thin `web-sys` helpers shared by the components.
//!
//! ERROR HANDLING
//! ==============
//! DOM calls that can only fail on a broken document (bad selector, detached
//! node) are logged at debug level and otherwise ignored; an enhancement that
//! cannot find its elements simply does not install.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

#[must_use]
pub fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

#[must_use]
pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Element by id, cast to the requested element type.
#[must_use]
pub fn by_id<T: JsCast>(id: &str) -> Option<T> {
    document()?.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Every element matching `selector`, in document order.
#[must_use]
pub fn query_all(selector: &str) -> Vec<web_sys::Element> {
    let Some(doc) = document() else {
        return Vec::new();
    };
    match doc.query_selector_all(selector) {
        Ok(list) => collect_elements(&list),
        Err(err) => {
            log::debug!("bad selector {selector}: {err:?}");
            Vec::new()
        }
    }
}

/// First descendant of `root` matching `selector`.
#[must_use]
pub fn query_first(root: &web_sys::Element, selector: &str) -> Option<web_sys::Element> {
    root.query_selector(selector).ok().flatten()
}

fn collect_elements(list: &web_sys::NodeList) -> Vec<web_sys::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// Attach a listener that lives as long as the page.
pub fn listen(target: &web_sys::EventTarget, event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        log::debug!("could not listen for {event}: {err:?}");
    }
    cb.forget();
}

pub fn add_class(el: &web_sys::Element, class: &str) {
    if let Err(err) = el.class_list().add_1(class) {
        log::debug!("add class {class}: {err:?}");
    }
}

pub fn remove_class(el: &web_sys::Element, class: &str) {
    if let Err(err) = el.class_list().remove_1(class) {
        log::debug!("remove class {class}: {err:?}");
    }
}

pub fn set_class(el: &web_sys::Element, class: &str, on: bool) {
    if on {
        add_class(el, class);
    } else {
        remove_class(el, class);
    }
}

/// Set an inline style property; an empty value clears it.
pub fn set_style(el: &web_sys::HtmlElement, property: &str, value: &str) {
    let style = el.style();
    let result = if value.is_empty() {
        style.remove_property(property).map(|_| ())
    } else {
        style.set_property(property, value)
    };
    if let Err(err) = result {
        log::debug!("style {property}: {err:?}");
    }
}

pub fn set_text(el: &web_sys::Element, text: &str) {
    el.set_text_content(Some(text));
}

/// Run `f` once after `delay_ms`.
pub fn after(delay_ms: u32, f: impl FnOnce() + 'static) {
    gloo_timers::callback::Timeout::new(delay_ms, f).forget();
}

/// Milliseconds since page load.
#[must_use]
pub fn now_ms() -> f64 {
    window().and_then(|w| w.performance()).map_or_else(js_sys::Date::now, |p| p.now())
}

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Call `step` on every animation frame until it returns `false`.
pub fn frame_loop(mut step: impl FnMut(f64) -> bool + 'static) {
    let holder: FrameSlot = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |ts: f64| {
        if step(ts) {
            request_frame(&holder_for_cb);
        } else {
            holder_for_cb.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>);
    *holder.borrow_mut() = Some(cb);
    request_frame(&holder);
}

fn request_frame(holder: &FrameSlot) {
    let Some(win) = window() else {
        return;
    };
    let slot = holder.borrow();
    let Some(cb) = slot.as_ref() else {
        return;
    };
    if let Err(err) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
        log::debug!("requestAnimationFrame failed: {err:?}");
    }
}

/// Whether the user asked the OS to reduce motion.
#[must_use]
pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .is_some_and(|mq| mq.matches())
}

/// Current value of an `<input>` or `<textarea>`.
#[must_use]
pub fn field_value(el: &web_sys::Element) -> String {
    if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        area.value()
    } else if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        input.value()
    } else {
        String::new()
    }
}
