use crate::core::Rect;
use glam::DVec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(el: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `f` once after `ms` milliseconds. Returns false if no window is present.
pub fn set_timeout(ms: u32, f: impl FnOnce() + 'static) -> bool {
    let Some(window) = web::window() else {
        return false;
    };
    let callback = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref::<js_sys::Function>(),
            ms as i32,
        )
        .is_ok()
}

pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn query_selector(root: &web::Element, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

#[inline]
pub fn rect_of(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Layout viewport in CSS pixels (`innerWidth` x `innerHeight`).
pub fn viewport_size() -> Option<DVec2> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some(DVec2::new(width, height))
}

/// Position a `position: fixed` element by its top-left corner.
pub fn place_at(el: &web::HtmlElement, top_left: DVec2) {
    let style = el.style();
    _ = style.set_property("left", &format!("{}px", top_left.x));
    _ = style.set_property("top", &format!("{}px", top_left.y));
}

/// Create a `<span>` with the given class (may be empty) and text.
pub fn create_span(
    document: &web::Document,
    class: &str,
    text: &str,
) -> Option<web::HtmlElement> {
    let el = document
        .create_element("span")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    el.set_text_content(Some(text));
    Some(el)
}

pub fn create_div(document: &web::Document, class: &str) -> Option<web::HtmlElement> {
    let el = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    el.set_class_name(class);
    Some(el)
}

#[inline]
pub fn clear_children(el: &web::Element) {
    el.set_inner_html("");
}
