use crate::constants::HIDDEN_CLASS;
use web_sys as web;

// Panels and the rejection banner toggle through the stylesheet's `hidden`
// class. The avoided button is taken out of layout with an inline style.

#[inline]
pub fn show(el: &web::Element) {
    _ = el.class_list().remove_1(HIDDEN_CLASS);
}

#[inline]
pub fn hide(el: &web::Element) {
    _ = el.class_list().add_1(HIDDEN_CLASS);
}

#[inline]
pub fn remove_from_layout(el: &web::HtmlElement) {
    _ = el.style().set_property("display", "none");
}
