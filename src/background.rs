use crate::core::plan_background_hearts;
use crate::dom;
use web_sys as web;

/// Seed the floating hearts behind the card. Returns how many were added.
pub fn populate_hearts(document: &web::Document) -> usize {
    let Ok(Some(container)) = document.query_selector(".hearts-bg") else {
        log::warn!("[background] missing .hearts-bg");
        return 0;
    };
    let mut added = 0;
    for (left_pct, glyph) in plan_background_hearts() {
        let Some(span) = dom::create_span(document, "", glyph) else {
            continue;
        };
        let style = span.style();
        _ = style.set_property("left", &format!("{}%", left_pct));
        _ = style.set_property("top", "100%");
        if container.append_child(&span).is_ok() {
            added += 1;
        }
    }
    added
}
