use crate::core::{Dancer, Particle};
use crate::dom;
use web_sys as web;

/// CSS custom properties a burst's keyframes read for the travel offset.
#[derive(Clone, Copy, Debug)]
pub struct OffsetVars {
    pub x: &'static str,
    pub y: &'static str,
}

pub const HEART_VARS: OffsetVars = OffsetVars { x: "--tx", y: "--ty" };
pub const FIREWORK_VARS: OffsetVars = OffsetVars { x: "--fx", y: "--fy" };

/// Append one span per particle to `parent`. Returns how many were attached.
pub fn render_particles(
    document: &web::Document,
    parent: &web::Element,
    particles: &[Particle],
    class: &str,
    vars: OffsetVars,
) -> usize {
    let mut attached = 0;
    for p in particles {
        let Some(span) = dom::create_span(document, class, p.glyph) else {
            continue;
        };
        let style = span.style();
        _ = style.set_property(vars.x, &format!("{}px", p.dx));
        _ = style.set_property(vars.y, &format!("{}px", p.dy));
        _ = style.set_property("animation-delay", &format!("{}s", p.delay_sec));
        if parent.append_child(&span).is_ok() {
            attached += 1;
        }
    }
    attached
}

pub fn render_dancers(document: &web::Document, parent: &web::Element, dancers: &[Dancer]) {
    for d in dancers {
        let Some(span) = dom::create_span(document, "dancing-bear", d.glyph) else {
            continue;
        };
        let style = span.style();
        _ = style.set_property("animation-delay", &format!("{}s", d.delay_sec));
        _ = style.set_property("left", &format!("{}%", d.left_pct));
        _ = parent.append_child(&span);
    }
}
