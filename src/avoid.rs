use crate::core::{evaluate, sync_position, AvoidParams};
use crate::dom;
use glam::DVec2;
use web_sys as web;

/// Keeps the decline button out of the pointer's reach.
///
/// Geometry is read from layout on every call; nothing is cached between
/// events since resizes and reflows move things around.
#[derive(Clone)]
pub struct AvoidanceController {
    pub anchor: web::Element,
    pub target: web::HtmlElement,
    pub params: AvoidParams,
}

impl AvoidanceController {
    pub fn new(anchor: web::Element, target: web::HtmlElement, params: AvoidParams) -> Self {
        Self {
            anchor,
            target,
            params,
        }
    }

    /// Park the target over its placeholder in the card.
    pub fn synchronize(&self) {
        let anchor = dom::rect_of(&self.anchor);
        let target = dom::rect_of(&self.target);
        if let Some(top_left) = sync_position(&anchor, &target) {
            dom::place_at(&self.target, top_left);
        }
    }

    /// React to the pointer at `pointer` (client coordinates).
    pub fn evaluate(&self, pointer: DVec2) {
        let Some(viewport) = dom::viewport_size() else {
            return;
        };
        let rect = dom::rect_of(&self.target);
        if let Some(top_left) = evaluate(pointer, &rect, viewport, &self.params) {
            log::debug!(
                "[avoid] pointer=({:.0},{:.0}) jump to ({:.0},{:.0})",
                pointer.x,
                pointer.y,
                top_left.x,
                top_left.y
            );
            dom::place_at(&self.target, top_left);
        }
    }
}
