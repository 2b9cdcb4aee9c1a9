use crate::constants::{AVOID_RADIUS_PX, JUMP_DISTANCE_PX, VIEWPORT_PADDING_PX};
use glam::DVec2;

// Pointer-avoidance geometry. Everything here is in CSS pixels relative to the
// viewport (the same space as getBoundingClientRect and clientX/clientY).

/// Axis-aligned box as reported by the layout engine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    #[inline]
    pub fn half_size(&self) -> DVec2 {
        DVec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Unmounted or `display:none` elements report a zero-sized box.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AvoidParams {
    /// Pointer distance (to the target center) below which the target jumps.
    pub radius: f64,
    /// Length of every jump.
    pub jump: f64,
    /// Minimum gap between the target and each viewport edge.
    pub padding: f64,
}

impl Default for AvoidParams {
    fn default() -> Self {
        Self {
            radius: AVOID_RADIUS_PX,
            jump: JUMP_DISTANCE_PX,
            padding: VIEWPORT_PADDING_PX,
        }
    }
}

/// Direction used when the pointer sits exactly on the target center.
pub const FALLBACK_DIRECTION: DVec2 = DVec2::X;

/// Clamp `value` into `[min, max]`. When the range is inverted (the element is
/// larger than the space available) the midpoint of the two bounds is used.
#[inline]
pub fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    if min > max {
        return (min + max) * 0.5;
    }
    value.max(min).min(max)
}

/// Top-left position that centers `target` horizontally over `anchor` and
/// aligns it with the anchor's top edge. `None` when the anchor has no layout.
pub fn sync_position(anchor: &Rect, target: &Rect) -> Option<DVec2> {
    if anchor.is_empty() {
        return None;
    }
    let width = if target.width.is_finite() {
        target.width
    } else {
        0.0
    };
    Some(DVec2::new(
        anchor.left + (anchor.width - width) * 0.5,
        anchor.top,
    ))
}

/// Unit vector from `pointer` towards `center`.
#[inline]
pub fn repulsion_dir(pointer: DVec2, center: DVec2) -> DVec2 {
    (center - pointer).try_normalize().unwrap_or(FALLBACK_DIRECTION)
}

/// Unclamped center after one jump away from `pointer`.
#[inline]
pub fn jump_center(pointer: DVec2, center: DVec2, jump: f64) -> DVec2 {
    center + repulsion_dir(pointer, center) * jump
}

/// Keep the center of a box with half extents `half` inside the padded viewport.
pub fn clamp_center(center: DVec2, half: DVec2, viewport: DVec2, padding: f64) -> DVec2 {
    DVec2::new(
        clamp_axis(center.x, padding + half.x, viewport.x - padding - half.x),
        clamp_axis(center.y, padding + half.y, viewport.y - padding - half.y),
    )
}

/// Decide whether the target should jump away from the pointer.
///
/// Returns the new top-left for the target, or `None` when the pointer is far
/// enough away (the common case) or the target has no layout.
pub fn evaluate(
    pointer: DVec2,
    target: &Rect,
    viewport: DVec2,
    params: &AvoidParams,
) -> Option<DVec2> {
    if target.is_empty() {
        return None;
    }
    let center = target.center();
    if pointer.distance(center) >= params.radius {
        return None;
    }
    let candidate = jump_center(pointer, center, params.jump);
    let half = target.half_size();
    let clamped = clamp_center(candidate, half, viewport, params.padding);
    Some(clamped - half)
}
