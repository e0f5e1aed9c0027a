//! Viewport-aware placement of the reaction picker.
//!
//! The picker has a fixed width and is opened from a per-message trigger.
//! For the user's own (right-aligned) messages it grows to the left of the
//! trigger, for received messages to the right. The result is clamped so the
//! picker keeps a margin from both viewport edges.

use serde::{Deserialize, Serialize};

/// Width of the reaction picker card.
pub const PICKER_WIDTH: f32 = 280.0;

/// Minimum distance kept between the picker and a viewport edge.
pub const VIEWPORT_MARGIN: f32 = 10.0;

/// Overlap kept with the trigger when the picker opens to its left.
pub const RIGHT_ANCHOR_OVERLAP: f32 = 40.0;

/// Top-left corner of the element that opened the picker, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TriggerRect {
    pub left: f32,
    pub top: f32,
}

impl TriggerRect {
    pub fn new(left: f32, top: f32) -> Self {
        Self { left, top }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Computes the picker's top-left corner.
///
/// The picker never crosses the right edge and keeps the margin on the left
/// whenever the viewport is at least `width + 20` wide. A trigger that would
/// overflow is pulled back to `viewport_width - width - 10`. On narrower
/// viewports the left margin wins.
pub fn place_popover(
    trigger: TriggerRect,
    viewport_width: f32,
    width: f32,
    anchored_right: bool,
) -> Point {
    let mut x = if anchored_right {
        trigger.left - width + RIGHT_ANCHOR_OVERLAP
    } else {
        trigger.left
    };
    if x + width > viewport_width {
        x = viewport_width - width - VIEWPORT_MARGIN;
    }
    if x < VIEWPORT_MARGIN {
        x = VIEWPORT_MARGIN;
    }
    Point { x, y: trigger.top }
}
