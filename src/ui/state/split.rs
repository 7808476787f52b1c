// SPDX-License-Identifier: MPL-2.0
//! Split position state and the clip-rectangle calculation.
//!
//! The split position lives in viewport coordinates. The right-hand image is
//! clipped in its own (unzoomed) coordinate space, so the calculator converts
//! the split position through the current zoom and pan transform.

use crate::config::{DEFAULT_SPLIT_POSITION, HANDLE_WIDTH};
use iced::{Point, Rectangle, Size, Vector};

/// Manages the split position between the before and after images.
#[derive(Debug, Clone)]
pub struct SplitState {
    /// Current split position, in viewport coordinates.
    pub position: f32,

    /// Width reserved for the drag handle at the right edge.
    pub handle_width: f32,
}

impl Default for SplitState {
    fn default() -> Self {
        Self {
            position: DEFAULT_SPLIT_POSITION,
            handle_width: HANDLE_WIDTH,
        }
    }
}

impl SplitState {
    /// Largest split position that keeps the handle inside the viewport.
    #[must_use]
    pub fn max_position(&self, viewport_width: f32) -> f32 {
        (viewport_width - self.handle_width).max(0.0)
    }

    /// Moves the split to `x`, clamped to `[0, viewport_width - handle_width]`.
    pub fn set_position(&mut self, x: f32, viewport_width: f32) {
        self.position = x.clamp(0.0, self.max_position(viewport_width));
    }

    /// Re-clamps the current position after a viewport resize.
    pub fn clamp_to(&mut self, viewport_width: f32) {
        self.position = self.position.clamp(0.0, self.max_position(viewport_width));
    }

    /// Viewport rectangle occupied by the drag handle, tracking the split.
    #[must_use]
    pub fn handle_bounds(&self, viewport_height: f32) -> Rectangle {
        Rectangle::new(
            Point::new(self.position, 0.0),
            Size::new(self.handle_width, viewport_height),
        )
    }

    /// Whether `cursor` (viewport coordinates) is over the handle, allowing
    /// `slop` extra pixels on each side.
    #[must_use]
    pub fn hit_test(&self, cursor: Point, viewport_height: f32, slop: f32) -> bool {
        let bounds = self.handle_bounds(viewport_height);
        cursor.x >= bounds.x - slop
            && cursor.x <= bounds.x + bounds.width + slop
            && cursor.y >= bounds.y
            && cursor.y <= bounds.y + bounds.height
    }
}

/// Computes the clip rectangle for the right-hand image.
///
/// The result is expressed in the right image's own coordinate space:
/// `offset` is the content-to-viewport translation in viewport pixels,
/// `delta_x` the image's horizontal layout inset within the shared content
/// box (content pixels). Only the area right of the split stays visible.
///
/// Returns `None` when either zoom factor is non-positive; that is a
/// degenerate or uninitialized transform and the previous clip must be kept
/// rather than dividing by zero.
#[must_use]
pub fn clip_rectangle(
    zoom_x: f32,
    zoom_y: f32,
    offset: Vector,
    viewport: Size,
    split: f32,
    delta_x: f32,
) -> Option<Rectangle> {
    if zoom_x <= 0.0 || zoom_y <= 0.0 {
        return None;
    }

    // Convert the split position from viewport to content coordinates
    let x = (split - offset.x) / zoom_x - delta_x;
    let y = (0.0 - offset.y) / zoom_y;
    let width = (viewport.width - split) / zoom_x;
    let height = viewport.height / zoom_y;

    Some(Rectangle::new(Point::new(x, y), Size::new(width, height)))
}

/// Maps a rectangle from the right image's coordinate space back to viewport
/// coordinates under the same transform `clip_rectangle` used. The renderer
/// clips in viewport space, so the round trip must land the clip's left edge
/// exactly on the split position.
#[must_use]
pub fn to_viewport(rect: Rectangle, zoom_x: f32, zoom_y: f32, offset: Vector, delta_x: f32) -> Rectangle {
    Rectangle::new(
        Point::new(
            (rect.x + delta_x) * zoom_x + offset.x,
            rect.y * zoom_y + offset.y,
        ),
        Size::new(rect.width * zoom_x, rect.height * zoom_y),
    )
}
