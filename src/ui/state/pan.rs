// SPDX-License-Identifier: MPL-2.0
//! Pan state management
//!
//! Handles grab-and-drag panning of the zoomed image pair. Unlike a
//! scrollable, the pan offset is unbounded in both directions: content
//! follows the cursor directly.

use iced::{Point, Vector};

/// Manages the pan offset and the active drag anchor.
#[derive(Debug, Clone, Default)]
pub struct PanState {
    /// Current content translation, in viewport pixels.
    pub offset: Vector,

    /// Position where the drag started.
    start_position: Option<Point>,

    /// Pan offset when the drag started.
    start_offset: Option<Vector>,
}

impl PanState {
    /// Starts a pan drag at `position`.
    pub fn start(&mut self, position: Point) {
        self.start_position = Some(position);
        self.start_offset = Some(self.offset);
    }

    /// Stops the pan drag, keeping the current offset.
    pub fn stop(&mut self) {
        self.start_position = None;
        self.start_offset = None;
    }

    /// Whether a pan drag is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.start_position.is_some()
    }

    /// Calculates the new offset for the current cursor position.
    /// Returns `None` when no drag is active.
    #[must_use]
    pub fn calculate_offset(&self, current_position: Point) -> Option<Vector> {
        let start_pos = self.start_position?;
        let start_offset = self.start_offset?;

        let delta_x = current_position.x - start_pos.x;
        let delta_y = current_position.y - start_pos.y;

        Some(Vector::new(
            start_offset.x + delta_x,
            start_offset.y + delta_y,
        ))
    }

    /// Resets the offset to zero, e.g. when zoom is reset.
    pub fn reset(&mut self) {
        self.offset = Vector::new(0.0, 0.0);
        self.stop();
    }
}
