// SPDX-License-Identifier: MPL-2.0
//! Drag state for the split handle.
//!
//! A three-state interaction: idle, dragging, back to idle. Press enters
//! dragging, moves only have an effect while dragging, release always
//! returns to idle.

use iced::Point;

/// Manages the split handle drag interaction.
#[derive(Debug, Clone, Default)]
pub struct HandleDrag {
    /// Whether the handle is currently being dragged.
    pub is_dragging: bool,

    /// Cursor position at the most recent press or move.
    pub last_position: Option<Point>,
}

impl HandleDrag {
    /// Starts dragging the handle.
    pub fn press(&mut self, position: Point) {
        self.is_dragging = true;
        self.last_position = Some(position);
    }

    /// Records a pointer move. Returns the new target split position while
    /// dragging, `None` otherwise; moves before a press are no-ops.
    pub fn drag(&mut self, position: Point) -> Option<f32> {
        if !self.is_dragging {
            return None;
        }

        self.last_position = Some(position);
        Some(position.x)
    }

    /// Ends the drag. Safe to call in any state.
    pub fn release(&mut self) {
        self.is_dragging = false;
        self.last_position = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        let state = HandleDrag::default();
        assert!(!state.is_dragging);
        assert!(state.last_position.is_none());
    }

    #[test]
    fn press_enters_dragging() {
        let mut state = HandleDrag::default();
        state.press(Point::new(120.0, 40.0));

        assert!(state.is_dragging);
        assert_eq!(state.last_position, Some(Point::new(120.0, 40.0)));
    }

    #[test]
    fn drag_before_press_is_a_no_op() {
        let mut state = HandleDrag::default();
        assert!(state.drag(Point::new(50.0, 50.0)).is_none());
        assert!(!state.is_dragging);
        assert!(state.last_position.is_none());
    }

    #[test]
    fn drag_while_pressed_yields_cursor_x() {
        let mut state = HandleDrag::default();
        state.press(Point::new(100.0, 10.0));

        let target = state.drag(Point::new(140.0, 25.0));
        assert_eq!(target, Some(140.0));
        assert_eq!(state.last_position, Some(Point::new(140.0, 25.0)));
    }

    #[test]
    fn release_clears_state_from_dragging() {
        let mut state = HandleDrag::default();
        state.press(Point::new(100.0, 10.0));
        state.release();

        assert!(!state.is_dragging);
        assert!(state.last_position.is_none());
    }

    #[test]
    fn release_is_idempotent_when_idle() {
        let mut state = HandleDrag::default();
        state.release();
        state.release();

        assert!(!state.is_dragging);
    }

    #[test]
    fn drag_after_release_is_ignored() {
        let mut state = HandleDrag::default();
        state.press(Point::new(100.0, 10.0));
        state.release();

        assert!(state.drag(Point::new(200.0, 10.0)).is_none());
    }
}
