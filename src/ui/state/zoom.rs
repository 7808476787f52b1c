// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! This module handles all zoom-related state and logic, including:
//! - Manual zoom percentage
//! - Fit-to-window mode
//! - Zoom step configuration

// Re-export zoom constants from centralized config for convenience
pub use crate::config::{
    DEFAULT_ZOOM_PERCENT, DEFAULT_ZOOM_STEP_PERCENT, MAX_ZOOM_PERCENT, MAX_ZOOM_STEP_PERCENT,
    MIN_ZOOM_PERCENT, MIN_ZOOM_STEP_PERCENT,
};

use iced::Size;

/// Zoom percentage, guaranteed to be within valid range (10%–800%).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomPercent(f32);

impl ZoomPercent {
    /// Creates a new zoom percentage, clamping the value to the valid range.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        Self(percent.clamp(MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the zoom as a multiplier (e.g., 100% → 1.0).
    #[must_use]
    pub fn as_factor(self) -> f32 {
        self.0 / 100.0
    }

    /// Increases zoom by the given step.
    #[must_use]
    pub fn zoom_in(self, step: f32) -> Self {
        Self::new(self.0 + step)
    }

    /// Decreases zoom by the given step.
    #[must_use]
    pub fn zoom_out(self, step: f32) -> Self {
        Self::new(self.0 - step)
    }
}

impl Default for ZoomPercent {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_PERCENT)
    }
}

/// Zoom step percentage, guaranteed to be within valid range (1%–200%).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStep(f32);

impl ZoomStep {
    /// Creates a new zoom step, clamping the value to the valid range.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        Self(percent.clamp(MIN_ZOOM_STEP_PERCENT, MAX_ZOOM_STEP_PERCENT))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ZoomStep {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_STEP_PERCENT)
    }
}

/// Manages all zoom-related state for the comparison viewer.
#[derive(Debug, Clone)]
pub struct ZoomState {
    /// Current zoom percentage (may be auto-calculated if `fit_to_window` is true)
    pub zoom_percent: f32,

    /// Last user-set zoom level (restored when disabling fit-to-window)
    pub manual_zoom_percent: f32,

    /// Whether fit-to-window mode is enabled
    pub fit_to_window: bool,

    /// Zoom step for zoom in/out operations (guaranteed valid by type).
    pub zoom_step: ZoomStep,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            zoom_percent: DEFAULT_ZOOM_PERCENT,
            manual_zoom_percent: DEFAULT_ZOOM_PERCENT,
            fit_to_window: true,
            zoom_step: ZoomStep::default(),
        }
    }
}

impl ZoomState {
    /// Applies a manual zoom percentage and disables fit-to-window
    pub fn apply_manual_zoom(&mut self, percent: f32) {
        let zoom = ZoomPercent::new(percent);
        self.manual_zoom_percent = zoom.value();
        self.zoom_percent = zoom.value();
        self.fit_to_window = false;
    }

    /// Enables fit-to-window mode
    pub fn enable_fit_to_window(&mut self) {
        self.fit_to_window = true;
    }

    /// Disables fit-to-window mode, preserving current zoom
    pub fn disable_fit_to_window(&mut self) {
        self.fit_to_window = false;
        let current = ZoomPercent::new(self.zoom_percent);
        self.manual_zoom_percent = current.value();
        self.zoom_percent = current.value();
    }

    /// Resets zoom to default values
    pub fn reset_zoom(&mut self) {
        self.zoom_percent = DEFAULT_ZOOM_PERCENT;
        self.manual_zoom_percent = DEFAULT_ZOOM_PERCENT;
        self.fit_to_window = false;
    }

    /// Applies zoom in by one step
    pub fn zoom_in(&mut self) {
        let new_zoom = ZoomPercent::new(self.zoom_percent).zoom_in(self.zoom_step.value());
        self.apply_manual_zoom(new_zoom.value());
    }

    /// Applies zoom out by one step
    pub fn zoom_out(&mut self) {
        let new_zoom = ZoomPercent::new(self.zoom_percent).zoom_out(self.zoom_step.value());
        self.apply_manual_zoom(new_zoom.value());
    }

    /// Effective zoom factor for the given content and viewport sizes.
    /// Fit-to-window derives the factor from the sizes; manual mode uses the
    /// stored percentage. Degenerate sizes fall back to the default zoom.
    #[must_use]
    pub fn effective_factor(&self, content: Size, viewport: Size) -> f32 {
        if self.fit_to_window {
            calculate_fit_zoom(content, viewport) / 100.0
        } else {
            self.zoom_percent / 100.0
        }
    }
}

/// Calculate the zoom percentage needed to fit content within the viewport.
#[must_use]
pub fn calculate_fit_zoom(content: Size, viewport: Size) -> f32 {
    if content.width <= 0.0 || content.height <= 0.0 || viewport.width <= 0.0 || viewport.height <= 0.0
    {
        return DEFAULT_ZOOM_PERCENT;
    }

    let scale_x = viewport.width / content.width;
    let scale_y = viewport.height / content.height;
    let scale = scale_x.min(scale_y);

    if !scale.is_finite() || scale <= 0.0 {
        return DEFAULT_ZOOM_PERCENT;
    }

    clamp_zoom(scale * 100.0)
}

/// Clamps zoom percentage to valid range.
#[must_use]
pub fn clamp_zoom(percent: f32) -> f32 {
    ZoomPercent::new(percent).value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn default_zoom_state_is_consistent() {
        let state = ZoomState::default();
        assert!(state.fit_to_window);
        assert_eq!(state.zoom_percent, DEFAULT_ZOOM_PERCENT);
        assert_eq!(state.manual_zoom_percent, DEFAULT_ZOOM_PERCENT);
    }

    #[test]
    fn apply_manual_zoom_clamps_and_disables_fit() {
        let mut state = ZoomState::default();

        state.apply_manual_zoom(9999.0);

        assert_eq!(state.zoom_percent, MAX_ZOOM_PERCENT);
        assert!(!state.fit_to_window);
    }

    #[test]
    fn zoom_in_out_work_correctly() {
        let mut state = ZoomState {
            zoom_step: ZoomStep::new(10.0),
            zoom_percent: 100.0,
            ..ZoomState::default()
        };

        state.zoom_in();
        assert_eq!(state.zoom_percent, 110.0);

        state.zoom_out();
        assert_eq!(state.zoom_percent, 100.0);
    }

    #[test]
    fn fit_zoom_picks_limiting_axis() {
        let percent = calculate_fit_zoom(Size::new(800.0, 600.0), Size::new(400.0, 400.0));
        // Width is the limiting axis: 400/800 = 50%
        assert_abs_diff_eq!(percent, 50.0);
    }

    #[test]
    fn fit_zoom_falls_back_on_degenerate_sizes() {
        let percent = calculate_fit_zoom(Size::new(0.0, 600.0), Size::new(400.0, 400.0));
        assert_abs_diff_eq!(percent, DEFAULT_ZOOM_PERCENT);
    }

    #[test]
    fn effective_factor_uses_manual_zoom_when_fit_disabled() {
        let mut state = ZoomState::default();
        state.apply_manual_zoom(150.0);

        let factor = state.effective_factor(Size::new(800.0, 600.0), Size::new(400.0, 400.0));
        assert_abs_diff_eq!(factor, 1.5);
    }
}
