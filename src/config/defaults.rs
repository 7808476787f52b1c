// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Default zoom level when opening an image pair (100% = original size).
pub const DEFAULT_ZOOM_PERCENT: f32 = 100.0;

/// Minimum allowed zoom percentage.
pub const MIN_ZOOM_PERCENT: f32 = 10.0;

/// Maximum allowed zoom percentage.
pub const MAX_ZOOM_PERCENT: f32 = 800.0;

/// Default zoom step for zoom in/out operations.
pub const DEFAULT_ZOOM_STEP_PERCENT: f32 = 10.0;

/// Minimum allowed zoom step percentage.
pub const MIN_ZOOM_STEP_PERCENT: f32 = 1.0;

/// Maximum allowed zoom step percentage.
pub const MAX_ZOOM_STEP_PERCENT: f32 = 200.0;

// ==========================================================================
// Split Handle Defaults
// ==========================================================================

/// Width of the draggable split handle, in viewport pixels.
/// The split position is clamped to `[0, viewport_width - HANDLE_WIDTH]`.
pub const HANDLE_WIDTH: f32 = 10.0;

/// Extra pixels on each side of the handle that still count as a hit.
pub const HANDLE_HIT_SLOP: f32 = 4.0;

/// Initial split position before the user drags, in viewport pixels.
pub const DEFAULT_SPLIT_POSITION: f32 = 100.0;
