// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers for the comparison surface and split handle.

use iced::Color;

/// Flat surface color behind the image pair.
pub fn compare_surface_color() -> Color {
    Color::from_rgb(0.12, 0.12, 0.13)
}

/// Color of the split handle bar.
pub fn split_handle_color() -> Color {
    Color::from_rgba(1.0, 1.0, 1.0, 0.9)
}

/// Border color around the split handle grip.
pub fn split_handle_border_color() -> Color {
    Color::from_rgba(0.0, 0.0, 0.0, 0.6)
}

/// Standard color for error text.
pub fn error_text_color() -> Color {
    Color::from_rgb(0.86, 0.27, 0.27)
}

/// Color for placeholder hints when no images are loaded.
pub fn muted_text_color() -> Color {
    Color::from_rgb(0.55, 0.55, 0.58)
}
