// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{App, Message};
use crate::ui::compare;
use crate::ui::theme;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Container, Text},
    Element, Length,
};

/// Renders the current application view based on loading state.
pub fn view(app: &App) -> Element<'_, Message> {
    if let Some(error) = &app.load_error {
        return centered_message(
            Text::new(format!("Failed to load images: {error}"))
                .color(theme::error_text_color()),
        );
    }

    if app.compare.has_images() {
        return compare::pane::view(&app.compare).map(Message::Compare);
    }

    let hint = if app.awaiting_paths {
        "Usage: iced_reveal <before-image> <after-image>"
    } else {
        "Loading images…"
    };

    centered_message(Text::new(hint).color(theme::muted_text_color()))
}

fn centered_message(text: Text<'_>) -> Element<'_, Message> {
    Container::new(text)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
