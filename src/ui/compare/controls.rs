// SPDX-License-Identifier: MPL-2.0
//! Comparison controls: zoom buttons and fit-to-window toggle.

use crate::ui::state::zoom::ZoomState;
use iced::{
    alignment::Vertical,
    widget::{button, checkbox, Row, Space, Text},
    Element, Length,
};

#[derive(Debug, Clone)]
pub enum Message {
    ResetZoom,
    ZoomIn,
    ZoomOut,
    SetFitToWindow(bool),
}

pub fn view(zoom: &ZoomState) -> Element<'_, Message> {
    let zoom_label = Text::new(format!("Zoom: {:.0}%", zoom.zoom_percent));

    let zoom_out_button = button(Text::new("−"))
        .on_press(Message::ZoomOut)
        .padding([6, 12]);

    let reset_button = button(Text::new("Reset"))
        .on_press(Message::ResetZoom)
        .padding([6, 12]);

    let zoom_in_button = button(Text::new("+"))
        .on_press(Message::ZoomIn)
        .padding([6, 12]);

    let fit_toggle = checkbox(zoom.fit_to_window)
        .label("Fit to window")
        .on_toggle(Message::SetFitToWindow);

    Row::new()
        .spacing(10)
        .align_y(Vertical::Center)
        .push(zoom_label)
        .push(zoom_out_button)
        .push(reset_button)
        .push(zoom_in_button)
        .push(Space::new().width(Length::Fixed(16.0)))
        .push(fit_toggle)
        .into()
}
