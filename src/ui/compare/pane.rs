// SPDX-License-Identifier: MPL-2.0
//! Layout glue composing the zoom controls and the comparison canvas.

use crate::ui::compare::component::{Message, State};
use crate::ui::compare::{controls, renderer::CompareRenderer};
use iced::widget::{Canvas, Column, Container};
use iced::{Element, Length};

pub fn view(state: &State) -> Element<'_, Message> {
    let controls_view = controls::view(&state.zoom).map(Message::Controls);

    let canvas = Canvas::new(CompareRenderer { state })
        .width(Length::Fill)
        .height(Length::Fill);

    Column::new()
        .spacing(8)
        .push(Container::new(controls_view).padding(10))
        .push(
            Container::new(canvas)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into()
}
