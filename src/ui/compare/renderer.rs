// SPDX-License-Identifier: MPL-2.0
//! Canvas program rendering the image pair and translating pointer events.
//!
//! Drawing re-derives the clip geometry from the component state on every
//! frame, so bounds, zoom, pan, and split changes are always reflected.

use crate::config::HANDLE_HIT_SLOP;
use crate::ui::compare::component::{Message, State};
use crate::ui::theme;
use iced::mouse;
use iced::widget::canvas;
use iced::{Point, Rectangle};

/// Canvas program for the comparison surface.
pub struct CompareRenderer<'a> {
    pub state: &'a State,
}

impl CompareRenderer<'_> {
    fn wheel_notches(delta: mouse::ScrollDelta) -> f32 {
        match delta {
            mouse::ScrollDelta::Lines { y, .. } => y,
            mouse::ScrollDelta::Pixels { y, .. } => y / 20.0,
        }
    }
}

impl canvas::Program<Message> for CompareRenderer<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: iced::Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        match event {
            // Treat the cursor leaving the canvas like a release so no drag
            // survives without a pointer.
            iced::Event::Mouse(iced::mouse::Event::CursorLeft) => {
                return Some(Action::publish(Message::PointerReleased).and_capture());
            }
            iced::Event::Mouse(iced::mouse::Event::ButtonPressed(iced::mouse::Button::Left)) => {
                if let Some(position) = cursor.position_in(bounds) {
                    let message = if self.state.split.hit_test(
                        position,
                        bounds.height,
                        HANDLE_HIT_SLOP,
                    ) {
                        Message::HandlePressed {
                            position,
                            viewport: bounds.size(),
                        }
                    } else {
                        Message::PanStarted { position }
                    };
                    return Some(Action::publish(message).and_capture());
                }
            }
            iced::Event::Mouse(iced::mouse::Event::CursorMoved { .. }) => {
                // A move with the cursor outside bounds ends any drag
                if cursor.position_in(bounds).is_none() {
                    if self.state.handle.is_dragging || self.state.pan.is_panning() {
                        return Some(Action::publish(Message::PointerReleased).and_capture());
                    }
                    return None;
                }

                if self.state.handle.is_dragging || self.state.pan.is_panning() {
                    if let Some(position) = cursor.position_in(bounds) {
                        return Some(
                            Action::publish(Message::PointerMoved {
                                position,
                                viewport: bounds.size(),
                            })
                            .and_capture(),
                        );
                    }
                }
            }
            iced::Event::Mouse(iced::mouse::Event::ButtonReleased(iced::mouse::Button::Left)) => {
                return Some(Action::publish(Message::PointerReleased).and_capture());
            }
            iced::Event::Mouse(iced::mouse::Event::WheelScrolled { delta }) => {
                if cursor.position_in(bounds).is_some() {
                    let notches = Self::wheel_notches(*delta);
                    if notches != 0.0 {
                        return Some(
                            Action::publish(Message::WheelZoomed { notches }).and_capture(),
                        );
                    }
                }
            }
            _ => {}
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: iced::Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        use canvas::{Path, Stroke};

        let mut frame = canvas::Frame::new(renderer, bounds.size());

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), theme::compare_surface_color());

        let Some(layout) = self.state.layout(bounds.size()) else {
            return vec![frame.into_geometry()];
        };

        if let Some(left) = self.state.left() {
            frame.draw_image(layout.left_dest, canvas::Image::new(left.handle.clone()));
        }

        // Only the area right of the split shows the after image
        if let Some(right) = self.state.right() {
            let clip_region = layout.clip_viewport;
            let dest = layout.right_dest;
            frame.with_clip(clip_region, |clipped| {
                // with_clip draws relative to the region origin
                let local = Rectangle::new(
                    Point::new(dest.x - clip_region.x, dest.y - clip_region.y),
                    dest.size(),
                );
                clipped.draw_image(local, canvas::Image::new(right.handle.clone()));
            });
        }

        // Drag handle: translucent bar, center line, and a round grip
        let handle = layout.handle_bounds;
        frame.fill_rectangle(
            Point::new(handle.x, handle.y),
            handle.size(),
            theme::split_handle_border_color(),
        );

        let center_x = handle.x + handle.width / 2.0;
        let line = Path::line(
            Point::new(center_x, 0.0),
            Point::new(center_x, bounds.height),
        );
        frame.stroke(
            &line,
            Stroke::default()
                .with_width(2.0)
                .with_color(theme::split_handle_color()),
        );

        let grip = Path::circle(Point::new(center_x, bounds.height / 2.0), 12.0);
        frame.fill(&grip, theme::split_handle_color());
        frame.stroke(
            &grip,
            Stroke::default()
                .with_width(1.5)
                .with_color(theme::split_handle_border_color()),
        );

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: iced::Rectangle,
        cursor: iced::mouse::Cursor,
    ) -> mouse::Interaction {
        if self.state.handle.is_dragging {
            return mouse::Interaction::ResizingHorizontally;
        }
        if self.state.pan.is_panning() {
            return mouse::Interaction::Grabbing;
        }

        match cursor.position_in(bounds) {
            Some(position)
                if self
                    .state
                    .split
                    .hit_test(position, bounds.height, HANDLE_HIT_SLOP) =>
            {
                mouse::Interaction::ResizingHorizontally
            }
            Some(_) if self.state.has_images() => mouse::Interaction::Grab,
            _ => mouse::Interaction::default(),
        }
    }
}
