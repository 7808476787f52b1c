// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.

use super::{App, Message};
use crate::config::{self, Config};
use crate::ui::compare;
use iced::Task;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Compare(message) => {
            match app.compare.update(message) {
                compare::Effect::PersistPreferences => persist_preferences(app),
                compare::Effect::None => {}
            }
            Task::none()
        }
        Message::LeftLoaded(Ok(image)) => {
            app.compare.set_left(image);
            Task::none()
        }
        Message::RightLoaded(Ok(image)) => {
            app.compare.set_right(image);
            Task::none()
        }
        Message::LeftLoaded(Err(error)) | Message::RightLoaded(Err(error)) => {
            app.load_error = Some(error.to_string());
            Task::none()
        }
    }
}

fn persist_preferences(app: &App) {
    let config = Config {
        fit_to_window: Some(app.compare.zoom.fit_to_window),
        zoom_step: Some(app.compare.zoom_step_percent()),
    };

    if let Err(error) = config::save(&config) {
        eprintln!("Failed to save config: {:?}", error);
    }
}
