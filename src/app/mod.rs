// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the comparison component.
//!
//! The `App` struct wires together config, media loading, and the comparison
//! component, and translates component effects into side effects like config
//! persistence. Policy decisions (window sizing, persistence format) stay
//! close to the main update loop so user-facing behavior is easy to audit.

mod message;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, MAX_ZOOM_STEP_PERCENT, MIN_ZOOM_STEP_PERCENT};
use crate::media;
use crate::ui::compare;
use iced::{window, Element, Task, Theme};
use std::path::PathBuf;

/// Root Iced application state.
#[derive(Debug, Default)]
pub struct App {
    pub(crate) compare: compare::State,
    /// Error message shown when either image fails to decode.
    pub(crate) load_error: Option<String>,
    /// True when the launcher supplied fewer than two image paths.
    pub(crate) awaiting_paths: bool,
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 400;
pub const MIN_WINDOW_HEIGHT: u32 = 300;

/// Ensures zoom step values stay inside the supported range so persisted
/// configs cannot request nonsensical increments.
fn clamp_zoom_step(value: f32) -> f32 {
    value.clamp(MIN_ZOOM_STEP_PERCENT, MAX_ZOOM_STEP_PERCENT)
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes application state and kicks off asynchronous image
    /// loading based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();

        let mut app = App::default();

        if let Some(step) = config.zoom_step {
            app.compare.set_zoom_step_percent(clamp_zoom_step(step));
        }

        match config.fit_to_window {
            Some(true) | None => app.compare.enable_fit_to_window(),
            Some(false) => app.compare.disable_fit_to_window(),
        }

        let (left_path, right_path) = match (flags.left_path, flags.right_path) {
            (Some(left), Some(right)) => (left, right),
            _ => {
                app.awaiting_paths = true;
                return (app, Task::none());
            }
        };

        let task = Task::batch([
            load_image_task(left_path, Message::LeftLoaded),
            load_image_task(right_path, Message::RightLoaded),
        ]);

        (app, task)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn title(&self) -> String {
        String::from("Iced Reveal")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn load_image_task(
    path: String,
    on_done: fn(crate::error::Result<media::ImageData>) -> Message,
) -> Task<Message> {
    Task::perform(
        async move {
            let path = PathBuf::from(path);
            media::load(&path)
        },
        on_done,
    )
}
