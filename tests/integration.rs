// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use iced::{Point, Size};
use iced_reveal::config::{self, Config, DEFAULT_ZOOM_STEP_PERCENT};
use iced_reveal::media;
use iced_reveal::ui::compare::{self, controls, Message};
use tempfile::tempdir;

const VIEWPORT: Size = Size {
    width: 800.0,
    height: 600.0,
};

fn write_png(dir: &std::path::Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut img = image_rs::RgbaImage::new(width, height);
    for pixel in img.pixels_mut() {
        *pixel = image_rs::Rgba([200, 100, 50, 255]);
    }
    img.save(&path).expect("failed to write png");
    path
}

#[test]
fn test_full_drag_interaction_produces_matching_clip() {
    let dir = tempdir().expect("failed to create temp dir");
    let left_path = write_png(dir.path(), "before.png", 32, 32);
    let right_path = write_png(dir.path(), "after.png", 32, 32);

    let mut state = compare::State::new();
    state.set_left(media::load(&left_path).expect("before image loads"));
    state.set_right(media::load(&right_path).expect("after image loads"));
    state.zoom.apply_manual_zoom(100.0);

    // Idle move must not disturb anything
    let split_before = state.split.position;
    state.update(Message::PointerMoved {
        position: Point::new(400.0, 300.0),
        viewport: VIEWPORT,
    });
    assert_abs_diff_eq!(state.split.position, split_before);

    // Drag the handle to the right and verify the clip follows
    state.update(Message::HandlePressed {
        position: Point::new(split_before, 300.0),
        viewport: VIEWPORT,
    });
    state.update(Message::PointerMoved {
        position: Point::new(512.0, 300.0),
        viewport: VIEWPORT,
    });
    state.update(Message::PointerReleased);

    assert_abs_diff_eq!(state.split.position, 512.0);
    assert!(!state.handle.is_dragging);

    let layout = state.layout(VIEWPORT).expect("both images are loaded");
    assert_abs_diff_eq!(layout.clip_viewport.x, 512.0, epsilon = 1e-3);
    assert_abs_diff_eq!(
        layout.clip_viewport.width,
        VIEWPORT.width - 512.0,
        epsilon = 1e-3
    );

    // Clip left edge in image coordinates matches the documented transform
    let expected_x = (512.0 - layout.offset.x) / layout.zoom;
    let right_inset = (layout.right_dest.x - layout.offset.x) / layout.zoom;
    assert_abs_diff_eq!(layout.clip.x, expected_x - right_inset, epsilon = 1e-3);
}

#[test]
fn test_pan_shifts_clip_in_image_space_but_not_viewport_space() {
    let mut state = compare::State::new();
    state.set_left(media::ImageData::from_rgba(64, 64, vec![0; 64 * 64 * 4]));
    state.set_right(media::ImageData::from_rgba(64, 64, vec![0; 64 * 64 * 4]));
    state.zoom.apply_manual_zoom(200.0);

    let before = state.layout(VIEWPORT).expect("images set");

    state.update(Message::PanStarted {
        position: Point::new(400.0, 300.0),
    });
    state.update(Message::PointerMoved {
        position: Point::new(440.0, 300.0),
        viewport: VIEWPORT,
    });
    state.update(Message::PointerReleased);

    let after = state.layout(VIEWPORT).expect("images set");

    // The split stays put on screen while the image slides underneath it
    assert_abs_diff_eq!(after.clip_viewport.x, before.clip_viewport.x, epsilon = 1e-3);
    assert_abs_diff_eq!(after.clip.x, before.clip.x - 40.0 / after.zoom, epsilon = 1e-3);
}

#[test]
fn test_preferences_round_trip_through_config_file() {
    let dir = tempdir().expect("failed to create temp dir");
    let config_path = dir.path().join("settings.toml");

    let config = Config {
        fit_to_window: Some(false),
        zoom_step: Some(25.0),
    };
    config::save_to_path(&config, &config_path).expect("failed to save config");

    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    assert_eq!(loaded.fit_to_window, Some(false));
    assert_eq!(loaded.zoom_step, Some(25.0));

    let mut state = compare::State::new();
    state.set_zoom_step_percent(loaded.zoom_step.unwrap_or(DEFAULT_ZOOM_STEP_PERCENT));
    state.disable_fit_to_window();

    state.update(Message::Controls(controls::Message::ZoomIn));
    assert_abs_diff_eq!(state.zoom.zoom_percent, 125.0);
}
