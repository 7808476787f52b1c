// SPDX-License-Identifier: MPL-2.0
//! Comparison component encapsulating state and update logic.
//!
//! All pointer interaction is routed through here: presses land either on
//! the split handle or on the pan surface, moves only have an effect while
//! one of those drags is active, and a release ends both unconditionally.

use crate::media::ImageData;
use crate::ui::compare::controls;
use crate::ui::state::{split, HandleDrag, PanState, SplitState, ZoomState};
use iced::{Point, Rectangle, Size, Vector};

/// Messages emitted by the comparison surface and its controls.
#[derive(Debug, Clone)]
pub enum Message {
    Controls(controls::Message),
    /// The split handle was pressed.
    HandlePressed { position: Point, viewport: Size },
    /// A press landed outside the handle; start panning.
    PanStarted { position: Point },
    /// Pointer moved over the surface.
    PointerMoved { position: Point, viewport: Size },
    /// Pointer released (or left the surface).
    PointerReleased,
    /// Wheel scrolled by the given number of notches (positive = zoom in).
    WheelZoomed { notches: f32 },
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    PersistPreferences,
}

/// Per-draw geometry derived from the current state: zoom/pan transform,
/// image destination rectangles, and the clip for the right image.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareLayout {
    /// Effective zoom factor (uniform on both axes).
    pub zoom: f32,
    /// Content-to-viewport translation, pan offset plus centering.
    pub offset: Vector,
    /// Where the left image lands in viewport coordinates.
    pub left_dest: Rectangle,
    /// Where the right image lands in viewport coordinates.
    pub right_dest: Rectangle,
    /// Clip for the right image, in the image's own coordinate space.
    pub clip: Rectangle,
    /// The same clip mapped back to viewport coordinates.
    pub clip_viewport: Rectangle,
    /// Viewport rectangle of the drag handle, tracking the split.
    pub handle_bounds: Rectangle,
}

/// State for the before/after comparison component.
#[derive(Debug, Clone, Default)]
pub struct State {
    left: Option<ImageData>,
    right: Option<ImageData>,
    pub split: SplitState,
    pub handle: HandleDrag,
    pub zoom: ZoomState,
    pub pan: PanState,
    viewport: Option<Size>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_left(&mut self, image: ImageData) {
        self.left = Some(image);
    }

    pub fn set_right(&mut self, image: ImageData) {
        self.right = Some(image);
    }

    #[must_use]
    pub fn left(&self) -> Option<&ImageData> {
        self.left.as_ref()
    }

    #[must_use]
    pub fn right(&self) -> Option<&ImageData> {
        self.right.as_ref()
    }

    /// Whether both images are available for comparison.
    #[must_use]
    pub fn has_images(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    /// Shared content box: the union of both image sizes, in content pixels.
    #[must_use]
    pub fn content_size(&self) -> Size {
        let (left, right) = match (&self.left, &self.right) {
            (Some(left), Some(right)) => (left, right),
            _ => return Size::ZERO,
        };

        Size::new(
            left.width.max(right.width) as f32,
            left.height.max(right.height) as f32,
        )
    }

    pub fn set_zoom_step_percent(&mut self, step: f32) {
        self.zoom.zoom_step = crate::ui::state::zoom::ZoomStep::new(step);
    }

    #[must_use]
    pub fn zoom_step_percent(&self) -> f32 {
        self.zoom.zoom_step.value()
    }

    pub fn enable_fit_to_window(&mut self) {
        self.zoom.enable_fit_to_window();
    }

    pub fn disable_fit_to_window(&mut self) {
        self.zoom.disable_fit_to_window();
    }

    /// Handles a component message and reports the resulting side effect.
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::Controls(message) => self.update_controls(message),
            Message::HandlePressed { position, viewport } => {
                self.track_viewport(viewport);
                self.handle.press(position);
                Effect::None
            }
            Message::PanStarted { position } => {
                self.pan.start(position);
                Effect::None
            }
            Message::PointerMoved { position, viewport } => {
                self.track_viewport(viewport);
                if let Some(target) = self.handle.drag(position) {
                    self.split.set_position(target, viewport.width);
                } else if self.pan.is_panning() {
                    if let Some(offset) = self.pan.calculate_offset(position) {
                        self.pan.offset = offset;
                    }
                }
                // Idle moves fall through without touching any state
                Effect::None
            }
            Message::PointerReleased => {
                self.handle.release();
                self.pan.stop();
                Effect::None
            }
            Message::WheelZoomed { notches } => {
                if notches != 0.0 {
                    // Sub-notch deltas (trackpads) still advance one step
                    let steps = notches.abs().round().max(1.0) as u32;
                    for _ in 0..steps {
                        if notches > 0.0 {
                            self.zoom.zoom_in();
                        } else {
                            self.zoom.zoom_out();
                        }
                    }
                }
                Effect::None
            }
        }
    }

    fn update_controls(&mut self, message: controls::Message) -> Effect {
        match message {
            controls::Message::ZoomIn => {
                self.zoom.zoom_in();
                Effect::None
            }
            controls::Message::ZoomOut => {
                self.zoom.zoom_out();
                Effect::None
            }
            controls::Message::ResetZoom => {
                self.zoom.reset_zoom();
                self.pan.reset();
                Effect::None
            }
            controls::Message::SetFitToWindow(enabled) => {
                if enabled {
                    self.zoom.enable_fit_to_window();
                    self.pan.reset();
                } else {
                    self.zoom.disable_fit_to_window();
                }
                Effect::PersistPreferences
            }
        }
    }

    fn track_viewport(&mut self, viewport: Size) {
        let changed = self
            .viewport
            .map(|previous| previous != viewport)
            .unwrap_or(true);

        self.viewport = Some(viewport);
        if changed {
            self.split.clamp_to(viewport.width);
        }
    }

    /// Derives the draw geometry for the given viewport size.
    ///
    /// Returns `None` while images are missing or the zoom transform is
    /// degenerate; the renderer then skips the clip update entirely.
    #[must_use]
    pub fn layout(&self, viewport: Size) -> Option<CompareLayout> {
        let left = self.left.as_ref()?;
        let right = self.right.as_ref()?;

        let content = self.content_size();
        let zoom = self.zoom.effective_factor(content, viewport);

        // Center the scaled content when it is smaller than the viewport
        let centering = Vector::new(
            ((viewport.width - content.width * zoom) / 2.0).max(0.0),
            ((viewport.height - content.height * zoom) / 2.0).max(0.0),
        );
        let offset = Vector::new(
            self.pan.offset.x + centering.x,
            self.pan.offset.y + centering.y,
        );

        // Each image is centered within the shared content box
        let left_delta = image_inset(content, left);
        let right_delta = image_inset(content, right);

        let left_dest = image_dest(left, left_delta, zoom, offset);
        let right_dest = image_dest(right, right_delta, zoom, offset);

        let clip = split::clip_rectangle(
            zoom,
            zoom,
            offset,
            viewport,
            self.split.position,
            right_delta.x,
        )?;
        let clip_viewport = split::to_viewport(clip, zoom, zoom, offset, right_delta.x);

        Some(CompareLayout {
            zoom,
            offset,
            left_dest,
            right_dest,
            clip,
            clip_viewport,
            handle_bounds: self.split.handle_bounds(viewport.height),
        })
    }
}

fn image_inset(content: Size, image: &ImageData) -> Vector {
    Vector::new(
        (content.width - image.width as f32) / 2.0,
        (content.height - image.height as f32) / 2.0,
    )
}

fn image_dest(image: &ImageData, inset: Vector, zoom: f32, offset: Vector) -> Rectangle {
    Rectangle::new(
        Point::new(offset.x + inset.x * zoom, offset.y + inset.y * zoom),
        Size::new(image.width as f32 * zoom, image.height as f32 * zoom),
    )
}
