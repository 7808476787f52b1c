// SPDX-License-Identifier: MPL-2.0
//! Before/after comparison module.
//!
//! The component is split the same way as the rest of the UI:
//!
//! ```text
//! component.rs - State, Message, Effect, update routing
//! renderer.rs  - canvas program: drawing + pointer event translation
//! controls.rs  - zoom toolbar above the comparison surface
//! pane.rs      - layout glue composing controls and canvas
//! ```

pub mod component;
pub mod controls;
pub mod pane;
pub mod renderer;

pub use component::{Effect, Message, State};
