// SPDX-License-Identifier: MPL-2.0
//! `iced_reveal` is a before/after image comparison viewer built with the
//! Iced GUI framework.
//!
//! Two images are stacked on one surface; a draggable vertical split handle
//! reveals more or less of the right-hand image, and the pair can be zoomed
//! and panned in lockstep.

pub mod app;
pub mod config;
pub mod error;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
