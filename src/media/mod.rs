// SPDX-License-Identifier: MPL-2.0
//! Media handling: decoding the externally supplied before/after images.

pub mod image;

pub use image::{load, ImageData};
