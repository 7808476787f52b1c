// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageData;
use crate::ui::compare;

/// Launch flags parsed from the command line: the two image paths.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub left_path: Option<String>,
    pub right_path: Option<String>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Compare(compare::Message),
    LeftLoaded(Result<ImageData, Error>),
    RightLoaded(Result<ImageData, Error>),
}
