// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains all the UI state logic separated from the widgets,
//! following the principle of separation of concerns.

pub mod handle;
pub mod pan;
pub mod split;
pub mod zoom;

// Re-export commonly used types for convenience
pub use handle::HandleDrag;
pub use pan::PanState;
pub use split::SplitState;
pub use zoom::ZoomState;
