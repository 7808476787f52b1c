// SPDX-License-Identifier: MPL-2.0
//! User interface modules: comparison component, UI state, and theming.

pub mod compare;
pub mod state;
pub mod theme;
