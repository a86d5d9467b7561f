// SPDX-License-Identifier: MPL-2.0
//! UI components. Each visual effect is its own module with no shared
//! state, so effects can be composed, tested, and disabled independently.

pub mod contact_form;
pub mod counters;
pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod page;
pub mod particles;
pub mod reveal;
pub mod section;
pub mod spinner;
