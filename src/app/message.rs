// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::navbar;
use crate::ui::page;
use iced::widget::scrollable;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Page(page::Message),
    /// The page scrollable moved; carries the new viewport.
    PageScrolled(scrollable::Viewport),
    /// Periodic animation tick (particles, counters, reveal, smooth scroll,
    /// spinner, notification expiry).
    Tick(Instant),
    /// A click landed outside the language dropdown.
    OutsideClick,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `lo`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
