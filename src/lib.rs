// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a bilingual (English/Lao) single-page portfolio
//! application built with the Iced GUI framework.
//!
//! It demonstrates internationalization with Fluent, persisted user
//! preferences, and a page of independent scroll-driven visual effects.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.2.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
