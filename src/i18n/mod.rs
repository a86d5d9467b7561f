// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization
//! system. It handles locale resolution, translation catalog loading, and
//! runtime language switching.
//!
//! # Features
//!
//! - Locale resolution from CLI, persisted config, or system settings
//! - Embedded `.ftl` translation catalogs (English and Lao)
//! - Runtime language switching persisted by the caller
//! - Fallback to the default locale when a translation is missing

pub mod fluent;
