// SPDX-License-Identifier: MPL-2.0
//! Fluent-backed translation store and active-locale state.
//!
//! The catalog is fixed at startup: one bundle per embedded `.ftl` file.
//! [`I18n::lookup`] is the primitive used by the UI; a missing (locale, key)
//! pair is reported as absence, never as an empty string, so callers can fall
//! back to the default locale's text.

use crate::config::Config;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Language code of the default (and fallback) locale.
pub const DEFAULT_LOCALE: &str = "en";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
    default_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    /// Builds all bundles from the embedded catalogs and resolves the initial
    /// locale (CLI override, then persisted preference, then system locale,
    /// then the default). Resolution never writes the preference back.
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(locale_str) = filename.strip_suffix(".ftl") {
                if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                    if let Some(content) = Asset::get(filename) {
                        let res = FluentResource::try_new(
                            String::from_utf8_lossy(content.data.as_ref()).to_string(),
                        )
                        .expect("Failed to parse FTL file.");
                        let mut bundle = FluentBundle::new(vec![locale.clone()]);
                        bundle.add_resource(res).expect("Failed to add resource.");
                        bundles.insert(locale.clone(), bundle);
                        available_locales.push(locale);
                    }
                }
            }
        }
        available_locales.sort_by(|a, b| a.to_string().cmp(&b.to_string()));

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE
            .parse()
            .expect("default locale code must parse");
        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(|| default_locale.clone());

        Self {
            bundles,
            available_locales,
            current_locale,
            default_locale,
        }
    }

    /// The active locale.
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// The active language code (e.g. `"en"`), as shown in the navbar.
    pub fn current_language_code(&self) -> &str {
        self.current_locale.language.as_str()
    }

    /// Switches the active locale. An unrecognized locale is silently
    /// ignored; the UI only offers entries from `available_locales`.
    ///
    /// Returns whether the locale was recognized, so the caller knows when
    /// to persist the new preference.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) -> bool {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
            true
        } else {
            false
        }
    }

    /// Looks up `key` in the catalog for `locale`.
    ///
    /// Returns `None` when the locale or the key is unknown; absence is not
    /// an error. A present key never yields an empty string.
    pub fn lookup(&self, locale: &LanguageIdentifier, key: &str) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() && !value.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    }

    /// Translates `key` for the active locale, falling back to the default
    /// locale and finally to the key itself (a visible marker for a catalog
    /// bug, rather than blank text).
    pub fn tr(&self, key: &str) -> String {
        self.lookup(&self.current_locale, key)
            .or_else(|| self.lookup(&self.default_locale, key))
            .unwrap_or_else(|| key.to_string())
    }
}

/// Resolves the startup locale: CLI argument, then the persisted preference,
/// then the OS locale. Returns `None` when nothing matches an available
/// locale, in which case the caller uses the default.
fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    if let Some(lang) = cli_lang.as_deref().and_then(|s| match_available(s, available)) {
        return Some(lang);
    }

    if let Some(lang) = config
        .general
        .language
        .as_deref()
        .and_then(|s| match_available(s, available))
    {
        return Some(lang);
    }

    if let Some(lang) = sys_locale::get_locale()
        .as_deref()
        .and_then(|s| match_available(s, available))
    {
        return Some(lang);
    }

    None
}

/// Matches a raw locale string against the available catalogs, first exactly
/// and then by primary language subtag (so a system locale of `en-US` still
/// selects the `en` catalog).
fn match_available(raw: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    let lang: LanguageIdentifier = raw.parse().ok()?;
    if available.contains(&lang) {
        return Some(lang);
    }
    available
        .iter()
        .find(|candidate| candidate.language == lang.language)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::collections::BTreeSet;
    use unic_langid::LanguageIdentifier;

    fn config_with_language(code: &str) -> Config {
        let mut config = Config::default();
        config.general.language = Some(code.to_string());
        config
    }

    /// Extracts top-level message identifiers from raw FTL source.
    fn catalog_keys(content: &str) -> BTreeSet<String> {
        content
            .lines()
            .filter(|line| !line.starts_with('#') && !line.starts_with(' '))
            .filter_map(|line| {
                let (id, _) = line.split_once('=')?;
                let id = id.trim();
                id.chars()
                    .next()
                    .filter(char::is_ascii_alphabetic)
                    .map(|_| id.to_string())
            })
            .collect()
    }

    fn embedded_catalog(name: &str) -> String {
        let file = Asset::get(name).expect("embedded catalog missing");
        String::from_utf8_lossy(file.data.as_ref()).to_string()
    }

    #[test]
    fn both_locales_are_available() {
        let i18n = I18n::default();
        let codes: Vec<String> = i18n
            .available_locales
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(codes, vec!["en".to_string(), "lo".to_string()]);
    }

    #[test]
    fn default_catalog_is_complete() {
        // Every key in the canonical English catalog resolves to a non-empty
        // string; absence is the only way to signal a missing translation.
        let i18n = I18n::default();
        let en: LanguageIdentifier = "en".parse().unwrap();
        for key in catalog_keys(&embedded_catalog("en.ftl")) {
            let value = i18n.lookup(&en, &key);
            assert!(
                value.as_deref().is_some_and(|v| !v.is_empty()),
                "key {key} missing or empty in en catalog"
            );
        }
    }

    #[test]
    fn lao_catalog_covers_every_default_key() {
        let en_keys = catalog_keys(&embedded_catalog("en.ftl"));
        let lo_keys = catalog_keys(&embedded_catalog("lo.ftl"));
        let missing: Vec<&String> = en_keys.difference(&lo_keys).collect();
        assert!(missing.is_empty(), "keys missing from lo.ftl: {missing:?}");
    }

    #[test]
    fn lookup_unknown_key_is_absent() {
        let i18n = I18n::default();
        let en: LanguageIdentifier = "en".parse().unwrap();
        assert_eq!(i18n.lookup(&en, "no-such-key"), None);
    }

    #[test]
    fn tr_falls_back_to_key_for_unknown_message() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "no-such-key");
    }

    #[test]
    fn resolve_locale_prefers_cli_over_config() {
        let config = config_with_language("lo");
        let available: Vec<LanguageIdentifier> =
            vec!["en".parse().unwrap(), "lo".parse().unwrap()];
        let lang = resolve_locale(Some("en".to_string()), &config, &available);
        assert_eq!(lang, Some("en".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_uses_persisted_preference() {
        let config = config_with_language("lo");
        let available: Vec<LanguageIdentifier> =
            vec!["en".parse().unwrap(), "lo".parse().unwrap()];
        let lang = resolve_locale(None, &config, &available);
        assert_eq!(lang, Some("lo".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_ignores_unrecognized_persisted_value() {
        // A corrupted "language" slot must not select anything; the caller
        // then falls back to the default locale. "xx" parses as a language
        // identifier but matches no available catalog.
        let config = config_with_language("xx");
        let available: Vec<LanguageIdentifier> =
            vec!["en".parse().unwrap(), "lo".parse().unwrap()];
        let lang = resolve_locale(Some("xx".to_string()), &config, &available);
        // System locale may still match "en" on some machines; it can never
        // produce "xx".
        assert_ne!(lang, Some("xx".parse().unwrap()));
    }

    #[test]
    fn match_available_uses_primary_language_subtag() {
        let available: Vec<LanguageIdentifier> =
            vec!["en".parse().unwrap(), "lo".parse().unwrap()];
        assert_eq!(
            match_available("en-US", &available),
            Some("en".parse().unwrap())
        );
        assert_eq!(match_available("lo-LA", &available), Some("lo".parse().unwrap()));
        assert_eq!(match_available("fr", &available), None);
    }

    #[test]
    fn initialize_without_preference_defaults_to_english() {
        // No CLI override, no persisted value: unless the host system itself
        // reports Lao, the default locale wins.
        let i18n = I18n::new(None, &Config::default());
        assert!(["en", "lo"].contains(&i18n.current_language_code()));
    }

    #[test]
    fn set_locale_switches_translations() {
        let mut i18n = I18n::new(Some("en".to_string()), &Config::default());
        assert_eq!(i18n.tr("nav-home"), "Home");

        assert!(i18n.set_locale("lo".parse().unwrap()));
        assert_eq!(i18n.current_language_code(), "lo");
        assert_eq!(i18n.tr("nav-home"), "ໜ້າຫຼັກ");
    }

    #[test]
    fn set_locale_ignores_unknown_locale() {
        let mut i18n = I18n::new(Some("en".to_string()), &Config::default());
        assert!(!i18n.set_locale("fr".parse().unwrap()));
        assert_eq!(i18n.current_language_code(), "en");
    }

    #[test]
    fn tr_is_idempotent_across_repeated_application() {
        let mut i18n = I18n::new(Some("en".to_string()), &Config::default());
        i18n.set_locale("lo".parse().unwrap());
        let first = i18n.tr("nav-home");
        let second = i18n.tr("nav-home");
        assert_eq!(first, second);
    }
}
