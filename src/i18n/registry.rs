//! Locale registry: the statically known locales and their bundles.
//!
//! The registry is built once at startup and validated on construction, so
//! every registry value in the program has a fallback locale with a bundle.
//! It is an ordinary value rather than a global; callers own it and hand it
//! to [`Translator`](crate::i18n::Translator).

use crate::i18n::{I18nError, ResourceBundle};
use std::collections::HashSet;

/// Code of the locale used when nothing better is available.
pub const DEFAULT_FALLBACK_LOCALE: &str = "en";

/// Metadata for a supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleConfig {
    /// Locale code as reported by the detector (e.g., "en", "ko")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Korean")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "한국어")
    pub native_name: &'static str,
}

/// A registered locale together with its bundle.
#[derive(Debug, Clone)]
struct LocaleEntry {
    config: LocaleConfig,
    bundle: ResourceBundle,
}

/// Validated set of locales with a fallback.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: Vec<LocaleEntry>,
    /// Index of the fallback locale in `locales`
    fallback: usize,
}

impl LocaleRegistry {
    /// Build a registry from explicit locales.
    ///
    /// # Arguments
    /// * `locales` - Each locale's metadata and bundle, in display order
    /// * `fallback` - Code of the fallback locale
    ///
    /// # Returns
    /// * `Err(I18nError::EmptyRegistry)` if `locales` is empty
    /// * `Err(I18nError::DuplicateLocale)` if a code appears twice
    /// * `Err(I18nError::FallbackNotAvailable)` if `fallback` is not registered
    pub fn new(
        locales: Vec<(LocaleConfig, ResourceBundle)>,
        fallback: &str,
    ) -> Result<Self, I18nError> {
        if locales.is_empty() {
            return Err(I18nError::EmptyRegistry);
        }

        let mut seen = HashSet::new();
        for (config, _) in &locales {
            if !seen.insert(config.code) {
                return Err(I18nError::DuplicateLocale(config.code.to_string()));
            }
        }

        let fallback = locales
            .iter()
            .position(|(config, _)| config.code == fallback)
            .ok_or_else(|| I18nError::FallbackNotAvailable {
                fallback: fallback.to_string(),
                available: locales.iter().map(|(c, _)| c.code.to_string()).collect(),
            })?;

        Ok(Self {
            locales: locales
                .into_iter()
                .map(|(config, bundle)| LocaleEntry { config, bundle })
                .collect(),
            fallback,
        })
    }

    /// The locales shipped with the app, falling back to English.
    pub fn builtin() -> Result<Self, I18nError> {
        Self::builtin_with_fallback(DEFAULT_FALLBACK_LOCALE)
    }

    /// The locales shipped with the app, with a configurable fallback.
    ///
    /// Fails if `fallback` is not one of the shipped locales.
    pub fn builtin_with_fallback(fallback: &str) -> Result<Self, I18nError> {
        let locales = builtin_locales()
            .into_iter()
            .map(|(config, json)| {
                ResourceBundle::from_json(config.code, json).map(|bundle| (config, bundle))
            })
            .collect::<Result<Vec<_>, I18nError>>()?;

        Self::new(locales, fallback)
    }

    /// Get a locale configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the locale is registered
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.entry(code).map(|entry| &entry.config)
    }

    /// Get the bundle for a locale code.
    pub fn bundle(&self, code: &str) -> Option<&ResourceBundle> {
        self.entry(code).map(|entry| &entry.bundle)
    }

    /// Codes of every registered locale, in registration order.
    pub fn codes(&self) -> Vec<&'static str> {
        self.locales.iter().map(|entry| entry.config.code).collect()
    }

    /// All locale configurations, in registration order.
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().map(|entry| &entry.config).collect()
    }

    /// The fallback locale's configuration.
    pub fn fallback(&self) -> &LocaleConfig {
        &self.locales[self.fallback].config
    }

    /// The fallback locale's bundle.
    pub fn fallback_bundle(&self) -> &ResourceBundle {
        &self.locales[self.fallback].bundle
    }

    /// Check if a locale code is registered.
    pub fn contains(&self, code: &str) -> bool {
        self.entry(code).is_some()
    }

    fn entry(&self, code: &str) -> Option<&LocaleEntry> {
        self.locales.iter().find(|entry| entry.config.code == code)
    }
}

/// Locales shipped with the app and their embedded `translation.json`.
fn builtin_locales() -> Vec<(LocaleConfig, &'static str)> {
    vec![
        (
            LocaleConfig {
                code: "en",
                name: "English",
                native_name: "English",
            },
            include_str!("../../locales/en/translation.json"),
        ),
        (
            LocaleConfig {
                code: "ko",
                name: "Korean",
                native_name: "한국어",
            },
            include_str!("../../locales/ko/translation.json"),
        ),
    ]
}
