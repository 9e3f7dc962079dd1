//! The active locale and translation lookups.
//!
//! A [`Translator`] is created once at startup from a [`LocaleRegistry`] and
//! a [`LocaleDetector`]. The locale it picks never changes afterwards; to use
//! a different locale, build a new translator.
//!
//! Lookups fall back key by key: a key missing from the active bundle is
//! taken from the fallback bundle, and a key missing from both is returned
//! unchanged.

use crate::i18n::{
    resolve_locale, I18nError, LocaleConfig, LocaleDetector, LocaleRegistry, ResourceBundle,
};
use tracing::{debug, info, warn};

/// Active locale plus the bundles needed to translate in it.
#[derive(Debug, Clone)]
pub struct Translator {
    registry: LocaleRegistry,
    active: &'static str,
}

impl Translator {
    /// Detect and resolve the active locale.
    ///
    /// # Arguments
    /// * `registry` - Validated set of locales and their bundles
    /// * `detector` - Supplies the best-guess locale tag
    pub fn init(
        registry: LocaleRegistry,
        detector: &dyn LocaleDetector,
    ) -> Result<Self, I18nError> {
        let detected = detector.detect();
        Self::with_detected(registry, detected.as_deref())
    }

    /// Resolve the active locale from an already detected tag.
    pub fn with_detected(
        registry: LocaleRegistry,
        detected: Option<&str>,
    ) -> Result<Self, I18nError> {
        let codes = registry.codes();
        let active = resolve_locale(detected, &codes, registry.fallback().code)?;

        if detected == Some(active) {
            info!(locale = active, "Activated detected locale");
        } else {
            info!(
                locale = active,
                detected = ?detected,
                "Detected locale unavailable, activated fallback"
            );
        }

        Ok(Self { registry, active })
    }

    /// The active locale.
    pub fn locale(&self) -> &LocaleConfig {
        // Resolution only ever returns registered codes.
        self.registry
            .get_by_code(self.active)
            .unwrap_or_else(|| self.registry.fallback())
    }

    /// The fallback locale.
    pub fn fallback(&self) -> &LocaleConfig {
        self.registry.fallback()
    }

    /// The registry this translator was built from.
    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    /// Whether `key` has a translation in the active or fallback locale.
    pub fn has_key(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Translate `key` into the active locale.
    ///
    /// # Returns
    /// The active locale's string, else the fallback locale's string, else
    /// `key` itself.
    pub fn translate(&self, key: &str) -> String {
        match self.lookup(key) {
            Some(text) => text.to_string(),
            None => {
                warn!(key, locale = self.active, "Missing translation");
                key.to_string()
            }
        }
    }

    /// Translate `key` and fill in its `{{name}}` placeholders.
    ///
    /// Values are inserted verbatim and are not themselves scanned for
    /// placeholders. Placeholders without a matching argument are left as-is.
    ///
    /// # Example
    /// ```
    /// use rune_mobile_core::i18n::{LocaleRegistry, Translator};
    ///
    /// let registry = LocaleRegistry::builtin().unwrap();
    /// let translator = Translator::with_detected(registry, Some("en")).unwrap();
    /// assert_eq!(
    ///     translator.translate_with("locale.active", &[("language", "English")]),
    ///     "Language: English"
    /// );
    /// ```
    pub fn translate_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(&self.translate(key), args)
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        if let Some(text) = self.active_bundle().and_then(|bundle| bundle.get(key)) {
            return Some(text);
        }

        let text = self.registry.fallback_bundle().get(key)?;
        debug!(key, locale = self.active, "Using fallback translation");
        Some(text)
    }

    fn active_bundle(&self) -> Option<&ResourceBundle> {
        self.registry.bundle(self.active)
    }
}

/// Replace `{{name}}` tokens in `template` with values from `args`.
///
/// Whitespace inside the braces is ignored (`{{ name }}`). Single pass: text
/// produced by a substitution is never scanned again.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let Some(end) = after_open.find("}}") else {
            // Unterminated placeholder; keep the remainder verbatim.
            out.push_str(&rest[start..]);
            return out;
        };

        let name = after_open[..end].trim();
        match args.iter().find(|(arg, _)| *arg == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after_open[end + 2..];
    }

    out.push_str(rest);
    out
}
