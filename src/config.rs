use crate::i18n::{
    ChainDetector, FixedLocaleDetector, LocaleDetector, LocaleRegistry, SystemLocaleDetector,
    Translator, DEFAULT_FALLBACK_LOCALE,
};
use anyhow::{bail, Context, Result};

/// Environment variable that overrides the detected locale.
pub const LOCALE_ENV: &str = "RUNE_LOCALE";

/// Environment variable that selects the fallback locale.
pub const FALLBACK_LOCALE_ENV: &str = "RUNE_FALLBACK_LOCALE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Locale
    pub locale_override: Option<String>,
    pub fallback_locale: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale_override: None,
            fallback_locale: DEFAULT_FALLBACK_LOCALE.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let fallback_locale = match non_empty_var(FALLBACK_LOCALE_ENV) {
            Some(code) => code,
            None if std::env::var_os(FALLBACK_LOCALE_ENV).is_some() => {
                bail!("{} is set but empty", FALLBACK_LOCALE_ENV)
            }
            None => DEFAULT_FALLBACK_LOCALE.to_string(),
        };

        Ok(Self {
            // Locale - an empty override means "detect"
            locale_override: non_empty_var(LOCALE_ENV),
            fallback_locale,
        })
    }

    /// Build the translator for this configuration.
    ///
    /// The override (if any) is tried before the OS locale. Fails if the
    /// fallback locale is not one of the built-in locales.
    pub fn translator(&self) -> Result<Translator> {
        let detector = ChainDetector::new()
            .with(FixedLocaleDetector::from(self.locale_override.clone()))
            .with(SystemLocaleDetector);

        self.translator_with(&detector)
    }

    /// Like [`Config::translator`], with a caller-supplied detector.
    pub fn translator_with(&self, detector: &dyn LocaleDetector) -> Result<Translator> {
        let registry =
            LocaleRegistry::builtin_with_fallback(&self.fallback_locale).with_context(|| {
                format!("Invalid {} '{}'", FALLBACK_LOCALE_ENV, self.fallback_locale)
            })?;

        Translator::init(registry, detector).context("Failed to resolve the active locale")
    }
}

/// Read an environment variable, treating unset, non-UTF-8 and blank values
/// as absent.
fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var(LOCALE_ENV);
        std::env::remove_var(FALLBACK_LOCALE_ENV);
    }

    // ==================== from_env Tests ====================

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().expect("Should load");
        assert_eq!(config, Config::default());
        assert_eq!(config.fallback_locale, "en");
        assert!(config.locale_override.is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_override_and_fallback() {
        clear_env();
        std::env::set_var(LOCALE_ENV, " ko ");
        std::env::set_var(FALLBACK_LOCALE_ENV, "ko");

        let config = Config::from_env().expect("Should load");
        clear_env();

        assert_eq!(config.locale_override.as_deref(), Some("ko"));
        assert_eq!(config.fallback_locale, "ko");
    }

    #[test]
    #[serial]
    fn test_from_env_blank_override_is_ignored() {
        clear_env();
        std::env::set_var(LOCALE_ENV, "   ");

        let config = Config::from_env().expect("Should load");
        clear_env();

        assert!(config.locale_override.is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_blank_fallback_fails() {
        clear_env();
        std::env::set_var(FALLBACK_LOCALE_ENV, "");

        let result = Config::from_env();
        clear_env();

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains(FALLBACK_LOCALE_ENV));
    }

    // ==================== translator Tests ====================

    #[test]
    fn test_translator_uses_override() {
        let config = Config {
            locale_override: Some("ko".to_string()),
            ..Config::default()
        };
        let translator = config.translator().expect("Should build");
        assert_eq!(translator.locale().code, "ko");
    }

    #[test]
    fn test_translator_unsupported_override_falls_back() {
        let config = Config {
            locale_override: Some("fr".to_string()),
            ..Config::default()
        };
        let translator = config.translator().expect("Should build");
        assert_eq!(translator.locale().code, "en");
    }

    #[test]
    fn test_translator_rejects_unknown_fallback() {
        let config = Config {
            locale_override: None,
            fallback_locale: "fr".to_string(),
        };
        let error = config.translator().unwrap_err();
        assert!(format!("{:#}", error).contains("'fr'"));
    }
}
