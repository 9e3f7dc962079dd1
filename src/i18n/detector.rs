//! Locale detection: where the best-guess locale tag comes from.
//!
//! Detectors only *suggest* a tag. Whether it is supported is decided by
//! [`resolve_locale`](crate::i18n::resolve_locale), which matches exactly.

use tracing::debug;

/// Source of a best-guess locale tag.
pub trait LocaleDetector {
    /// Return a locale tag, or `None` if nothing could be detected.
    fn detect(&self) -> Option<String>;
}

impl<F> LocaleDetector for F
where
    F: Fn() -> Option<String>,
{
    fn detect(&self) -> Option<String> {
        self()
    }
}

/// Detects the OS locale and reduces it to a language code.
///
/// `"ko-KR"`, `"ko_KR.UTF-8"` and `"ko"` all detect as `"ko"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLocaleDetector;

impl LocaleDetector for SystemLocaleDetector {
    fn detect(&self) -> Option<String> {
        let raw = sys_locale::get_locale()?;
        let language = language_code(&raw);
        debug!(raw = %raw, language = ?language, "Detected system locale");
        language
    }
}

/// Always returns the tag it was built with.
///
/// Used for explicit overrides (e.g. from configuration) and in tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FixedLocaleDetector(Option<String>);

impl FixedLocaleDetector {
    /// Detector that always returns `tag`.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Some(tag.into()))
    }

    /// Detector that never detects anything.
    pub fn none() -> Self {
        Self(None)
    }
}

impl From<Option<String>> for FixedLocaleDetector {
    fn from(tag: Option<String>) -> Self {
        Self(tag)
    }
}

impl LocaleDetector for FixedLocaleDetector {
    fn detect(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Tries detectors in order; the first one that detects a tag wins.
#[derive(Default)]
pub struct ChainDetector {
    detectors: Vec<Box<dyn LocaleDetector>>,
}

impl ChainDetector {
    /// Empty chain; detects nothing until detectors are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a detector to the end of the chain.
    pub fn with(mut self, detector: impl LocaleDetector + 'static) -> Self {
        self.detectors.push(Box::new(detector));
        self
    }
}

impl std::fmt::Debug for ChainDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainDetector")
            .field("detectors", &self.detectors.len())
            .finish()
    }
}

impl LocaleDetector for ChainDetector {
    fn detect(&self) -> Option<String> {
        self.detectors.iter().find_map(|detector| detector.detect())
    }
}

/// Reduce a raw OS locale string to its lowercase primary language subtag.
///
/// Encoding (`.UTF-8`) and modifier (`@euro`) suffixes are dropped and `_`
/// is treated like `-`. Returns `None` unless the subtag is 2 or 3 ASCII
/// letters (so `"C"` and `"POSIX"` detect nothing).
pub fn language_code(raw: &str) -> Option<String> {
    let stripped = raw.trim().split(['.', '@']).next()?;
    let language = stripped.split(['-', '_']).next()?;

    let valid = (2..=3).contains(&language.len())
        && language.chars().all(|ch| ch.is_ascii_alphabetic());

    valid.then(|| language.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== language_code Tests ====================

    #[test]
    fn test_language_code_plain() {
        assert_eq!(language_code("ko"), Some("ko".to_string()));
        assert_eq!(language_code("en"), Some("en".to_string()));
    }

    #[test]
    fn test_language_code_strips_region() {
        assert_eq!(language_code("ko-KR"), Some("ko".to_string()));
        assert_eq!(language_code("en_US"), Some("en".to_string()));
    }

    #[test]
    fn test_language_code_strips_encoding_and_modifier() {
        assert_eq!(language_code("en_US.UTF-8"), Some("en".to_string()));
        assert_eq!(language_code("de_DE@euro"), Some("de".to_string()));
    }

    #[test]
    fn test_language_code_lowercases() {
        assert_eq!(language_code("KO-kr"), Some("ko".to_string()));
    }

    #[test]
    fn test_language_code_rejects_posix_locales() {
        assert_eq!(language_code("C"), None);
        assert_eq!(language_code("POSIX"), None);
        assert_eq!(language_code(""), None);
        assert_eq!(language_code("  "), None);
    }

    #[test]
    fn test_language_code_three_letters() {
        assert_eq!(language_code("fil-PH"), Some("fil".to_string()));
    }

    // ==================== Detector Tests ====================

    #[test]
    fn test_fixed_detector() {
        assert_eq!(FixedLocaleDetector::new("ko").detect(), Some("ko".to_string()));
        assert_eq!(FixedLocaleDetector::none().detect(), None);
        assert_eq!(FixedLocaleDetector::from(None).detect(), None);
    }

    #[test]
    fn test_closure_detector() {
        let detector = || Some("fr".to_string());
        assert_eq!(detector.detect(), Some("fr".to_string()));
    }

    #[test]
    fn test_chain_first_detection_wins() {
        let chain = ChainDetector::new()
            .with(FixedLocaleDetector::none())
            .with(FixedLocaleDetector::new("ko"))
            .with(FixedLocaleDetector::new("en"));
        assert_eq!(chain.detect(), Some("ko".to_string()));
    }

    #[test]
    fn test_chain_empty_detects_nothing() {
        assert_eq!(ChainDetector::new().detect(), None);
    }

    #[test]
    fn test_chain_debug_shows_length() {
        let chain = ChainDetector::new().with(SystemLocaleDetector);
        assert!(format!("{:?}", chain).contains("1"));
    }

    #[test]
    fn test_system_detector_returns_language_code_if_any() {
        // Depends on the host; only check the shape of whatever comes back.
        if let Some(code) = SystemLocaleDetector.detect() {
            assert!((2..=3).contains(&code.len()));
            assert_eq!(code, code.to_ascii_lowercase());
        }
    }
}
