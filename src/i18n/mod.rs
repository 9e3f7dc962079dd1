//! Internationalization (i18n): locale resolution and translation lookups.
//!
//! # Architecture
//!
//! - `registry`: The statically known locales and their resource bundles
//! - `bundle`: One locale's translation strings, parsed from `translation.json`
//! - `locale`: Exact-match resolution of a detected tag against the registry
//! - `detector`: Where the detected tag comes from (OS locale, overrides)
//! - `translator`: The active locale, chosen once, and `translate`
//!
//! # Example
//!
//! ```rust
//! use rune_mobile_core::i18n::{FixedLocaleDetector, LocaleRegistry, Translator};
//!
//! let registry = LocaleRegistry::builtin()?;
//! let translator = Translator::init(registry, &FixedLocaleDetector::new("ko"))?;
//!
//! assert_eq!(translator.locale().code, "ko");
//! assert_eq!(translator.translate("tabs.home"), "홈");
//! # Ok::<(), rune_mobile_core::i18n::I18nError>(())
//! ```

mod bundle;
mod detector;
mod error;
mod locale;
mod registry;
mod translator;

pub use bundle::{ResourceBundle, KEY_SEPARATOR};
pub use detector::{
    language_code, ChainDetector, FixedLocaleDetector, LocaleDetector, SystemLocaleDetector,
};
pub use error::I18nError;
pub use locale::resolve_locale;
pub use registry::{LocaleConfig, LocaleRegistry, DEFAULT_FALLBACK_LOCALE};
pub use translator::{interpolate, Translator};
