use thiserror::Error;

/// Errors raised while building the locale registry or resolving a locale.
///
/// All of these are startup configuration errors: once a
/// [`Translator`](crate::i18n::Translator) exists, lookups cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    /// The fallback locale has no bundle.
    #[error("fallback locale '{fallback}' is not one of the available locales {available:?}")]
    FallbackNotAvailable {
        fallback: String,
        available: Vec<String>,
    },

    /// The same locale code was registered twice.
    #[error("locale '{0}' is registered more than once")]
    DuplicateLocale(String),

    /// A `translation.json` document could not be turned into a bundle.
    #[error("invalid translation bundle for locale '{locale}': {reason}")]
    InvalidBundle { locale: String, reason: String },

    /// No locales were registered at all.
    #[error("no locales registered")]
    EmptyRegistry,
}
