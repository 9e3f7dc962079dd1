//! Rune mobile client core: username validation and locale resolution.

pub mod config;
pub mod i18n;
pub mod validation;

pub use i18n::{resolve_locale, I18nError, Translator};
pub use validation::{validate, Username, UsernameError};
