//! Username validation.
//!
//! A username is 1 to 20 ASCII word characters: letters, digits and `_`.
//! No trimming, normalization or case folding is applied, so `" alice"` is
//! rejected rather than cleaned up.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Minimum length of a username, in characters.
pub const MIN_USERNAME_LENGTH: usize = 1;

/// Maximum length of a username, in characters.
pub const MAX_USERNAME_LENGTH: usize = 20;

// Explicit ASCII class: `\w` is Unicode-aware in the regex crate.
static USERNAME_REGEX: OnceLock<Regex> = OnceLock::new();

/// Reason a string was rejected as a username.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsernameError {
    /// The input was empty.
    #[error("username must not be empty")]
    Empty,

    /// The input had more than [`MAX_USERNAME_LENGTH`] characters.
    #[error("username is {len} characters long, at most {max} are allowed", max = MAX_USERNAME_LENGTH)]
    TooLong { len: usize },

    /// The input contained a character outside `[A-Za-z0-9_]`.
    #[error("username contains invalid character {ch:?} at position {index}")]
    InvalidCharacter { ch: char, index: usize },
}

/// Check whether `input` is a valid username.
///
/// Returns `true` iff `input` is 1 to 20 characters long and every character
/// is an ASCII letter, ASCII digit or underscore. Total over all inputs.
///
/// # Example
/// ```
/// use rune_mobile_core::validation::validate;
///
/// assert!(validate("chocologic2"));
/// assert!(!validate(""));
/// assert!(!validate("후지타 코토네"));
/// ```
pub fn validate(input: &str) -> bool {
    let regex = USERNAME_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z0-9_]{1,20}$").unwrap());
    regex.is_match(input)
}

/// Like [`validate`], but reports why the input was rejected.
///
/// # Returns
/// * `Ok(())` if the input is a valid username
/// * `Err(UsernameError)` describing the first rule the input breaks
pub fn check_username(input: &str) -> Result<(), UsernameError> {
    if input.is_empty() {
        return Err(UsernameError::Empty);
    }

    let len = input.chars().count();
    if len > MAX_USERNAME_LENGTH {
        return Err(UsernameError::TooLong { len });
    }

    if let Some((index, ch)) = input
        .chars()
        .enumerate()
        .find(|(_, ch)| !is_username_char(*ch))
    {
        return Err(UsernameError::InvalidCharacter { ch, index });
    }

    Ok(())
}

fn is_username_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// A string that is known to be a valid username.
///
/// The only way to build one is through [`Username::parse`] (or the
/// `TryFrom`/`FromStr` impls that call it), so holding a `Username` means
/// [`validate`] already returned `true` for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Username(String);

impl Username {
    /// Parse and validate a username.
    pub fn parse(input: impl Into<String>) -> Result<Self, UsernameError> {
        let input = input.into();
        check_username(&input)?;
        Ok(Self(input))
    }

    /// The username as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the username and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Username {
    type Err = UsernameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Username {
    type Error = UsernameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
