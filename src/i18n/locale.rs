//! Locale resolution: pick the active locale from a detected tag.

use crate::i18n::I18nError;

/// Select which locale to activate.
///
/// Matching is exact: `"en-GB"` does not select `"en"`. Any tag that is not
/// one of `available`, or no tag at all, selects `fallback`.
///
/// # Arguments
/// * `detected` - Best-guess tag from a locale detector, if it produced one
/// * `available` - Locale codes that have a resource bundle
/// * `fallback` - Locale to use when `detected` is absent or unsupported
///
/// # Returns
/// * `Ok(code)` - the entry of `available` to activate
/// * `Err(I18nError::FallbackNotAvailable)` if `fallback` is not in
///   `available`. This is checked first, so a misconfigured fallback is
///   reported even when the detected tag would have matched.
///
/// # Example
/// ```
/// use rune_mobile_core::i18n::resolve_locale;
///
/// let available = ["en", "ko"];
/// assert_eq!(resolve_locale(Some("ko"), &available, "en").unwrap(), "ko");
/// assert_eq!(resolve_locale(Some("fr"), &available, "en").unwrap(), "en");
/// assert_eq!(resolve_locale(None, &available, "en").unwrap(), "en");
/// ```
pub fn resolve_locale<'a>(
    detected: Option<&str>,
    available: &[&'a str],
    fallback: &str,
) -> Result<&'a str, I18nError> {
    let fallback = available
        .iter()
        .copied()
        .find(|code| *code == fallback)
        .ok_or_else(|| I18nError::FallbackNotAvailable {
            fallback: fallback.to_string(),
            available: available.iter().map(|code| code.to_string()).collect(),
        })?;

    let matched = detected.and_then(|tag| available.iter().copied().find(|code| *code == tag));

    Ok(matched.unwrap_or(fallback))
}
