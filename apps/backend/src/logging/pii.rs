use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Centralized registry for PII redaction regex patterns.
///
/// All patterns are vetted literals; each construction site carries a
/// single allow for the `unwrap`.
pub struct PiiRegexRegistry;

impl PiiRegexRegistry {
    /// DNI pattern: bare runs of 6-10 digits (national ID numbers)
    pub fn dni() -> &'static Regex {
        static DNI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b\d{6,10}\b").unwrap()
        });
        &DNI_REGEX
    }

    /// Base64-like token pattern: matches base64-encoded tokens (≥16 chars)
    pub fn base64_token() -> &'static Regex {
        static BASE64_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9+/]{16,}={0,2}\b").unwrap()
        });
        &BASE64_TOKEN_REGEX
    }

    /// Hex token pattern: matches hexadecimal tokens (≥16 chars)
    pub fn hex_token() -> &'static Regex {
        static HEX_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Fa-f0-9]{16,}\b").unwrap()
        });
        &HEX_TOKEN_REGEX
    }
}

/// Redacts sensitive information from a string.
///
/// Conservatively masks:
/// - Opaque tokens: base64-like or hex runs (≥16 chars) become [REDACTED_TOKEN]
/// - DNIs: bare 6-10 digit runs keep their first two digits ("12******")
///
/// Order: tokens first, then DNIs, so digit runs inside an already-masked
/// token are not processed twice.
pub fn redact(input: &str) -> String {
    let base64_redacted = PiiRegexRegistry::base64_token().replace_all(input, "[REDACTED_TOKEN]");

    let hex_redacted = PiiRegexRegistry::hex_token().replace_all(&base64_redacted, "[REDACTED_TOKEN]");

    PiiRegexRegistry::dni()
        .replace_all(&hex_redacted, |caps: &regex::Captures| {
            let digits = &caps[0];
            format!("{}{}", &digits[..2], "*".repeat(digits.len() - 2))
        })
        .to_string()
}

/// A wrapper that automatically redacts sensitive strings when displayed.
///
/// Lets call sites log identifiers without leaking them verbatim.
pub struct Redacted<'a>(pub &'a str);

impl<'a> fmt::Display for Redacted<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

impl<'a> fmt::Debug for Redacted<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}
