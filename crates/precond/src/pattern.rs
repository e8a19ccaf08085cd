//! Regular-expression guard

use regex::{Regex, RegexBuilder};

use crate::error::{GuardError, GuardResult};
use crate::presence::not_null;

bitflags::bitflags! {
    /// Matching switches for [`matches`]. The default is no flags:
    /// case-sensitive, `^`/`$` anchor the whole input, `.` stops at `\n`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RegexOptions: u8 {
        /// Case-insensitive matching.
        const IGNORE_CASE = 1 << 0;
        /// `^` and `$` match at line boundaries.
        const MULTILINE = 1 << 1;
        /// `.` also matches `\n`.
        const SINGLELINE = 1 << 2;
        /// Unescaped whitespace and `#` comments in the pattern are ignored.
        const IGNORE_PATTERN_WHITESPACE = 1 << 3;
        /// Line anchors treat `\r\n` as a line terminator.
        const CRLF = 1 << 4;
        /// Character classes match ASCII only. Patterns that could then
        /// match invalid UTF-8, such as a bare `.`, fail to compile.
        const ASCII = 1 << 5;
    }
}

impl RegexOptions {
    fn builder(self, pattern: &str) -> RegexBuilder {
        let mut builder = RegexBuilder::new(pattern);
        builder
            .case_insensitive(self.contains(Self::IGNORE_CASE))
            .multi_line(self.contains(Self::MULTILINE))
            .dot_matches_new_line(self.contains(Self::SINGLELINE))
            .ignore_whitespace(self.contains(Self::IGNORE_PATTERN_WHITESPACE))
            .crlf(self.contains(Self::CRLF))
            .unicode(!self.contains(Self::ASCII));
        builder
    }
}

/// Verifies that `value` matches `pattern` under `options`.
///
/// Both `value` and `pattern` are presence-checked first: a missing value is
/// reported under `name`, a missing pattern under `"pattern"`. The pattern is
/// compiled on every call; use [`matches_regex`] on hot paths.
///
/// # Errors
///
/// - [`GuardError::NullArgument`] when either input is absent.
/// - [`GuardError::InvalidPattern`] when `pattern` does not compile.
/// - [`GuardError::ArgumentFormat`] when `value` does not match.
///
/// # Examples
///
/// ```
/// use precond::{ErrorKind, RegexOptions, matches};
///
/// let err = matches("x", "A123Z", "^a[0-9]*z$", RegexOptions::default()).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::ArgumentFormat);
///
/// let ok = matches("x", "A123Z", "^a[0-9]*z$", RegexOptions::IGNORE_CASE).unwrap();
/// assert_eq!(ok, "A123Z");
/// ```
pub fn matches<'v, 'p>(
    name: &str,
    value: impl Into<Option<&'v str>>,
    pattern: impl Into<Option<&'p str>>,
    options: RegexOptions,
) -> GuardResult<&'v str> {
    let value = not_null(name, value.into())?;
    let pattern = not_null("pattern", pattern.into())?;

    let regex = options
        .builder(pattern)
        .build()
        .map_err(|source| GuardError::invalid_pattern("pattern", pattern, source))?;

    if regex.is_match(value) {
        Ok(value)
    } else {
        Err(GuardError::format(name, pattern))
    }
}

/// Verifies that `value` matches a precompiled `regex`.
///
/// # Errors
///
/// [`GuardError::ArgumentFormat`] when `value` does not match; the message
/// cites `regex.as_str()`.
pub fn matches_regex<'v>(name: &str, value: &'v str, regex: &Regex) -> GuardResult<&'v str> {
    if regex.is_match(value) {
        return Ok(value);
    }
    Err(GuardError::format(name, regex.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_case_sensitive_by_default() {
        let err = matches("x", "A123Z", "^a[0-9].z$", RegexOptions::empty()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentFormat);
        assert_eq!(err.name(), "x");
        assert_eq!(
            err.message(),
            "Argument 'x' doesn't match with pattern '^a[0-9].z$'"
        );
    }

    #[test]
    fn test_ignore_case() {
        let got = matches("x", "a123z", "a[0-9]*z", RegexOptions::IGNORE_CASE).unwrap();
        assert_eq!(got, "a123z");
        assert!(matches("x", "A12Z", "^a[0-9].z$", RegexOptions::IGNORE_CASE).is_ok());
    }

    #[test]
    fn test_multiline_and_singleline() {
        let text = "first\nsecond";
        assert!(matches("t", text, "^second$", RegexOptions::empty()).is_err());
        assert!(matches("t", text, "^second$", RegexOptions::MULTILINE).is_ok());
        assert!(matches("t", text, "first.second", RegexOptions::empty()).is_err());
        assert!(matches("t", text, "first.second", RegexOptions::SINGLELINE).is_ok());
    }

    #[test]
    fn test_ignore_pattern_whitespace() {
        let pattern = r"^ \d{3} - \d{4} $  # local number";
        assert!(matches("phone", "555-1234", pattern, RegexOptions::empty()).is_err());
        assert!(
            matches(
                "phone",
                "555-1234",
                pattern,
                RegexOptions::IGNORE_PATTERN_WHITESPACE
            )
            .is_ok()
        );
    }

    #[test]
    fn test_ascii_classes() {
        assert!(matches("w", "é", r"^\w$", RegexOptions::empty()).is_ok());
        assert!(matches("w", "é", r"^\w$", RegexOptions::ASCII).is_err());
    }

    #[test]
    fn test_missing_inputs_are_null() {
        let err = matches("x", None::<&str>, "a", RegexOptions::empty()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NullArgument);
        assert_eq!(err.name(), "x");

        let err = matches("x", "a", None::<&str>, RegexOptions::empty()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NullArgument);
        assert_eq!(err.name(), "pattern");
    }

    #[test]
    fn test_invalid_pattern() {
        let err = matches("x", "abc", "(unclosed", RegexOptions::empty()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPattern);
        assert_eq!(err.name(), "pattern");
    }

    #[test]
    fn test_matches_regex_precompiled() {
        let regex = Regex::new(r"^[a-z]+-\d+$").unwrap();
        assert_eq!(matches_regex("id", "job-42", &regex).unwrap(), "job-42");
        let err = matches_regex("id", "job", &regex).unwrap_err();
        assert_eq!(
            err.message(),
            r"Argument 'id' doesn't match with pattern '^[a-z]+-\d+$'"
        );
    }
}
