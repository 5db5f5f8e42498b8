//! Hex color validation and sanitization.

use regex::Regex;
use serde::Serialize;
use std::fmt;

/// A syntactically valid hex color: `#` followed by exactly 3 or 6 hex digits.
///
/// The original input is preserved byte-for-byte, including letter case, so
/// `#FFF` and `#fff` stay distinct strings even though they name the same
/// color. A `HexColor` can only be obtained through [`HexColor::parse`] or
/// [`sanitize`], which is what lets the stylesheet generator interpolate the
/// value without re-checking it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    /// Parses a hex color from a string.
    ///
    /// Accepts `#RGB` and `#RRGGBB` in either case; anything else, including
    /// the empty string, a missing `#`, or a 4/5-digit body, yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use admin_colors::models::HexColor;
    ///
    /// assert_eq!(HexColor::parse("#0073aa").unwrap().as_str(), "#0073aa");
    /// assert_eq!(HexColor::parse("#FFF").unwrap().as_str(), "#FFF");
    /// assert!(HexColor::parse("0073aa").is_none());
    /// assert!(HexColor::parse("#ffff").is_none());
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let hex_re = Regex::new(r"^#([0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").unwrap();

        if hex_re.is_match(raw) {
            Some(Self(raw.to_string()))
        } else {
            None
        }
    }

    /// Returns the color as the exact string it was parsed from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sanitizes a user-submitted color value.
///
/// Returns `Some` with the input preserved unchanged when it is a valid
/// 3- or 6-digit hex color, and `None` for everything else. The empty string
/// is the explicit "unset" signal and maps to `None` without being an error;
/// malformed input is downgraded to unset the same way rather than surfaced
/// to the caller, so a bad value can never reach generated CSS or break a
/// page render.
///
/// Idempotent: feeding the result back through changes nothing.
#[must_use]
pub fn sanitize(raw: &str) -> Option<HexColor> {
    if raw.is_empty() {
        return None;
    }

    HexColor::parse(raw)
}
