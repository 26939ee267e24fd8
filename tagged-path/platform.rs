//! Platform path rules consumed by the normalizer.
//!
//! The separator, absoluteness and validity predicates live here so the
//! normalizer itself stays free of platform trivia. Validity follows the
//! strictest common denominator: segments must be printable and must not
//! collide with a Windows reserved device name, so a canonical path is
//! usable verbatim on any OS.

/// Logical path separator used by every canonical path string.
pub const SEPARATOR: char = '/';

/// True for characters recognized as separators in raw input.
///
/// Backslashes are accepted on the way in so that paths written on Windows
/// tokenize the same way; canonical strings only ever contain [`SEPARATOR`].
#[must_use]
pub const fn is_separator(ch: char) -> bool {
    matches!(ch, '/' | '\\')
}

/// True when a raw input string begins with a separator.
#[must_use]
pub fn starts_with_separator(raw: &str) -> bool {
    raw.starts_with(is_separator)
}

/// Validity of a single path segment under the platform rules.
#[must_use]
pub fn is_valid_segment(segment: &str) -> bool {
    segment.chars().all(is_valid_char) && reserved_device(segment).is_none()
}

// Printable characters only: rejects the C0 and C1 control ranges and DEL,
// which covers NUL, newline and carriage return.
const fn is_valid_char(ch: char) -> bool {
    !matches!(ch, '\0'..='\x1F' | '\x7F' | '\u{80}'..='\u{9F}')
}

/// The reserved Windows device name a segment collides with, if any.
///
/// The extension is ignored: `NUL.txt` is as reserved as `NUL`. Windows also
/// treats the superscript digits as device numbers, so `COM¹` is reserved
/// too. See
/// <https://learn.microsoft.com/en-us/windows/win32/fileio/naming-a-file>.
#[must_use]
pub fn reserved_device(segment: &str) -> Option<&'static str> {
    let stem = segment.split_once('.').map_or(segment, |(stem, _)| stem);

    for name in ["CON", "PRN", "AUX", "NUL"] {
        if stem.eq_ignore_ascii_case(name) {
            return Some(name);
        }
    }

    if let (Some(head), Some(digit)) = (stem.get(..3), stem.get(3..)) {
        for name in ["COM", "LPT"] {
            if head.eq_ignore_ascii_case(name) && is_device_digit(digit) {
                return Some(name);
            }
        }
    }

    None
}

// `0`-`9`, plus the superscript digits `¹`, `²`, `³`.
const fn is_device_digit(digit: &str) -> bool {
    matches!(digit.as_bytes(), [b'0'..=b'9'] | [0xC2, 0xB9 | 0xB2 | 0xB3])
}
