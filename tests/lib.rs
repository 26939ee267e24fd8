//! Shared helpers for the integration tests.

use tagged_path::{AbsDir, AbsFile, RelDir, RelFile};

/// Parse an absolute directory literal, panicking on failure.
#[must_use]
pub fn abs_dir(path: &str) -> AbsDir {
    AbsDir::from_literal(path)
}

/// Parse an absolute file literal, panicking on failure.
#[must_use]
pub fn abs_file(path: &str) -> AbsFile {
    AbsFile::from_literal(path)
}

/// Parse a relative directory literal, panicking on failure.
#[must_use]
pub fn rel_dir(path: &str) -> RelDir {
    RelDir::from_literal(path)
}

/// Parse a relative file literal, panicking on failure.
#[must_use]
pub fn rel_file(path: &str) -> RelFile {
    RelFile::from_literal(path)
}
