mod parse;

use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display},
    hash::{Hash, Hasher},
    marker::PhantomData,
    str::FromStr,
};

use crate::{
    platform,
    tag::{Abs, Base, Dir, File, Kind, Rel},
};

/// Normalized path tagged with its anchoring and what it denotes.
///
/// A `Path` is a single canonical string; the `B` and `K` parameters are
/// compile-time-only markers ([`Abs`]/[`Rel`] and [`File`]/[`Dir`]) with no
/// runtime representation. The canonical form holds for every value:
///
/// - Directory paths end with exactly one trailing separator, file paths
///   with none.
/// - No separator runs, no `.` segments, no `..` segments anywhere.
/// - Absolute paths begin with exactly one separator; relative paths with
///   none. A leading `~` is an ordinary segment, never expanded.
/// - The empty string is the relative current directory. It displays as
///   [`CURRENT_DIR`] but is stored empty, so appending to it is plain
///   concatenation.
///
/// Values are constructed through [`Path::parse`] (or the panicking
/// [`Path::from_literal`] for trusted constants) and are immutable
/// afterwards, so every operation below is pure string manipulation that
/// cannot leave the canonical grammar. Equality, ordering and hashing are
/// defined on the canonical string alone.
pub struct Path<B, K> {
    path: String,
    tags: PhantomData<fn() -> (B, K)>,
}

/// An absolute directory path, e.g. `/usr/lib/`.
pub type AbsDir = Path<Abs, Dir>;

/// An absolute file path, e.g. `/etc/fstab`.
pub type AbsFile = Path<Abs, File>;

/// A relative directory path, e.g. `src/`, or the current directory.
pub type RelDir = Path<Rel, Dir>;

/// A relative file path, e.g. `notes.txt`.
pub type RelFile = Path<Rel, File>;

/// Display form of [`RelDir::current`], the normalized current directory.
pub const CURRENT_DIR: &str = "./";

/// The single parser error: the input cannot be rewritten into a canonical
/// path with the requested tags.
///
/// Malformed input is an expected outcome when parsing untrusted strings,
/// so this is always returned as a value, never panicked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed {base} {kind} path: {input:?}")]
pub struct MalformedPath {
    input: Box<str>,
    base: &'static str,
    kind: &'static str,
}

impl MalformedPath {
    /// The rejected raw input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The tags the input was parsed against, e.g. `("absolute", "directory")`.
    #[must_use]
    pub fn expected(&self) -> (&'static str, &'static str) {
        (self.base, self.kind)
    }
}

impl<B: Base, K: Kind> Path<B, K> {
    fn new_unchecked(path: String) -> Self {
        Path {
            path,
            tags: PhantomData,
        }
    }

    /// Parse and normalize a raw platform path string.
    ///
    /// Accepts `/` and `\` as separators, collapses separator runs and `.`
    /// segments, and rejects anything that cannot be rewritten into the
    /// canonical form for this combination of tags: `..` segments, the wrong
    /// anchoring, control characters, Windows reserved device names.
    pub fn parse(input: &str) -> Result<Self, MalformedPath> {
        match parse::normalize(input, B::IS_ABSOLUTE, K::IS_DIR) {
            Some(path) => Ok(Self::new_unchecked(path)),
            None => Err(MalformedPath {
                input: input.into(),
                base: B::NAME,
                kind: K::NAME,
            }),
        }
    }

    /// Parse a trusted literal, panicking when it is malformed.
    ///
    /// For call sites supplying constants; untrusted input goes through
    /// [`Path::parse`].
    ///
    /// # Panics
    ///
    /// Panics if `path` does not parse for this combination of tags.
    #[must_use]
    #[track_caller]
    pub fn from_literal(path: &str) -> Self {
        match Self::parse(path) {
            Ok(path) => path,
            Err(err) => panic!("{err}"),
        }
    }

    /// The canonical string. Empty exactly for [`RelDir::current`].
    #[inline(always)]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// True if `raw` already is the canonical string of a path with these
    /// tags: it parses, and parsing changes nothing.
    ///
    /// This is the validity predicate handed to randomized test harnesses.
    #[must_use]
    pub fn is_canonical(raw: &str) -> bool {
        Self::parse(raw).is_ok_and(|path| path.path == raw)
    }

    /// True when the base tag is [`Abs`].
    #[inline]
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        B::IS_ABSOLUTE
    }

    /// True when the base tag is [`Rel`].
    #[inline]
    #[must_use]
    pub fn is_relative(&self) -> bool {
        !B::IS_ABSOLUTE
    }

    /// True when the kind tag is [`Dir`].
    #[inline]
    #[must_use]
    pub fn is_dir(&self) -> bool {
        K::IS_DIR
    }

    /// True when the kind tag is [`File`].
    #[inline]
    #[must_use]
    pub fn is_file(&self) -> bool {
        !K::IS_DIR
    }

    /// The directory immediately containing this path, computed from its
    /// own segments alone.
    ///
    /// Total: the root is its own parent, as is the current directory.
    #[must_use]
    pub fn parent(&self) -> Path<B, Dir> {
        Path::new_unchecked(parent_of(&self.path, B::IS_ABSOLUTE).to_owned())
    }

    /// The last segment as a relative file, discarding all leading
    /// directory structure.
    ///
    /// A path with no segments (the root, the current directory) yields the
    /// empty sentinel file path, which no parser accepts and only this
    /// operation produces.
    #[must_use]
    pub fn filename(&self) -> RelFile {
        let trimmed = self
            .path
            .strip_suffix(platform::SEPARATOR)
            .unwrap_or(&self.path);
        let name = match trimmed.rfind(platform::SEPARATOR) {
            Some(at) => &trimmed[at + 1..],
            None => trimmed,
        };
        Path::new_unchecked(name.to_owned())
    }

    /// The directory segment closest to the end, as a relative directory.
    ///
    /// The complement of [`filename`](Path::filename), defined purely on the
    /// trailing structure: `a.join(b).dirname() == b.dirname()` for any
    /// non-empty relative directory `b`. For file-kind paths this is the
    /// segment containing the file. A path with no directory segment yields
    /// the current directory.
    #[must_use]
    pub fn dirname(&self) -> RelDir {
        let dir = if K::IS_DIR {
            self.path.as_str()
        } else {
            match self.path.rfind(platform::SEPARATOR) {
                Some(at) => &self.path[..=at],
                None => "",
            }
        };
        let trimmed = dir.strip_suffix(platform::SEPARATOR).unwrap_or(dir);
        let last = match trimmed.rfind(platform::SEPARATOR) {
            Some(at) => &trimmed[at + 1..],
            None => trimmed,
        };
        if last.is_empty() {
            return Path::new_unchecked(String::new());
        }
        let mut path = String::with_capacity(last.len() + 1);
        path.push_str(last);
        path.push(platform::SEPARATOR);
        Path::new_unchecked(path)
    }

    /// The remainder of this path below `base`, re-tagged as relative with
    /// the kind preserved.
    ///
    /// `None` when `base` is not a parent of this path, and also when the
    /// two are equal: stripping a directory from itself is a non-match,
    /// keeping "strictly deeper descendant" distinguishable from "equal".
    #[must_use]
    pub fn strip_prefix(&self, base: &Path<B, Dir>) -> Option<Path<Rel, K>> {
        let rest = self.path.strip_prefix(base.path.as_str())?;
        if rest.is_empty() {
            return None;
        }
        Some(Path::new_unchecked(rest.to_owned()))
    }

    /// Segments of the path, in order. The root and the current directory
    /// have none.
    #[must_use]
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            rest: self.path.trim_matches(platform::SEPARATOR),
        }
    }
}

impl<B: Base> Path<B, Dir> {
    /// Append a relative path, keeping this path's anchoring and taking the
    /// child's kind.
    ///
    /// Plain concatenation: this path already ends in its separator and the
    /// child is already canonical, so the result is canonical without
    /// re-parsing.
    #[must_use]
    pub fn join<K: Kind>(&self, child: &Path<Rel, K>) -> Path<B, K> {
        let mut path = String::with_capacity(self.path.len() + child.path.len());
        path.push_str(&self.path);
        path.push_str(&child.path);
        Path::new_unchecked(path)
    }

    /// True iff `other`'s canonical string starts with this directory's
    /// canonical string.
    ///
    /// Both sides are canonical, so the literal prefix test is exact: the
    /// trailing separator on this directory rules out partial-segment
    /// matches. A directory is a parent of itself and of everything
    /// appended to it.
    #[must_use]
    pub fn is_parent_of<K: Kind>(&self, other: &Path<B, K>) -> bool {
        other.path.starts_with(&self.path)
    }

    /// This directory and every directory above it, ending at the root or
    /// the current directory.
    #[must_use]
    pub fn ancestors(&self) -> Ancestors<'_, B> {
        Ancestors {
            next: Some(&self.path),
            tags: PhantomData,
        }
    }
}

impl AbsDir {
    /// The root directory, `/`.
    #[must_use]
    pub fn root() -> Self {
        Self::new_unchecked(String::from(platform::SEPARATOR))
    }

    /// True for the root directory.
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.path == "/"
    }
}

impl RelDir {
    /// The current directory: the empty relative path, displayed as
    /// [`CURRENT_DIR`].
    #[must_use]
    pub fn current() -> Self {
        Self::new_unchecked(String::new())
    }

    /// True for the current directory.
    #[inline]
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.path.is_empty()
    }
}

// The parent of a canonical path string is always a prefix of it, except at
// the top where the anchoring decides between the root and the current
// directory.
fn parent_of(path: &str, absolute: bool) -> &str {
    let trimmed = path.strip_suffix(platform::SEPARATOR).unwrap_or(path);
    match trimmed.rfind(platform::SEPARATOR) {
        Some(at) => &trimmed[..=at],
        None if absolute => "/",
        None => "",
    }
}

/// Iterator over a path's segments, returned by [`Path::segments`].
pub struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.split_once(platform::SEPARATOR) {
            Some((segment, rest)) => {
                self.rest = rest;
                Some(segment)
            }
            None => {
                let segment = self.rest;
                self.rest = "";
                Some(segment)
            }
        }
    }
}

/// Iterator over a directory and its ancestors, returned by
/// [`Path::ancestors`].
pub struct Ancestors<'a, B> {
    next: Option<&'a str>,
    tags: PhantomData<fn() -> B>,
}

impl<B: Base> Iterator for Ancestors<'_, B> {
    type Item = Path<B, Dir>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let up = parent_of(current, B::IS_ABSOLUTE);
        // `parent` is a fixed point at the top; stop after yielding it.
        self.next = (up != current).then_some(up);
        Some(Path::new_unchecked(current.to_owned()))
    }
}

impl<B, K> Clone for Path<B, K> {
    fn clone(&self) -> Self {
        Path {
            path: self.path.clone(),
            tags: PhantomData,
        }
    }
}

// Comparison, hashing and formatting are defined on the canonical string
// alone. Hand-written rather than derived: a derive would put bounds on the
// phantom parameters.

impl<B, K> PartialEq for Path<B, K> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl<B, K> Eq for Path<B, K> {}

impl<B, K> PartialOrd for Path<B, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<B, K> Ord for Path<B, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.path.cmp(&other.path)
    }
}

impl<B, K> Hash for Path<B, K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl<B, K> Debug for Path<B, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <str as Debug>::fmt(&self.path, f)
    }
}

impl<B, K> Display for Path<B, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(CURRENT_DIR)
        } else {
            <str as Display>::fmt(&self.path, f)
        }
    }
}

impl<B: Base, K: Kind> FromStr for Path<B, K> {
    type Err = MalformedPath;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<B: Base, K: Kind> TryFrom<&str> for Path<B, K> {
    type Error = MalformedPath;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl<B, K> AsRef<str> for Path<B, K> {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        &self.path
    }
}

impl<B, K> From<Path<B, K>> for String {
    #[inline(always)]
    fn from(path: Path<B, K>) -> Self {
        path.path
    }
}

impl<B, K> serde::Serialize for Path<B, K> {
    /// Serializes as exactly the canonical string.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.path)
    }
}

impl<'de, B: Base, K: Kind> serde::Deserialize<'de> for Path<B, K> {
    /// Deserializes through [`Path::parse`]; textual input that does not
    /// parse for this combination of tags fails the decode.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
