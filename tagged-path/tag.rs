/// Marker for paths anchored at the filesystem root.
pub enum Abs {}

/// Marker for paths interpreted relative to some unnamed directory.
pub enum Rel {}

/// Marker for paths denoting a file.
pub enum File {}

/// Marker for paths denoting a directory.
pub enum Dir {}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Abs {}
    impl Sealed for super::Rel {}
    impl Sealed for super::File {}
    impl Sealed for super::Dir {}
}

/// Base tag of a path: absolute or relative anchoring.
///
/// Sealed; implemented exactly by [`Abs`] and [`Rel`].
pub trait Base: sealed::Sealed + 'static {
    /// True when paths carrying this tag are anchored at the root.
    const IS_ABSOLUTE: bool;

    /// Tag name as it appears in error messages.
    const NAME: &'static str;
}

/// Kind tag of a path: file or directory designation.
///
/// Sealed; implemented exactly by [`File`] and [`Dir`].
pub trait Kind: sealed::Sealed + 'static {
    /// True when paths carrying this tag end in a separator.
    const IS_DIR: bool;

    /// Tag name as it appears in error messages.
    const NAME: &'static str;
}

impl Base for Abs {
    const IS_ABSOLUTE: bool = true;
    const NAME: &'static str = "absolute";
}

impl Base for Rel {
    const IS_ABSOLUTE: bool = false;
    const NAME: &'static str = "relative";
}

impl Kind for File {
    const IS_DIR: bool = false;
    const NAME: &'static str = "file";
}

impl Kind for Dir {
    const IS_DIR: bool = true;
    const NAME: &'static str = "directory";
}
