mod path;
mod tag;

pub mod platform;

pub use path::*;
pub use tag::{Abs, Base, Dir, File, Kind, Rel};
