use std::fmt::{self, Display, Formatter};

/// The error returned by the fallible sequence constructors of [`Tree`] when they are given no
/// values. A tree always has a root, so there is nothing to build.
///
/// [`Tree`]: crate::Tree
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EmptySequenceError;

impl Display for EmptySequenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("cannot build a tree from an empty sequence")
    }
}

impl std::error::Error for EmptySequenceError {}
