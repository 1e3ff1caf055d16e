//! Player identity.

use std::fmt;

/// Identifier for a player actor.
///
/// This is intentionally opaque; we just guarantee stability
/// over the lifetime of the process (ids are assigned once at
/// spawn and never reused).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
