//! The shell's current location, as a stack of directory names.

use std::fmt;

/// Marker used as the first segment of every working path.
pub const ROOT_MARKER: &str = "/";

/// Ordered directory names from the root to the current directory.
///
/// The first segment is always [`ROOT_MARKER`]; popping never removes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingPath {
    segments: Vec<String>,
}

impl Default for WorkingPath {
    fn default() -> Self {
        Self::root()
    }
}

impl WorkingPath {
    pub fn root() -> Self {
        Self {
            segments: vec![ROOT_MARKER.to_string()],
        }
    }

    /// Build a path from the names below the root.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut path = Self::root();
        for name in names {
            path.push(name);
        }
        path
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.segments.push(name.into());
    }

    /// Drop the last segment. Returns false (and does nothing) at the root.
    pub fn pop(&mut self) -> bool {
        if self.is_root() {
            return false;
        }
        self.segments.pop();
        true
    }

    pub fn is_root(&self) -> bool {
        self.segments.len() == 1
    }

    /// All segments, root marker included.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Segments after the root marker.
    pub fn names(&self) -> &[String] {
        &self.segments[1..]
    }

    /// Depth below the root.
    pub fn depth(&self) -> usize {
        self.segments.len() - 1
    }
}

impl fmt::Display for WorkingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ROOT_MARKER, self.names().join("/"))
    }
}
