//! Location paths for values in nested JSON structures.
//!
//! This module provides [`JsonPath`] and [`PathSegment`]. While an error
//! unwinds out of nested validators, each enclosing validator prepends its
//! own segment, so the finished path reads from the root down to the
//! failing value (e.g. `.users[3].name`).

use std::fmt::{self, Display};

/// The literal token every public location is rooted at.
pub const ROOT: &str = "input";

/// A segment of a JSON path.
///
/// Paths are built from segments that represent either field access or array indexing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A field/property access (e.g., `user`, `email`)
    Field(String),
    /// An array index access (e.g., `[0]`, `[42]`)
    Index(usize),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        PathSegment::Field(name.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(name: String) -> Self {
        PathSegment::Field(name)
    }
}

impl From<usize> for PathSegment {
    fn from(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

impl Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, ".{}", name),
            PathSegment::Index(idx) => write!(f, "[{}]", idx),
        }
    }
}

/// A path to a value in a nested JSON-like structure.
///
/// `Display` renders the path relative to its root (`.users[0].email`);
/// [`JsonPath::rooted`] renders it with the `input` token in front.
///
/// # Example
///
/// ```rust
/// use surety::JsonPath;
///
/// let path = JsonPath::root()
///     .push_field("users")
///     .push_index(0)
///     .push_field("email");
///
/// assert_eq!(path.to_string(), ".users[0].email");
/// assert_eq!(path.rooted(), "input.users[0].email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JsonPath {
    segments: Vec<PathSegment>,
}

impl JsonPath {
    /// Creates an empty path representing the root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from a single field segment.
    pub fn from_field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Field(name.into())],
        }
    }

    /// Creates a path from a single index segment.
    pub fn from_index(idx: usize) -> Self {
        Self {
            segments: vec![PathSegment::Index(idx)],
        }
    }

    /// Returns a new path with a field segment appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Puts `prefix` in front of this path, in place.
    ///
    /// Used while an error travels outwards: the enclosing validator knows
    /// the step it took, the nested one only knows what came after.
    pub fn prepend(&mut self, prefix: &JsonPath) {
        if prefix.is_empty() {
            return;
        }
        let mut segments = prefix.segments.clone();
        segments.append(&mut self.segments);
        self.segments = segments;
    }

    /// Puts a single segment in front of this path, in place.
    pub fn prepend_segment(&mut self, segment: PathSegment) {
        self.segments.insert(0, segment);
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Renders the path rooted at the `input` token.
    pub fn rooted(&self) -> String {
        format!("{}{}", ROOT, self)
    }
}

impl FromIterator<PathSegment> for JsonPath {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for JsonPath {
    type Item = PathSegment;
    type IntoIter = std::vec::IntoIter<PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path_is_empty() {
        let path = JsonPath::root();
        assert!(path.is_root());
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert_eq!(path.to_string(), "");
        assert_eq!(path.rooted(), "input");
    }

    #[test]
    fn test_single_field() {
        let path = JsonPath::root().push_field("user");
        assert_eq!(path.to_string(), ".user");
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_single_index() {
        let path = JsonPath::root().push_index(0);
        assert_eq!(path.to_string(), "[0]");
        assert_eq!(path.rooted(), "input[0]");
    }

    #[test]
    fn test_complex_path() {
        let path = JsonPath::root()
            .push_field("users")
            .push_index(0)
            .push_field("email");
        assert_eq!(path.rooted(), "input.users[0].email");
    }

    #[test]
    fn test_prepend_builds_outwards() {
        let mut path = JsonPath::from_field("name");
        path.prepend_segment(PathSegment::Index(3));
        path.prepend_segment(PathSegment::field("users"));
        assert_eq!(path.rooted(), "input.users[3].name");
    }

    #[test]
    fn test_prepend_path() {
        let mut path = JsonPath::from_index(1);
        let prefix = JsonPath::root().push_field("a").push_field("b");
        path.prepend(&prefix);
        assert_eq!(path.to_string(), ".a.b[1]");

        let mut untouched = JsonPath::from_field("x");
        untouched.prepend(&JsonPath::root());
        assert_eq!(untouched.to_string(), ".x");
    }

    #[test]
    fn test_path_immutability() {
        let base = JsonPath::root().push_field("users");
        let path_a = base.push_index(0);
        let path_b = base.push_index(1);

        assert_eq!(base.to_string(), ".users");
        assert_eq!(path_a.to_string(), ".users[0]");
        assert_eq!(path_b.to_string(), ".users[1]");
    }

    #[test]
    fn test_segment_conversions() {
        let path: JsonPath = vec![
            PathSegment::from("a"),
            PathSegment::from(2usize),
            PathSegment::from(String::from("b")),
        ]
        .into_iter()
        .collect();
        assert_eq!(path.to_string(), ".a[2].b");
        assert_eq!(
            path.segments().last(),
            Some(&PathSegment::Field("b".to_string()))
        );
    }
}
