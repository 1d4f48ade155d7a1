use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// A graph vertex identified solely by its label.
///
/// Equality, hashing and ordering all come from the label, so two vertices
/// built from the same string are interchangeable. Cloning is cheap: the
/// label is shared.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vertex {
    label: Arc<str>,
}

impl Vertex {
    /// Creates a vertex with the given label
    pub fn new(label: impl Into<Arc<str>>) -> Self {
        Vertex { label: label.into() }
    }

    /// Returns the label of this vertex
    pub fn label(&self) -> &str {
        &self.label
    }
}

// Lets label-keyed maps be queried with a plain `&str`.
impl Borrow<str> for Vertex {
    fn borrow(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl From<&str> for Vertex {
    fn from(label: &str) -> Self {
        Vertex::new(label)
    }
}

impl From<String> for Vertex {
    fn from(label: String) -> Self {
        Vertex::new(label)
    }
}

impl From<&Vertex> for Vertex {
    fn from(vertex: &Vertex) -> Self {
        vertex.clone()
    }
}
