//! Error types for document resolution.

use std::fmt;

/// Fatal resolution failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No plugin, the mandatory default included, produced a visual object
    /// for a renderable element.
    UnresolvableElement {
        /// Element name of the offending node.
        name: String,
        /// Root-to-node path of the offending node.
        path: String,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvableElement { name, path } => {
                write!(f, "no plugin could instantiate a view for element '{name}' at {path}")
            }
        }
    }
}

impl std::error::Error for ResolveError {}
