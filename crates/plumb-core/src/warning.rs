//! Non-fatal configuration warnings.
//!
//! Warnings are reported, never thrown: resolution continues with the
//! documented deterministic fallback after each one.

use std::fmt;

/// A reportable configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// More than one child of a container declared itself as filling the
    /// container's primary axis; only the first is honored for sizing.
    MultipleFillChildren {
        /// Element name of the container.
        container: String,
        /// Path of the child whose fill flag was ignored.
        child: String,
    },
    /// The same plugin type was registered more than once; the first
    /// registration is kept.
    DuplicatePlugin {
        /// Type name of the plugin.
        plugin: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MultipleFillChildren { container, child } => write!(
                f,
                "only one child of '{container}' may fill its axis; ignoring fill on {child}"
            ),
            Self::DuplicatePlugin { plugin } => {
                write!(f, "plugin {plugin} is already registered; keeping the first registration")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_fill_children_display() {
        let warning = Warning::MultipleFillChildren {
            container: "row".to_string(),
            child: "window/row[0]/label[1]".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "only one child of 'row' may fill its axis; ignoring fill on window/row[0]/label[1]"
        );
    }

    #[test]
    fn test_duplicate_plugin_display() {
        let warning = Warning::DuplicatePlugin {
            plugin: "StackPlugin".to_string(),
        };
        assert!(warning.to_string().contains("already registered"));
    }
}
