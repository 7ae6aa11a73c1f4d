//! # Widget Identifiers
//!
//! Widget IDs identify a widget *type* (not an instance) and are used to look
//! up its [Style](crate::style::Style) in a [Theme](crate::theme::Theme).
//!
//! ```rust
//! use rectprogress_theme::id::WidgetId;
//!
//! let id = WidgetId::new("rectprogress-widgets", "RectProgressBar");
//! assert_eq!(id.to_string(), "rectprogress-widgets:RectProgressBar");
//!
//! let parsed = WidgetId::parse("RectProgressBar");
//! assert_eq!(parsed, id);
//! ```

use std::fmt::{Debug, Display, Formatter};

/// Namespace used when a widget id is written without one.
pub const DEFAULT_NAMESPACE: &str = "rectprogress-widgets";

/// An identifier for a widget type in the styling system.
///
/// It consists of a namespace (typically the crate name) and an ID (the widget type name).
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct WidgetId {
    namespace: String,
    id: String,
}

impl WidgetId {
    /// Create a new widget id by a namespace and custom id.
    /// The namespace should be the crate name and the id should be the widget type name.
    pub fn new(namespace: impl ToString, id: impl ToString) -> Self {
        Self {
            namespace: namespace.to_string(),
            id: id.to_string(),
        }
    }

    /// Parse a `namespace:id` string. A bare `id` lands in [DEFAULT_NAMESPACE].
    pub fn parse(value: &str) -> Self {
        match value.split_once(':') {
            Some((namespace, id)) => Self::new(namespace.trim(), id.trim()),
            None => Self::new(DEFAULT_NAMESPACE, value.trim()),
        }
    }

    /// Returns the namespace of the widget id.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the actual widget id.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Display for WidgetId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.namespace, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_namespace() {
        let id = WidgetId::parse("my-app:Gauge");
        assert_eq!(id.namespace(), "my-app");
        assert_eq!(id.id(), "Gauge");
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        let id = WidgetId::new("my-app", "Gauge");
        assert_eq!(WidgetId::parse(&id.to_string()), id);
    }
}
