//! Trail formatters.
//!
//! Provides human-readable and JSON formatters for breadcrumbs, for log
//! lines and debugging output. Report payloads go through
//! [`encode`](crate::encode) instead.

use serde_json::Value;

use breadcrumbs_foundation::Breadcrumb;

// =============================================================================
// Trail Formatter Trait
// =============================================================================

/// Trait for formatting breadcrumbs.
pub trait TrailFormatter {
    /// Formats a single breadcrumb to a string.
    fn format(&self, breadcrumb: &Breadcrumb) -> String;

    /// Formats multiple breadcrumbs, one per line.
    fn format_many(&self, breadcrumbs: &[Breadcrumb]) -> String {
        breadcrumbs
            .iter()
            .map(|b| self.format(b))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats breadcrumbs in human-readable form.
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Whether to include timestamps.
    pub show_timestamps: bool,
    /// Whether to include metadata.
    pub show_metadata: bool,
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to show timestamps.
    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.show_timestamps = true;
        self
    }

    /// Builder method to show metadata.
    #[must_use]
    pub fn with_metadata(mut self) -> Self {
        self.show_metadata = true;
        self
    }
}

impl TrailFormatter for HumanFormatter {
    fn format(&self, breadcrumb: &Breadcrumb) -> String {
        use std::fmt::Write;
        let mut line = String::new();

        if self.show_timestamps {
            let _ = write!(line, "{} ", breadcrumb.timestamp().format("%H:%M:%S%.3f"));
        }

        let _ = write!(line, "{:<12} {}", breadcrumb.category(), breadcrumb.message());

        if self.show_metadata && !breadcrumb.metadata().is_empty() {
            let _ = write!(line, " {}", breadcrumb.metadata());
        }

        if !breadcrumb.is_active() {
            line.push_str(" (ignored)");
        }

        line
    }
}

// =============================================================================
// JSON Formatter
// =============================================================================

/// Formats breadcrumbs as JSON objects.
#[derive(Clone, Debug, Default)]
pub struct JsonFormatter {
    /// Whether to pretty-print JSON.
    pub pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method for pretty printing.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Builds the JSON value for a breadcrumb, the same shape report
    /// payloads use.
    fn to_value(breadcrumb: &Breadcrumb) -> Value {
        serde_json::to_value(breadcrumb).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "breadcrumb could not be formatted as JSON");
            Value::Null
        })
    }
}

impl TrailFormatter for JsonFormatter {
    fn format(&self, breadcrumb: &Breadcrumb) -> String {
        let value = Self::to_value(breadcrumb);
        if self.pretty {
            format!("{value:#}")
        } else {
            value.to_string()
        }
    }

    fn format_many(&self, breadcrumbs: &[Breadcrumb]) -> String {
        let values: Vec<Value> = breadcrumbs.iter().map(Self::to_value).collect();
        let array = Value::Array(values);
        if self.pretty {
            format!("{array:#}")
        } else {
            array.to_string()
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
