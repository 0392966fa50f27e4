//! Diagnostic Infrastructure
//!
//! This module provides the types for reporting analysis-engine failures.
//! The engine hands back already-located, human-readable messages, so a
//! diagnostic here is a severity, a message, and an optional originating
//! path. There is no span machinery at this layer.
//!
//! # Example
//!
//! ```ignore
//! let diag = Diagnostic::error("Cannot find name 'foo'").with_path("src/box.ts");
//! assert_eq!(diag.to_string(), "src/box.ts: error: Cannot find name 'foo'");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Diagnostic Severity
// =============================================================================

/// The severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    /// A warning
    Warning = 2,
    /// An error (highest severity)
    Error = 1,
}

impl DiagnosticSeverity {
    /// Get the severity name for display.
    pub fn name(&self) -> &'static str {
        match self {
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Warning => "warning",
        }
    }

    /// Check if this is an error.
    pub fn is_error(&self) -> bool {
        matches!(self, DiagnosticSeverity::Error)
    }
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Default for DiagnosticSeverity {
    fn default() -> Self {
        DiagnosticSeverity::Error
    }
}

// =============================================================================
// Diagnostic
// =============================================================================

/// A single engine-reported problem.
///
/// A failed read produces an ordered sequence of these; the order is the
/// engine's reporting order and is preserved end to end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The diagnostic message
    pub message: String,
    /// The severity level
    pub severity: DiagnosticSeverity,
    /// The path the problem was reported against, when the engine knows it
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub path: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(message: impl Into<String>, severity: DiagnosticSeverity) -> Self {
        Diagnostic {
            message: message.into(),
            severity,
            path: None,
        }
    }

    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, DiagnosticSeverity::Error)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, DiagnosticSeverity::Warning)
    }

    /// Set the originating path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Check if this is an error.
    pub fn is_error(&self) -> bool {
        self.severity.is_error()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}: {}: {}", path, self.severity, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}
