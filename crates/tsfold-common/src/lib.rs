//! Common types for the tsfold declaration reader.
//!
//! This crate provides the foundational types shared by the core and by
//! analysis-engine implementations:
//! - Declaration identity and interning (`FullyQualifiedName`, `NameInterner`)
//! - Engine-reported diagnostics (`Diagnostic`, `DiagnosticSeverity`)

// Declaration identity and deduplication
pub mod interner;
pub use interner::{FullyQualifiedName, NameInterner};

// Diagnostics - the run-level failure channel
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticSeverity};
