//! tsfold - fold a compiler's declaration graph into caller-defined data.
//!
//! An external analysis engine owns the declaration graph of an analyzed
//! source file: classes, interfaces, modules, type aliases, and the type
//! expressions decorating them, possibly self- or mutually recursive.
//! tsfold converts that graph, node by node and on demand, into an
//! immutable representation the caller chooses: supply a pair of folding
//! algebras - a [`TypeFolder`] producing your type representation and a
//! [`DeclarationFolder`] producing your declaration representation - and
//! [`read_declarations`] hands back fully materialized values of those
//! types. The engine's native nodes never reach caller code.
//!
//! Three pieces do the work:
//!
//! - the folding algebras, total over two closed shape sets with an
//!   explicit `unknown` fallback, so no node is ever silently dropped;
//! - the normalization layer, which rewrites the engine's
//!   present-or-absent encoding into semantic `Option`s (and reconciles
//!   `strict_null_checks` mode) before any caller code observes a value;
//! - the driver, which folds the root set eagerly but resolves type
//!   references only through an explicit re-entry call, so recursive
//!   graphs never expand unboundedly.
//!
//! ```ignore
//! let declarations = read_declarations(
//!     engine,
//!     Options::default(),
//!     &InputFile::from_path("box.ts"),
//!     TypePrinter,
//!     DeclarationPrinter,
//! )?;
//! for declaration in &declarations.top_level {
//!     println!("{declaration}");
//! }
//! ```

// Engine boundary - the external collaborator's contract
pub mod engine;
pub use engine::{
    AnalysisEngine, NativeDeclaration, NativeFile, NativeParameter, NativeProperty, NativeType,
    NativeTypeParameter, Nullable,
};

// Caller-facing folded shapes
pub mod shapes;
pub use shapes::{
    Class, Function, Interface, Module, Parameter, Property, TypeAlias, TypeParameter,
    TypeReference,
};

// The two folding algebras
pub mod fold;
pub use fold::{DeclarationFolder, TypeFolder};

// Boundary rewrites between the engine encoding and caller optionals
mod normalize;

// Reader configuration
pub mod options;
pub use options::{InputFile, Options};

// Traversal/resolution driver
pub mod reader;
pub use reader::{Declarations, read_declarations};

// Ready-made display fold
pub mod printer;
pub use printer::{DeclarationPrinter, TypePrinter};

// Env-gated tracing setup
pub mod tracing_config;

pub use tsfold_common::{Diagnostic, DiagnosticSeverity, FullyQualifiedName, NameInterner};

// Shared test fixtures
#[cfg(test)]
#[path = "tests/fixture_engine.rs"]
pub mod fixture_engine;

#[cfg(test)]
#[path = "tests/reader_tests.rs"]
mod reader_tests;

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod normalize_tests;

#[cfg(test)]
#[path = "tests/printer_tests.rs"]
mod printer_tests;

#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod options_tests;
