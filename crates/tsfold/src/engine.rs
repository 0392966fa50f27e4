//! The analysis-engine boundary.
//!
//! The engine is the external collaborator that parses, binds, and
//! type-checks source text. This module pins down everything that crosses
//! the boundary between it and the fold driver:
//!
//! - [`AnalysisEngine`] - the two calls the driver makes (root traversal,
//!   handle resolution)
//! - [`NativeDeclaration`] / [`NativeType`] - the closed node shapes the
//!   engine yields, in its own encoding
//! - [`Nullable`] - the engine's present-or-absent field encoding, which
//!   the normalization layer rewrites to `Option` before any caller
//!   algebra runs
//!
//! Native nodes are plain data handed over by value; the engine keeps the
//! only mutable graph. Handles are opaque capabilities scoped to one
//! analysis run: the driver threads them through unchanged and never
//! compares or dereferences them itself.

use crate::options::Options;
use std::path::PathBuf;
use tsfold_common::Diagnostic;

// =============================================================================
// Absence Encoding
// =============================================================================

/// The engine's native present-or-absent encoding.
///
/// Distinct from `Option` on purpose: a `Nullable` value is raw boundary
/// data that has not been normalized yet. Caller-facing shapes never
/// contain one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
    /// A present value.
    Value(T),
    /// The engine's absence marker.
    Null,
}

impl<T> Nullable<T> {
    /// Rewrite into the semantic optional.
    pub fn into_option(self) -> Option<T> {
        match self {
            Nullable::Value(value) => Some(value),
            Nullable::Null => None,
        }
    }

    /// Rewrite a semantic optional into the engine encoding.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Nullable::Value(value),
            None => Nullable::Null,
        }
    }

    /// Check for the absence marker.
    pub fn is_null(&self) -> bool {
        matches!(self, Nullable::Null)
    }
}

// =============================================================================
// Native Node Shapes
// =============================================================================

/// The input-file record in the engine's encoding.
///
/// Produced by the driver from a caller [`InputFile`](crate::InputFile);
/// a present `source` overrides reading from `path`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NativeFile {
    pub path: PathBuf,
    pub source: Nullable<String>,
}

/// A named member of a class, interface, or anonymous object shape.
#[derive(Clone, Debug, PartialEq)]
pub struct NativeProperty<H> {
    pub name: String,
    pub ty: NativeType<H>,
    pub optional: bool,
}

/// A function or method parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct NativeParameter<H> {
    pub name: String,
    pub ty: NativeType<H>,
}

/// A generic parameter on a declaration, with the default in the engine's
/// absence encoding.
#[derive(Clone, Debug, PartialEq)]
pub struct NativeTypeParameter<H> {
    pub name: String,
    pub default: Nullable<NativeType<H>>,
}

/// A type expression as the engine yields it.
///
/// The set is closed: every type node an engine can produce maps to
/// exactly one variant, with `Unclassified` as the single escape valve
/// for node kinds the contract does not cover. `H` is the engine's
/// opaque declaration handle.
#[derive(Clone, Debug, PartialEq)]
pub enum NativeType<H> {
    /// A built-in type, named verbatim (`string`, `number`, `void`, ...).
    Primitive { name: String },
    /// The literal type `true` or `false`.
    BooleanLiteral { value: bool },
    /// A numeric literal type.
    NumberLiteral { value: f64 },
    /// A string literal type.
    StringLiteral { value: String },
    /// A homogeneous array type.
    Array { element: Box<NativeType<H>> },
    /// A fixed-arity heterogeneous sequence.
    Tuple { elements: Vec<NativeType<H>> },
    /// Members in the engine's declared order, not deduplicated.
    Union { members: Vec<NativeType<H>> },
    /// Members in the engine's declared order, not deduplicated.
    Intersection { members: Vec<NativeType<H>> },
    /// A single call signature; overload sets are out of contract.
    Function {
        parameters: Vec<NativeParameter<H>>,
        return_type: Box<NativeType<H>>,
    },
    /// A structural object type with no declared name; the engine mints a
    /// synthetic fully-qualified name for it.
    AnonymousObject {
        fully_qualified_name: String,
        properties: Vec<NativeProperty<H>>,
    },
    /// A reference to an enclosing generic parameter.
    TypeParameter {
        name: String,
        default: Nullable<Box<NativeType<H>>>,
    },
    /// A reference to a named declaration. `target` resolves it through
    /// [`AnalysisEngine::resolve_declaration`], as an explicit, separate
    /// step; the driver never follows it on its own.
    Reference {
        fully_qualified_name: String,
        type_arguments: Vec<NativeType<H>>,
        target: H,
    },
    /// The engine could not classify the node.
    Unclassified { diagnostic: String },
}

/// A declaration as the engine yields it.
///
/// Closed like [`NativeType`]; `Module` is the only container variant.
#[derive(Clone, Debug, PartialEq)]
pub enum NativeDeclaration<H> {
    Class {
        fully_qualified_name: String,
        name: String,
        properties: Vec<NativeProperty<H>>,
        type_parameters: Vec<NativeTypeParameter<H>>,
    },
    Interface {
        fully_qualified_name: String,
        name: String,
        properties: Vec<NativeProperty<H>>,
        type_parameters: Vec<NativeTypeParameter<H>>,
    },
    Module {
        fully_qualified_name: String,
        declarations: Vec<NativeDeclaration<H>>,
    },
    TypeAlias {
        name: String,
        type_parameters: Vec<NativeTypeParameter<H>>,
        ty: NativeType<H>,
    },
    /// The engine could not classify the node; it still reports an
    /// identity when it determined one before giving up.
    Unclassified {
        diagnostic: String,
        fully_qualified_name: Nullable<String>,
    },
}

// =============================================================================
// Engine Contract
// =============================================================================

/// The external analysis engine.
///
/// Both calls are synchronous and may block on engine-side work (parsing,
/// full checking when `compile` is set). The driver calls
/// `root_declarations` once per read and `resolve_declaration` once per
/// caller-triggered re-entry; within one call the engine must yield
/// members in declared source order.
pub trait AnalysisEngine {
    /// Opaque capability for one declaration, valid for this run.
    type Handle: Clone;

    /// Produce the root declaration set for one input file, or every
    /// problem the engine found, in reporting order.
    fn root_declarations(
        &mut self,
        options: &Options,
        file: &NativeFile,
    ) -> Result<Vec<NativeDeclaration<Self::Handle>>, Vec<Diagnostic>>;

    /// Resolve a handle obtained from a [`NativeType::Reference`].
    ///
    /// Resolution does not fail: a target the engine can no longer
    /// classify comes back as [`NativeDeclaration::Unclassified`].
    fn resolve_declaration(&mut self, handle: &Self::Handle) -> NativeDeclaration<Self::Handle>;
}
