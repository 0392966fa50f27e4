//! The two folding algebras.
//!
//! A folder is a caller-supplied total mapping from each closed node shape
//! to a caller-chosen result type: [`TypeFolder`] produces the caller's
//! type representation, [`DeclarationFolder`] the declaration
//! representation. The driver dispatches each engine node to exactly one
//! handler; there is no partial coverage and no default arm to forget,
//! because the compiler checks both traits for completeness.
//!
//! `unknown` is the single escape valve for node kinds the closed sets do
//! not cover. It is an ordinary case, not an error: callers decide whether
//! to log, substitute, or abort when one shows up. Extending either set is
//! deliberately a breaking change, so every caller is forced to handle new
//! cases.
//!
//! Folders must be safely re-entrant:
//! [`read_declaration`](crate::Declarations::read_declaration) may invoke
//! them any number of times, with overlapping fully-qualified names on
//! recursive graphs.
//!
//! # Usage
//!
//! ```ignore
//! struct Arity;
//!
//! impl<H> TypeFolder<H> for Arity {
//!     type Type = usize;
//!
//!     fn primitive(&mut self, _name: &str) -> usize { 0 }
//!     fn union(&mut self, members: Vec<usize>) -> usize { members.len() }
//!     // ... one method per case
//! }
//! ```

use crate::shapes::{
    Class, Function, Interface, Module, Property, TypeAlias, TypeParameter, TypeReference,
};
use tsfold_common::FullyQualifiedName;

/// Folds each type-expression shape into the caller's type representation.
///
/// `H` is the engine's opaque declaration handle, carried through
/// [`TypeReference`] untouched. All sequences arrive in the engine's
/// declared order; unions and intersections are not deduplicated or
/// normalized before reaching the handler.
pub trait TypeFolder<H> {
    /// The caller's type representation.
    type Type;

    /// A built-in type, named verbatim.
    fn primitive(&mut self, name: &str) -> Self::Type;

    /// The literal type `true` or `false`.
    fn boolean_literal(&mut self, value: bool) -> Self::Type;

    /// A numeric literal type.
    fn number_literal(&mut self, value: f64) -> Self::Type;

    /// A string literal type.
    fn string_literal(&mut self, value: &str) -> Self::Type;

    /// A homogeneous array type.
    fn array(&mut self, element: Self::Type) -> Self::Type;

    /// A fixed-arity heterogeneous sequence.
    fn tuple(&mut self, elements: Vec<Self::Type>) -> Self::Type;

    /// A union in declared member order.
    fn union(&mut self, members: Vec<Self::Type>) -> Self::Type;

    /// An intersection in declared member order.
    fn intersection(&mut self, members: Vec<Self::Type>) -> Self::Type;

    /// A single call signature.
    fn function(&mut self, function: Function<Self::Type>) -> Self::Type;

    /// A structural object type with a synthetic name and no declaration.
    fn anonymous_object(
        &mut self,
        fully_qualified_name: FullyQualifiedName,
        properties: Vec<Property<Self::Type>>,
    ) -> Self::Type;

    /// A reference to an enclosing generic parameter, default already
    /// normalized.
    fn type_parameter(&mut self, parameter: TypeParameter<Self::Type>) -> Self::Type;

    /// A reference to a named declaration. Resolving `reference.target`
    /// is an explicit, separate step the caller takes (or doesn't).
    fn type_reference(&mut self, reference: TypeReference<H, Self::Type>) -> Self::Type;

    /// A node outside the closed set, with the engine's explanation.
    fn unknown(&mut self, diagnostic: &str) -> Self::Type;
}

/// Folds each declaration shape into the caller's declaration
/// representation.
///
/// `Type` ties this algebra to the [`TypeFolder`] used in the same run;
/// the driver requires the two to agree. `module` is the one case that
/// recurses into the caller's own `Decl`, because modules contain
/// declarations rather than typed values.
pub trait DeclarationFolder<H> {
    /// The type representation produced by the paired [`TypeFolder`].
    type Type;
    /// The caller's declaration representation.
    type Decl;

    fn class(&mut self, class: Class<Self::Type>) -> Self::Decl;

    fn interface(&mut self, interface: Interface<Self::Type>) -> Self::Decl;

    fn module(&mut self, module: Module<Self::Decl>) -> Self::Decl;

    fn type_alias(&mut self, alias: TypeAlias<Self::Type>) -> Self::Decl;

    /// A declaration outside the closed set. The engine reports an
    /// identity when it determined one before giving up.
    fn unknown(
        &mut self,
        diagnostic: &str,
        fully_qualified_name: Option<FullyQualifiedName>,
    ) -> Self::Decl;
}
