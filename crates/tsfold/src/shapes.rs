//! The shapes caller algebras receive.
//!
//! Everything here is fully materialized before a folder sees it: names
//! are [`FullyQualifiedName`]s, optional fields are `Option`s, and nested
//! type expressions have already been folded to the caller's own `T`.
//! The core keeps no copy; each value is built for one handler call and
//! moved into it.

use tsfold_common::FullyQualifiedName;

/// A named, possibly-absent-at-runtime member of a class, interface, or
/// object shape.
#[derive(Clone, Debug, PartialEq)]
pub struct Property<T> {
    pub name: String,
    pub ty: T,
    pub optional: bool,
}

/// A generic parameter with an optional default type expression.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeParameter<T> {
    pub name: String,
    pub default: Option<T>,
}

/// A function parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter<T> {
    pub name: String,
    pub ty: T,
}

/// A function signature.
#[derive(Clone, Debug, PartialEq)]
pub struct Function<T> {
    /// Parameters in declared order.
    pub parameters: Vec<Parameter<T>>,
    pub return_type: T,
}

/// A class declaration.
///
/// Carries properties and type parameters only; constructors and methods
/// are a future extension of this surface, not part of it yet.
#[derive(Clone, Debug, PartialEq)]
pub struct Class<T> {
    pub fully_qualified_name: FullyQualifiedName,
    pub name: String,
    /// Properties in declared order.
    pub properties: Vec<Property<T>>,
    pub type_parameters: Vec<TypeParameter<T>>,
}

/// An interface declaration. Same surface as [`Class`].
#[derive(Clone, Debug, PartialEq)]
pub struct Interface<T> {
    pub fully_qualified_name: FullyQualifiedName,
    pub name: String,
    /// Properties in declared order.
    pub properties: Vec<Property<T>>,
    pub type_parameters: Vec<TypeParameter<T>>,
}

/// A module declaration: a container, not a leaf.
///
/// `D` is the caller's own folded declaration type, so modules nest
/// arbitrarily through the caller's representation.
#[derive(Clone, Debug, PartialEq)]
pub struct Module<D> {
    pub fully_qualified_name: FullyQualifiedName,
    pub declarations: Vec<D>,
}

/// A type alias declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeAlias<T> {
    pub name: String,
    pub type_parameters: Vec<TypeParameter<T>>,
    pub ty: T,
}

/// A reference to a named declaration.
///
/// `target` is a capability, not a value: the only way to obtain the
/// referenced declaration's folded form is to pass it back through
/// [`Declarations::read_declaration`](crate::Declarations::read_declaration).
/// Whether and when to follow it is entirely the caller's decision.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeReference<H, T> {
    pub fully_qualified_name: FullyQualifiedName,
    /// Type arguments in declared order.
    pub type_arguments: Vec<T>,
    pub target: H,
}
