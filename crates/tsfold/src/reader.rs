//! The traversal/resolution driver.
//!
//! One read moves through three stages: the caller's request carries the
//! configuration, the input file, and the two folders; the engine yields
//! the root declaration set or fails the whole run with its diagnostics;
//! on success every root is folded and the result packages the folded
//! `top_level` together with a re-entry operation bound to the same
//! options and folders, so later resolution of a reference handle folds
//! with identical rules.
//!
//! The driver never follows a [`Reference`](crate::NativeType::Reference)
//! target on its own. The source type system permits self- and mutually
//! recursive named types, so recursion control belongs to the caller: keep
//! a visited set keyed by [`FullyQualifiedName`](tsfold_common::FullyQualifiedName)
//! across [`read_declaration`](Declarations::read_declaration) calls and
//! substitute a placeholder for a name already in progress.

use tracing::{debug, trace};
use tsfold_common::{Diagnostic, NameInterner};

use crate::engine::{
    AnalysisEngine, NativeDeclaration, NativeProperty, NativeType, NativeTypeParameter,
};
use crate::fold::{DeclarationFolder, TypeFolder};
use crate::normalize;
use crate::options::{InputFile, Options};
use crate::shapes::{
    Class, Function, Interface, Module, Parameter, Property, TypeAlias, TypeParameter,
    TypeReference,
};

/// Read one file's declaration graph and fold it.
///
/// On failure the engine's diagnostics come back in reporting order and
/// nothing else: no partial declaration set is ever produced. On success
/// the returned [`Declarations`] owns the engine for the rest of the
/// analysis run.
pub fn read_declarations<E, TF, DF>(
    mut engine: E,
    options: Options,
    file: &InputFile,
    type_folder: TF,
    declaration_folder: DF,
) -> Result<Declarations<E, TF, DF>, Vec<Diagnostic>>
where
    E: AnalysisEngine,
    TF: TypeFolder<E::Handle>,
    DF: DeclarationFolder<E::Handle, Type = TF::Type>,
{
    let native_file = normalize::native_file(file);
    debug!(
        path = %file.path.display(),
        compile = options.compile,
        strict_null_checks = options.strict_null_checks,
        "requesting root declarations"
    );

    let roots = engine.root_declarations(&options, &native_file)?;

    let mut session = FoldSession {
        engine,
        options,
        type_folder,
        declaration_folder,
        names: NameInterner::new(),
    };
    let top_level: Vec<DF::Decl> = roots
        .into_iter()
        .map(|declaration| session.fold_declaration(declaration))
        .collect();
    debug!(count = top_level.len(), "folded root declarations");

    Ok(Declarations { top_level, session })
}

/// The result of one successful read.
///
/// `top_level` holds the folded roots. [`read_declaration`] re-enters the
/// fold for a single referenced declaration; each call is an independent
/// fold under the run's options and folders, and does not cache. Caching
/// and cycle control across calls are the caller's responsibility.
///
/// [`read_declaration`]: Declarations::read_declaration
pub struct Declarations<E, TF, DF>
where
    E: AnalysisEngine,
    TF: TypeFolder<E::Handle>,
    DF: DeclarationFolder<E::Handle, Type = TF::Type>,
{
    /// The folded top-level declarations, in the engine's declared order.
    pub top_level: Vec<DF::Decl>,
    session: FoldSession<E, TF, DF>,
}

impl<E, TF, DF> Declarations<E, TF, DF>
where
    E: AnalysisEngine,
    TF: TypeFolder<E::Handle>,
    DF: DeclarationFolder<E::Handle, Type = TF::Type>,
{
    /// Fold the declaration a reference handle points to.
    ///
    /// Never fails the run: an unclassifiable target folds to the
    /// `unknown` declaration case. May invoke the folders any number of
    /// times; on recursive graphs the same fully-qualified name will
    /// recur, and terminating that recursion is the caller's decision.
    pub fn read_declaration(&mut self, handle: &E::Handle) -> DF::Decl {
        self.session.read_declaration(handle)
    }

    /// The engine this run owns.
    pub fn engine(&self) -> &E {
        &self.session.engine
    }

    /// Give the engine back, ending the run.
    pub fn into_engine(self) -> E {
        self.session.engine
    }
}

/// Folding state shared by the initial traversal and every re-entry.
struct FoldSession<E, TF, DF>
where
    E: AnalysisEngine,
{
    engine: E,
    options: Options,
    type_folder: TF,
    declaration_folder: DF,
    /// Dedupes identities within the run; recurring names share one
    /// allocation across re-entries.
    names: NameInterner,
}

impl<E, TF, DF> FoldSession<E, TF, DF>
where
    E: AnalysisEngine,
    TF: TypeFolder<E::Handle>,
    DF: DeclarationFolder<E::Handle, Type = TF::Type>,
{
    fn read_declaration(&mut self, handle: &E::Handle) -> DF::Decl {
        if self.options.debug {
            debug!("resolving declaration handle");
        } else {
            trace!("resolving declaration handle");
        }
        let native = self.engine.resolve_declaration(handle);
        self.fold_declaration(native)
    }

    fn fold_declaration(&mut self, native: NativeDeclaration<E::Handle>) -> DF::Decl {
        match native {
            NativeDeclaration::Class {
                fully_qualified_name,
                name,
                properties,
                type_parameters,
            } => {
                trace!(name = %fully_qualified_name, "folding class");
                let class = Class {
                    fully_qualified_name: self.names.intern(&fully_qualified_name),
                    name,
                    properties: self.fold_properties(properties),
                    type_parameters: self.fold_type_parameters(type_parameters),
                };
                self.declaration_folder.class(class)
            }
            NativeDeclaration::Interface {
                fully_qualified_name,
                name,
                properties,
                type_parameters,
            } => {
                trace!(name = %fully_qualified_name, "folding interface");
                let interface = Interface {
                    fully_qualified_name: self.names.intern(&fully_qualified_name),
                    name,
                    properties: self.fold_properties(properties),
                    type_parameters: self.fold_type_parameters(type_parameters),
                };
                self.declaration_folder.interface(interface)
            }
            NativeDeclaration::Module {
                fully_qualified_name,
                declarations,
            } => {
                trace!(name = %fully_qualified_name, "folding module");
                let declarations = declarations
                    .into_iter()
                    .map(|declaration| self.fold_declaration(declaration))
                    .collect();
                let fully_qualified_name = self.names.intern(&fully_qualified_name);
                self.declaration_folder.module(Module {
                    fully_qualified_name,
                    declarations,
                })
            }
            NativeDeclaration::TypeAlias {
                name,
                type_parameters,
                ty,
            } => {
                trace!(name = %name, "folding type alias");
                let alias = TypeAlias {
                    name,
                    type_parameters: self.fold_type_parameters(type_parameters),
                    ty: self.fold_type(ty),
                };
                self.declaration_folder.type_alias(alias)
            }
            NativeDeclaration::Unclassified {
                diagnostic,
                fully_qualified_name,
            } => {
                let name = fully_qualified_name
                    .into_option()
                    .map(|name| self.names.intern(&name));
                self.declaration_folder.unknown(&diagnostic, name)
            }
        }
    }

    fn fold_type(&mut self, native: NativeType<E::Handle>) -> TF::Type {
        match native {
            NativeType::Primitive { name } => self.type_folder.primitive(&name),
            NativeType::BooleanLiteral { value } => self.type_folder.boolean_literal(value),
            NativeType::NumberLiteral { value } => self.type_folder.number_literal(value),
            NativeType::StringLiteral { value } => self.type_folder.string_literal(&value),
            NativeType::Array { element } => {
                let element = self.fold_type(*element);
                self.type_folder.array(element)
            }
            NativeType::Tuple { elements } => {
                let elements = self.fold_types(elements);
                self.type_folder.tuple(elements)
            }
            NativeType::Union { members } => {
                let members = self.fold_types(members);
                self.type_folder.union(members)
            }
            NativeType::Intersection { members } => {
                let members = self.fold_types(members);
                self.type_folder.intersection(members)
            }
            NativeType::Function {
                parameters,
                return_type,
            } => {
                let parameters = parameters
                    .into_iter()
                    .map(|parameter| Parameter {
                        name: parameter.name,
                        ty: self.fold_type(parameter.ty),
                    })
                    .collect();
                let return_type = self.fold_type(*return_type);
                self.type_folder.function(Function {
                    parameters,
                    return_type,
                })
            }
            NativeType::AnonymousObject {
                fully_qualified_name,
                properties,
            } => {
                let fully_qualified_name = self.names.intern(&fully_qualified_name);
                let properties = self.fold_properties(properties);
                self.type_folder
                    .anonymous_object(fully_qualified_name, properties)
            }
            NativeType::TypeParameter { name, default } => {
                let default = default.into_option().map(|ty| self.fold_type(*ty));
                self.type_folder
                    .type_parameter(TypeParameter { name, default })
            }
            NativeType::Reference {
                fully_qualified_name,
                type_arguments,
                target,
            } => {
                let fully_qualified_name = self.names.intern(&fully_qualified_name);
                let type_arguments = self.fold_types(type_arguments);
                self.type_folder.type_reference(TypeReference {
                    fully_qualified_name,
                    type_arguments,
                    target,
                })
            }
            NativeType::Unclassified { diagnostic } => self.type_folder.unknown(&diagnostic),
        }
    }

    fn fold_types(&mut self, types: Vec<NativeType<E::Handle>>) -> Vec<TF::Type> {
        types.into_iter().map(|ty| self.fold_type(ty)).collect()
    }

    fn fold_properties(
        &mut self,
        properties: Vec<NativeProperty<E::Handle>>,
    ) -> Vec<Property<TF::Type>> {
        properties
            .into_iter()
            .map(|property| {
                let ty =
                    normalize::reconcile_member_type(property.ty, property.optional, &self.options);
                Property {
                    name: property.name,
                    ty: self.fold_type(ty),
                    optional: property.optional,
                }
            })
            .collect()
    }

    fn fold_type_parameters(
        &mut self,
        parameters: Vec<NativeTypeParameter<E::Handle>>,
    ) -> Vec<TypeParameter<TF::Type>> {
        parameters
            .into_iter()
            .map(|parameter| TypeParameter {
                name: parameter.name,
                default: parameter.default.into_option().map(|ty| self.fold_type(ty)),
            })
            .collect()
    }
}
