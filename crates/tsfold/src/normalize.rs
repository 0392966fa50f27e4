//! The optional-normalization layer.
//!
//! The engine encodes absence as [`Nullable`] and, when
//! `strict_null_checks` is on, additionally folds an explicit `undefined`
//! marker into every optional member's type. Callers get one contract
//! regardless: semantic `Option`s, and an optional member's type equal to
//! its declared type with no added absence union. All mode awareness lives
//! here; the rest of the driver is mode-blind.
//!
//! Rewrites run at the boundary in both directions, before any caller
//! algebra observes a value: engine absence in, caller optionals out, and
//! caller optionals back to engine absence for the input-file record.
//! Every occurrence is rewritten; a record with one unnormalized field
//! would break the contract.

use crate::engine::{NativeFile, NativeType, Nullable};
use crate::options::{InputFile, Options};
use smallvec::SmallVec;

/// The primitive name the engine uses as its absence marker type.
const ABSENT_MARKER: &str = "undefined";

/// Scratch buffer for rebuilding union member lists; unions are almost
/// always small.
type MemberBuffer<H> = SmallVec<[NativeType<H>; 8]>;

/// Rewrite a caller input file into the engine's encoding.
pub(crate) fn native_file(file: &InputFile) -> NativeFile {
    NativeFile {
        path: file.path.clone(),
        source: Nullable::from_option(file.source.clone()),
    }
}

/// Reconcile an optional member's type into the normalized contract.
///
/// With `strict_null_checks` on, the engine represents `x?: T` as
/// `T | undefined`; this strips the marker the mode added, unwrapping the
/// union when one member remains. In every other case the declared type
/// passes through untouched. A member whose type is only the marker stays
/// the marker; there is nothing underneath to recover.
pub(crate) fn reconcile_member_type<H>(
    ty: NativeType<H>,
    optional: bool,
    options: &Options,
) -> NativeType<H> {
    if !options.strict_null_checks || !optional {
        return ty;
    }

    match ty {
        NativeType::Union { members } => {
            let mut kept: MemberBuffer<H> = SmallVec::new();
            for member in members {
                if !is_absent_marker(&member) {
                    kept.push(member);
                }
            }
            match kept.len() {
                0 => NativeType::Primitive {
                    name: ABSENT_MARKER.to_string(),
                },
                1 => kept.remove(0),
                _ => NativeType::Union {
                    members: kept.into_vec(),
                },
            }
        }
        other => other,
    }
}

fn is_absent_marker<H>(ty: &NativeType<H>) -> bool {
    matches!(ty, NativeType::Primitive { name } if name == ABSENT_MARKER)
}
