//! Tests for the optional-normalization layer.

use std::path::PathBuf;

use crate::engine::{NativeType, Nullable};
use crate::fixture_engine::{primitive, union};
use crate::normalize;
use crate::options::{InputFile, Options};

fn strict() -> Options {
    Options {
        strict_null_checks: true,
        ..Options::default()
    }
}

#[test]
fn test_nullable_round_trip() {
    assert_eq!(Nullable::Value(5).into_option(), Some(5));
    assert_eq!(Nullable::<i32>::Null.into_option(), None);
    assert_eq!(Nullable::from_option(Some(5)), Nullable::Value(5));
    assert_eq!(Nullable::from_option(None::<i32>), Nullable::Null);
    assert!(Nullable::<i32>::Null.is_null());
    assert!(!Nullable::Value(5).is_null());
}

#[test]
fn test_native_file_with_source() {
    let file = InputFile::with_source("box.ts", "interface Box {}");
    let native = normalize::native_file(&file);
    assert_eq!(native.path, PathBuf::from("box.ts"));
    assert_eq!(native.source, Nullable::Value("interface Box {}".to_string()));
}

#[test]
fn test_native_file_without_source() {
    let file = InputFile::from_path("box.ts");
    let native = normalize::native_file(&file);
    assert_eq!(native.source, Nullable::Null);
}

#[test]
fn test_strict_optional_union_strips_marker_and_unwraps() {
    let ty = union(vec![primitive("number"), primitive("undefined")]);
    let reconciled = normalize::reconcile_member_type(ty, true, &strict());
    assert_eq!(reconciled, primitive("number"));
}

#[test]
fn test_strict_optional_union_keeps_remaining_members() {
    let ty = union(vec![
        primitive("string"),
        primitive("number"),
        primitive("undefined"),
    ]);
    let reconciled = normalize::reconcile_member_type(ty, true, &strict());
    assert_eq!(reconciled, union(vec![primitive("string"), primitive("number")]));
}

#[test]
fn test_strict_optional_marker_only_union_stays_marker() {
    let ty = union(vec![primitive("undefined")]);
    let reconciled = normalize::reconcile_member_type(ty, true, &strict());
    assert_eq!(reconciled, primitive("undefined"));
}

#[test]
fn test_strict_non_optional_member_passes_through() {
    // A declared `number | undefined` on a required member is the
    // author's union, not the mode's marker; it must survive.
    let ty = union(vec![primitive("number"), primitive("undefined")]);
    let reconciled = normalize::reconcile_member_type(ty.clone(), false, &strict());
    assert_eq!(reconciled, ty);
}

#[test]
fn test_loose_mode_passes_through() {
    let ty = union(vec![primitive("number"), primitive("undefined")]);
    let reconciled = normalize::reconcile_member_type(ty.clone(), true, &Options::default());
    assert_eq!(reconciled, ty);
}

#[test]
fn test_non_union_optional_passes_through() {
    let reconciled: NativeType<u32> =
        normalize::reconcile_member_type(primitive("string"), true, &strict());
    assert_eq!(reconciled, primitive("string"));
}
