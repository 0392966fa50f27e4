//! Reader configuration and input-file descriptors.
//!
//! `Options` crosses the boundary into the engine unchanged; the reader
//! itself only consults `strict_null_checks` (normalization mode) and
//! `debug` (event verbosity). Configuration commonly arrives as JSON from
//! build tooling that writes booleans as strings, so boolean fields accept
//! both forms.

use anyhow::{Context, Result};
use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::PathBuf;

/// Accepts `true` and `"true"` alike, so configs written by tooling that
/// stringifies booleans still load.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientBool;

    impl<'de> Visitor<'de> for LenientBool {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a boolean or the strings \"true\" / \"false\"")
        }

        fn visit_bool<E>(self, value: bool) -> Result<bool, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_str<E>(self, value: &str) -> Result<bool, E>
        where
            E: de::Error,
        {
            if value.eq_ignore_ascii_case("true") {
                Ok(true)
            } else if value.eq_ignore_ascii_case("false") {
                Ok(false)
            } else {
                Err(E::invalid_value(Unexpected::Str(value), &self))
            }
        }
    }

    deserializer.deserialize_any(LenientBool)
}

/// Configuration for one read.
///
/// `compile` asks the engine for full semantic checking: more problems
/// surface, at higher cost. `strict_null_checks` changes how the engine
/// encodes optional members; the normalization layer reconciles both
/// encodings into one contract, so caller algebras never branch on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    #[serde(deserialize_with = "lenient_bool")]
    pub compile: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub debug: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub strict_null_checks: bool,
}

impl Options {
    /// Load options from a JSON object, e.g. `{"strictNullChecks": true}`.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("failed to parse reader options")
    }
}

/// One input file for the engine to analyze.
///
/// A present `source` overrides reading the file from `path`; reading
/// from disk is the engine's concern either way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputFile {
    pub path: PathBuf,
    pub source: Option<String>,
}

impl InputFile {
    /// A file read from disk by the engine.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        InputFile {
            path: path.into(),
            source: None,
        }
    }

    /// A file whose text is supplied directly.
    pub fn with_source(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        InputFile {
            path: path.into(),
            source: Some(source.into()),
        }
    }
}
