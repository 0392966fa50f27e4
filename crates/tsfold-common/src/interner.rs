//! Fully-qualified names and their interning.
//!
//! A [`FullyQualifiedName`] is the stable identity of a declaration for the
//! lifetime of one analysis run: opaque text, totally ordered, hashable, and
//! cheap to clone. Callers use it as a key for caching and for cycle
//! detection across `read_declaration` calls.
//!
//! [`NameInterner`] deduplicates the backing text so an engine that mints
//! the same name many times hands out clones of one allocation.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

/// The identity of a declaration within one analysis run.
///
/// Two names compare equal exactly when their text is equal; ordering is
/// the lexicographic ordering of the text.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FullyQualifiedName(Arc<str>);

impl FullyQualifiedName {
    /// Create a name from raw text.
    pub fn new(text: impl AsRef<str>) -> Self {
        FullyQualifiedName(Arc::from(text.as_ref()))
    }

    /// The underlying text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FullyQualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for FullyQualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FullyQualifiedName({:?})", &*self.0)
    }
}

impl From<&str> for FullyQualifiedName {
    fn from(text: &str) -> Self {
        FullyQualifiedName::new(text)
    }
}

impl From<String> for FullyQualifiedName {
    fn from(text: String) -> Self {
        FullyQualifiedName(Arc::from(text))
    }
}

/// Deduplicating factory for [`FullyQualifiedName`] values.
///
/// Intended for engine implementations: intern every name you mint and
/// identical text shares one allocation for the run.
#[derive(Default)]
pub struct NameInterner {
    names: FxHashMap<String, FullyQualifiedName>,
}

impl NameInterner {
    /// Create an empty interner.
    pub fn new() -> Self {
        NameInterner {
            names: FxHashMap::default(),
        }
    }

    /// Intern `text`, reusing the existing allocation when seen before.
    pub fn intern(&mut self, text: &str) -> FullyQualifiedName {
        if let Some(name) = self.names.get(text) {
            return name.clone();
        }
        let name = FullyQualifiedName::new(text);
        self.names.insert(text.to_string(), name.clone());
        name
    }

    /// Number of distinct names interned so far.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_follows_text() {
        let a = FullyQualifiedName::new("\"box\".Box");
        let b = FullyQualifiedName::new("\"box\".Box");
        let c = FullyQualifiedName::new("\"box\".Lid");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let a = FullyQualifiedName::new("a.A");
        let b = FullyQualifiedName::new("a.B");
        assert!(a < b);
    }

    #[test]
    fn test_interner_shares_backing_text() {
        let mut interner = NameInterner::new();
        let a = interner.intern("m.Widget");
        let b = interner.intern("m.Widget");
        assert_eq!(a, b);
        assert_eq!(interner.len(), 1);
        assert!(Arc::ptr_eq(&a.0, &b.0));
    }

    #[test]
    fn test_interner_distinguishes_text() {
        let mut interner = NameInterner::new();
        let a = interner.intern("m.A");
        let b = interner.intern("m.B");
        assert_ne!(a, b);
        assert_eq!(interner.len(), 2);
    }
}
