//! Identifier management using string interning for efficient storage and comparison.
//!
//! This module provides the [`Id`] type together with [`sanitize`], which
//! reduces free-text display names to the alphanumeric node identifiers that
//! Graphviz receives.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> &'static Mutex<DefaultStringInterner> {
    INTERNER.get_or_init(|| Mutex::new(DefaultStringInterner::new()))
}

/// Removes every character that is not alphanumeric.
///
/// Display names from the members CSV are reduced to safe Graphviz node
/// identifiers this way. The result is not guaranteed unique: two distinct
/// display names may sanitize to the same identifier, in which case they
/// collide silently.
///
/// Sanitizing is idempotent: `sanitize(sanitize(s)) == sanitize(s)`.
///
/// # Examples
///
/// ```
/// use armature_core::sanitize;
///
/// assert_eq!(sanitize("Foo Bar"), "FooBar");
/// assert_eq!(sanitize("Order<T>!"), "OrderT");
/// ```
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(|c| c.is_alphanumeric()).collect()
}

/// Efficient identifier type using string interning.
///
/// Identifiers key diagram nodes and edge endpoints. Interning keeps them
/// `Copy` and makes equality a symbol comparison.
///
/// # Examples
///
/// ```
/// use armature_core::Id;
///
/// let id = Id::sanitized("Foo Bar");
/// assert_eq!(id, "FooBar");
///
/// // Already-clean names pass through unchanged
/// let same = Id::new("FooBar");
/// assert_eq!(id, same);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from a string, interning it verbatim.
    pub fn new(name: &str) -> Self {
        let mut interner = interner().lock().expect("Failed to acquire interner lock");
        Self(interner.get_or_intern(name))
    }

    /// Creates an `Id` from free text by sanitizing it first.
    ///
    /// Equivalent to `Id::new(&sanitize(raw))`. This is the constructor the
    /// CSV loader uses for both member identifiers and connection
    /// participants.
    pub fn sanitized(raw: &str) -> Self {
        Self::new(&sanitize(raw))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{}", str_value)
    }
}

impl From<&str> for Id {
    /// Creates an `Id` from a string slice, without sanitizing.
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_new() {
        let id1 = Id::new("Rectangle");
        let id2 = Id::new("Rectangle");
        let id3 = Id::new("Oval");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "Rectangle");
    }

    #[test]
    fn test_sanitize_strips_non_alphanumeric() {
        assert_eq!(sanitize("Foo Bar"), "FooBar");
        assert_eq!(sanitize("a-b_c.d"), "abcd");
        assert_eq!(sanitize("<<Order>>"), "Order");
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("!?*"), "");
    }

    #[test]
    fn test_sanitize_keeps_unicode_alphanumerics() {
        assert_eq!(sanitize("Café #1"), "Café1");
        assert_eq!(sanitize("Ödeme Planı"), "ÖdemePlanı");
    }

    #[test]
    fn test_sanitized_id_matches_sanitize() {
        let id = Id::sanitized("Foo Bar, Baz!");
        assert_eq!(id, "FooBarBaz");
        assert_eq!(id, Id::new(&sanitize("Foo Bar, Baz!")));
    }

    #[test]
    fn test_display_round_trip() {
        let id = Id::new("PaymentGateway");
        assert_eq!(id.to_string(), "PaymentGateway");
    }

    #[test]
    fn test_colliding_names_produce_equal_ids() {
        // Documented quirk: distinct display names may collide once sanitized.
        let a = Id::sanitized("Foo Bar");
        let b = Id::sanitized("FooBar");
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn sanitize_output_is_alphanumeric(s in ".*") {
            let cleaned = sanitize(&s);
            prop_assert!(cleaned.chars().all(char::is_alphanumeric));
        }

        #[test]
        fn sanitize_is_idempotent(s in ".*") {
            let once = sanitize(&s);
            prop_assert_eq!(sanitize(&once), once);
        }
    }
}
