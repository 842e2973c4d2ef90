//! Identifier management using string interning for tensor and index names.
//!
//! This module provides the [`Id`] type. Index names are compared constantly
//! while resolving contractions, so they are interned once and compared as
//! symbols afterwards.

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

fn interner() -> std::sync::MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock")
}

/// Interned name of a tensor or an index.
///
/// # Examples
///
/// ```
/// use tensor_diagram_core::identifier::Id;
///
/// let j = Id::new("j");
/// assert_eq!(j, "j");
///
/// // Disambiguated names used by multi-way summations
/// assert_eq!(j.with_suffix(2), "j2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    ///
    /// # Arguments
    ///
    /// * `name` - The string representation of the identifier
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }

    /// Creates the identifier `{self}{suffix}`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensor_diagram_core::identifier::Id;
    ///
    /// let k = Id::new("k");
    /// assert_eq!(k.with_suffix(0), "k0");
    /// assert_eq!(k.with_suffix(11), "k11");
    /// ```
    pub fn with_suffix(&self, suffix: usize) -> Self {
        let mut interner = interner();
        let base = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        let name = format!("{base}{suffix}");
        Self(interner.get_or_intern(&name))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner();
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        f.pad(str_value)
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Id {
    fn from(name: String) -> Self {
        Self::new(&name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        let interner = interner();
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
