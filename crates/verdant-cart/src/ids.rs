//! Newtype key for cart line identity.
//!
//! Entries are unique by product name, so the name doubles as the line's
//! identifier. Using a newtype keeps it from being mixed up with other
//! strings flowing through a host application.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The identity key of a cart line.
///
/// Equality is exact string match; no trimming or case folding. An empty
/// name is representable but never admitted into the cart (operations refuse
/// it).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    /// Create a name from a string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// True when the name carries no characters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ItemName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ItemName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ItemName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ItemName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_creation() {
        let name = ItemName::new("Fern");
        assert_eq!(name.as_str(), "Fern");
        assert!(!name.is_empty());
    }

    #[test]
    fn test_name_from_string() {
        let name: ItemName = "Oak".into();
        assert_eq!(name, "Oak");
    }

    #[test]
    fn test_name_display() {
        let name = ItemName::new("Peace Lily");
        assert_eq!(format!("{}", name), "Peace Lily");
    }

    #[test]
    fn test_name_equality_is_exact() {
        assert_ne!(ItemName::new("Fern"), ItemName::new("fern"));
        assert_ne!(ItemName::new("Fern"), ItemName::new("Fern "));
    }

    #[test]
    fn test_empty_name() {
        assert!(ItemName::default().is_empty());
        assert!(ItemName::new("").is_empty());
    }
}
