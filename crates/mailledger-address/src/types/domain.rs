//! Email domain type.

use std::fmt;
use std::hash::{Hash, Hasher};

/// The domain part of an email address.
///
/// Keeps the original casing for display but compares and hashes
/// case-insensitively.
#[derive(Debug, Clone)]
pub struct EmailDomain {
    value: String,
    normalized: String,
}

impl EmailDomain {
    /// Creates a domain from trusted input without validation.
    #[must_use]
    pub fn new(domain: impl Into<String>) -> Self {
        let value = domain.into();
        let normalized = value.to_lowercase();
        Self { value, normalized }
    }

    /// Returns the domain with its original casing.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the lowercased domain.
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

impl PartialEq for EmailDomain {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for EmailDomain {}

impl Hash for EmailDomain {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

impl fmt::Display for EmailDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<&str> for EmailDomain {
    fn from(domain: &str) -> Self {
        Self::new(domain)
    }
}

impl From<String> for EmailDomain {
    fn from(domain: String) -> Self {
        Self::new(domain)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EmailDomain {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EmailDomain {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::redundant_clone, clippy::manual_string_new, clippy::needless_collect, clippy::unreadable_literal, clippy::used_underscore_items, clippy::similar_names)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_case_insensitive_equality() {
        assert_eq!(
            EmailDomain::new("domain.example"),
            EmailDomain::new("DOMAIN.example")
        );
        assert_ne!(
            EmailDomain::new("domain.example"),
            EmailDomain::new("other.example")
        );
    }

    #[test]
    fn test_hash_is_case_insensitive() {
        let mut set = HashSet::new();
        set.insert(EmailDomain::new("Domain.Example"));
        assert!(set.contains(&EmailDomain::new("domain.example")));
        assert!(!set.insert(EmailDomain::new("DOMAIN.EXAMPLE")));
    }

    #[test]
    fn test_display_keeps_casing() {
        let domain = EmailDomain::new("Domain.Example");
        assert_eq!(domain.to_string(), "Domain.Example");
        assert_eq!(domain.as_str(), "Domain.Example");
        assert_eq!(domain.normalized(), "domain.example");
    }

    #[test]
    fn test_from_conversions() {
        let from_str: EmailDomain = "domain.example".into();
        let from_string: EmailDomain = String::from("DOMAIN.EXAMPLE").into();
        assert_eq!(from_str, from_string);
    }
}
