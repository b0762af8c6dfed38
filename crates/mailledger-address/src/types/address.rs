//! Email address types.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use super::EmailDomain;
use crate::config::EmailAddressParserConfig;
use crate::error::{Error, Result};
use crate::parser::EmailAddressParser;
use crate::syntax::is_dot_string;
use crate::{MAXIMUM_EMAIL_ADDRESS_LENGTH, MAXIMUM_LOCAL_PART_LENGTH};

/// A non-fatal condition found in an accepted address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Warning {
    /// The local part can only be written as a quoted string.
    QuotedStringInLocalPart,
    /// The local part is empty.
    EmptyLocalPart,
    /// The local part is longer than 64 characters.
    LocalPartExceedsLengthLimit,
    /// The address is longer than 254 characters.
    EmailAddressExceedsLengthLimit,
}

/// An email address made of a local part and a domain.
///
/// The local part is stored decoded; quoting is only added back when
/// the address is rendered. Equality compares the local part
/// case-sensitively and the domain case-insensitively.
#[derive(Debug, Clone)]
pub struct EmailAddress {
    local_part: String,
    domain: EmailDomain,
    warnings: BTreeSet<Warning>,
}

impl EmailAddress {
    /// Creates an address from trusted components without validation.
    ///
    /// Never fails; anything unusual about the components is recorded in
    /// [`warnings`](Self::warnings).
    #[must_use]
    pub fn new(local_part: impl Into<String>, domain: EmailDomain) -> Self {
        let local_part = local_part.into();
        let mut address = Self {
            local_part,
            domain,
            warnings: BTreeSet::new(),
        };
        address.warnings = address.compute_warnings();
        address
    }

    /// Parses an address with [`EmailAddressParserConfig::RELAXED`].
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid address.
    pub fn parse(input: &str) -> Result<Self> {
        Self::parse_with_config(input, EmailAddressParserConfig::RELAXED)
    }

    /// Parses an address with the given config.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid address under `config`.
    pub fn parse_with_config(input: &str, config: EmailAddressParserConfig) -> Result<Self> {
        EmailAddressParser::new(input, config).parse()
    }

    /// Returns the decoded local part.
    #[must_use]
    pub fn local_part(&self) -> &str {
        &self.local_part
    }

    /// Returns the domain.
    #[must_use]
    pub const fn domain(&self) -> &EmailDomain {
        &self.domain
    }

    /// Returns the warnings recorded for this address.
    #[must_use]
    pub const fn warnings(&self) -> &BTreeSet<Warning> {
        &self.warnings
    }

    /// Returns true if the address has the given warning.
    #[must_use]
    pub fn has_warning(&self, warning: Warning) -> bool {
        self.warnings.contains(&warning)
    }

    /// Returns the local part as it must be written in an address.
    ///
    /// Only wraps the local part in a quoted string when it is not a valid
    /// dot-string.
    #[must_use]
    pub fn encoded_local_part(&self) -> Cow<'_, str> {
        if is_dot_string(&self.local_part) {
            return Cow::Borrowed(&self.local_part);
        }

        let mut quoted = String::with_capacity(self.local_part.len() + 2);
        quoted.push('"');
        for c in self.local_part.chars() {
            if matches!(c, '"' | '\\') {
                quoted.push('\\');
            }
            quoted.push(c);
        }
        quoted.push('"');
        Cow::Owned(quoted)
    }

    /// Returns the address with the domain in its original casing.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}@{}", self.encoded_local_part(), self.domain.as_str())
    }

    /// Returns the address with a lowercased domain.
    #[must_use]
    pub fn normalized_address(&self) -> String {
        format!("{}@{}", self.encoded_local_part(), self.domain.normalized())
    }

    fn compute_warnings(&self) -> BTreeSet<Warning> {
        let mut warnings = BTreeSet::new();

        if !is_dot_string(&self.local_part) {
            warnings.insert(Warning::QuotedStringInLocalPart);
        }
        if self.local_part.is_empty() {
            warnings.insert(Warning::EmptyLocalPart);
        }
        let local_part_length = self.local_part.chars().count();
        if local_part_length > MAXIMUM_LOCAL_PART_LENGTH {
            warnings.insert(Warning::LocalPartExceedsLengthLimit);
        }
        // Measured on the decoded local part, like the parser's length check.
        let total_length = local_part_length + 1 + self.domain.as_str().chars().count();
        if total_length > MAXIMUM_EMAIL_ADDRESS_LENGTH {
            warnings.insert(Warning::EmailAddressExceedsLengthLimit);
        }

        warnings
    }
}

impl PartialEq for EmailAddress {
    fn eq(&self, other: &Self) -> bool {
        self.local_part == other.local_part && self.domain == other.domain
    }
}

impl Eq for EmailAddress {}

impl Hash for EmailAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.local_part.hash(state);
        self.domain.hash(state);
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.encoded_local_part(), self.domain)
    }
}

impl FromStr for EmailAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EmailAddress {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.address())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EmailAddress {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let input = String::deserialize(deserializer)?;
        Self::parse(&input).map_err(serde::de::Error::custom)
    }
}
