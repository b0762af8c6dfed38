//! Error types for email address parsing.

use std::fmt;

/// Result type alias for email address parsing.
pub type Result<T> = std::result::Result<T, Error>;

/// The reason an input was rejected by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmailAddressParserError {
    /// The domain is an address literal such as `[192.0.2.1]`.
    AddressLiteralsNotSupported,
    /// The local part is an empty quoted string and the config forbids it.
    EmptyLocalPart,
    /// Characters remain after the domain.
    ExpectedEndOfInput,
    /// The domain does not start with (or continue as) a valid sub-domain.
    InvalidDomainPart,
    /// A dot in the local part is not followed by `atext`.
    InvalidDotString,
    /// The local part starts with neither `atext` nor a double quote.
    InvalidLocalPart,
    /// The quoted string contains a character outside printable ASCII.
    InvalidQuotedString,
    /// The local part is longer than 64 characters.
    LocalPartLengthExceeded,
    /// The local part needs quoting and the config forbids it.
    LocalPartRequiresQuotedString,
    /// The local part is quoted and the config forbids quoted strings.
    QuotedStringInLocalPart,
    /// The address is longer than 254 characters.
    TotalLengthExceeded,
    /// A specific character was expected.
    UnexpectedCharacter(char),
}

impl fmt::Display for EmailAddressParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddressLiteralsNotSupported => f.write_str("Address literals are not supported"),
            Self::EmptyLocalPart => f.write_str("Empty local part is not allowed by config"),
            Self::ExpectedEndOfInput => f.write_str("Expected end of input"),
            Self::InvalidDomainPart => f.write_str("Expected 'Domain' or 'address-literal'"),
            Self::InvalidDotString => f.write_str("Expected 'Dot-string'"),
            Self::InvalidLocalPart => f.write_str("Expected 'Dot-string' or 'Quoted-string'"),
            Self::InvalidQuotedString => f.write_str("Expected 'Quoted-string'"),
            Self::LocalPartLengthExceeded => write!(
                f,
                "Local part exceeds maximum length of {} characters",
                crate::MAXIMUM_LOCAL_PART_LENGTH
            ),
            Self::LocalPartRequiresQuotedString => f.write_str(
                "Local part requiring the use of a quoted string is not allowed by config",
            ),
            Self::QuotedStringInLocalPart => {
                f.write_str("Quoted string in local part is not allowed by config")
            }
            Self::TotalLengthExceeded => write!(
                f,
                "The email address exceeds the maximum length of {} characters",
                crate::MAXIMUM_EMAIL_ADDRESS_LENGTH
            ),
            Self::UnexpectedCharacter(expected) => {
                write!(f, "Expected '{expected}' ({})", u32::from(*expected))
            }
        }
    }
}

/// An email address parse failure.
///
/// Carries the error kind, the 0-based character offset into the original
/// input where parsing failed, and a human-readable message derived from the
/// kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    kind: EmailAddressParserError,
    position: usize,
    message: String,
}

impl Error {
    /// Creates an error of the given kind at a character position.
    #[must_use]
    pub fn new(kind: EmailAddressParserError, position: usize) -> Self {
        Self {
            kind,
            position,
            message: kind.to_string(),
        }
    }

    /// Returns the error kind.
    #[must_use]
    pub const fn kind(&self) -> EmailAddressParserError {
        self.kind
    }

    /// Returns the character offset into the input where parsing failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::redundant_clone, clippy::manual_string_new, clippy::needless_collect, clippy::unreadable_literal, clippy::used_underscore_items, clippy::similar_names)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_character_message() {
        assert_eq!(
            EmailAddressParserError::UnexpectedCharacter('@').to_string(),
            "Expected '@' (64)"
        );
        assert_eq!(
            EmailAddressParserError::UnexpectedCharacter('"').to_string(),
            "Expected '\"' (34)"
        );
    }

    #[test]
    fn test_length_messages() {
        assert_eq!(
            EmailAddressParserError::LocalPartLengthExceeded.to_string(),
            "Local part exceeds maximum length of 64 characters"
        );
        assert_eq!(
            EmailAddressParserError::TotalLengthExceeded.to_string(),
            "The email address exceeds the maximum length of 254 characters"
        );
    }

    #[test]
    fn test_error_display_is_message() {
        let err = Error::new(EmailAddressParserError::ExpectedEndOfInput, 19);
        assert_eq!(err.kind(), EmailAddressParserError::ExpectedEndOfInput);
        assert_eq!(err.position(), 19);
        assert_eq!(err.message(), "Expected end of input");
        assert_eq!(err.to_string(), "Expected end of input");
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(Error::new(EmailAddressParserError::InvalidDomainPart, 5));
        assert_eq!(err.to_string(), "Expected 'Domain' or 'address-literal'");
    }
}
