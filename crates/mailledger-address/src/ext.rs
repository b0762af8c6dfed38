//! Conversions from strings to email addresses.

use crate::config::EmailAddressParserConfig;
use crate::error::Result;
use crate::types::EmailAddress;

/// Parsing shortcuts on string slices.
pub trait EmailAddressExt {
    /// Parses with [`EmailAddressParserConfig::RELAXED`].
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid address.
    fn to_email_address(&self) -> Result<EmailAddress>;

    /// Parses with [`EmailAddressParserConfig::RELAXED`], discarding the error.
    fn to_email_address_or_none(&self) -> Option<EmailAddress>;

    /// Parses an address entered by a user with [`EmailAddressParserConfig::LIMITED`].
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a plain address within the
    /// length limits.
    fn to_user_email_address(&self) -> Result<EmailAddress>;
}

impl EmailAddressExt for str {
    fn to_email_address(&self) -> Result<EmailAddress> {
        EmailAddress::parse(self)
    }

    fn to_email_address_or_none(&self) -> Option<EmailAddress> {
        EmailAddress::parse(self).ok()
    }

    fn to_user_email_address(&self) -> Result<EmailAddress> {
        EmailAddress::parse_with_config(self, EmailAddressParserConfig::LIMITED)
    }
}
