//! Email address parser.
//!
//! A recursive-descent recognizer for the RFC 5322 `addr-spec` without
//! obsolete syntax or folding whitespace:
//!
//! ```text
//! addr-spec     = local-part "@" domain
//! local-part    = Dot-string / Quoted-string
//! Dot-string    = Atom *("." Atom)
//! Quoted-string = DQUOTE *(qtextSMTP / quoted-pairSMTP) DQUOTE
//! domain        = sub-domain *("." sub-domain)
//! sub-domain    = Let-dig [Ldh-str]
//! ```
//!
//! Address literals (`[...]`) are recognized and rejected. Every error
//! carries the character position at which parsing stopped.

mod cursor;

use cursor::Cursor;

use crate::config::EmailAddressParserConfig;
use crate::error::{EmailAddressParserError, Error, Result};
use crate::syntax::{is_atext, is_dot_string, is_let_dig, is_qtext, is_quoted_pair_char};
use crate::types::{EmailAddress, EmailDomain};
use crate::{MAXIMUM_EMAIL_ADDRESS_LENGTH, MAXIMUM_LOCAL_PART_LENGTH};

const DQUOTE: char = '"';
const BACKSLASH: char = '\\';
const DOT: char = '.';
const AT: char = '@';
const HYPHEN: char = '-';
const LEFT_BRACKET: char = '[';

/// Parses `input` into an [`EmailAddress`] under `config`.
///
/// # Errors
///
/// Returns the first violation found scanning left to right.
pub fn parse_email_address(input: &str, config: EmailAddressParserConfig) -> Result<EmailAddress> {
    EmailAddressParser::new(input, config).parse()
}

/// Single-use parser for one input string.
pub struct EmailAddressParser<'a> {
    cursor: Cursor<'a>,
    config: EmailAddressParserConfig,
}

impl<'a> EmailAddressParser<'a> {
    /// Creates a parser for `input`.
    #[must_use]
    pub const fn new(input: &'a str, config: EmailAddressParserConfig) -> Self {
        Self {
            cursor: Cursor::new(input),
            config,
        }
    }

    /// Consumes the whole input and returns the parsed address.
    ///
    /// # Errors
    ///
    /// Returns an error carrying the kind and position of the first
    /// grammar or config violation.
    pub fn parse(mut self) -> Result<EmailAddress> {
        let result = self.read_addr_spec();

        match &result {
            Err(err) => {
                tracing::trace!(
                    position = err.position(),
                    error = ?err.kind(),
                    "Rejected email address"
                );
            }
            Ok(address) if !address.warnings().is_empty() => {
                tracing::debug!(
                    warnings = ?address.warnings(),
                    "Accepted email address with warnings"
                );
            }
            Ok(_) => {}
        }

        result
    }

    fn read_addr_spec(&mut self) -> Result<EmailAddress> {
        let local_part = self.read_local_part()?;
        self.expect(AT)?;
        let domain = self.read_domain()?;

        if !self.cursor.is_eof() {
            return Err(self.error(EmailAddressParserError::ExpectedEndOfInput));
        }

        self.check_lengths(&local_part, &domain)?;

        Ok(EmailAddress::new(local_part, EmailDomain::new(domain)))
    }

    fn read_local_part(&mut self) -> Result<String> {
        match self.cursor.peek() {
            Some(DQUOTE) => self.read_quoted_local_part(),
            Some(c) if is_atext(c) => self.read_dot_string(),
            _ => Err(self.error(EmailAddressParserError::InvalidLocalPart)),
        }
    }

    /// `Dot-string = Atom *("." Atom)`
    fn read_dot_string(&mut self) -> Result<String> {
        let start = self.cursor.offset();

        loop {
            self.cursor.advance_while(is_atext);

            if !self.cursor.peek_is(DOT) {
                break;
            }
            self.cursor.advance();

            if !self.cursor.peek().is_some_and(is_atext) {
                return Err(self.error(EmailAddressParserError::InvalidDotString));
            }
        }

        Ok(self.cursor.slice_from(start).to_owned())
    }

    fn read_quoted_local_part(&mut self) -> Result<String> {
        let start = self.cursor.position();

        if !self.config.quoted_local_part_allowed {
            return Err(self.error(EmailAddressParserError::QuotedStringInLocalPart));
        }

        let local_part = self.read_quoted_string()?;

        if !is_dot_string(&local_part)
            && !self.config.local_part_requiring_quoted_string_allowed
        {
            return Err(Error::new(
                EmailAddressParserError::LocalPartRequiresQuotedString,
                start,
            ));
        }

        if local_part.is_empty() && !self.config.empty_local_part_allowed {
            return Err(Error::new(
                EmailAddressParserError::EmptyLocalPart,
                start + 1,
            ));
        }

        Ok(local_part)
    }

    /// `Quoted-string = DQUOTE *(qtextSMTP / quoted-pairSMTP) DQUOTE`
    ///
    /// Returns the content with quoted pairs resolved.
    fn read_quoted_string(&mut self) -> Result<String> {
        self.expect(DQUOTE)?;

        let mut content = String::new();
        loop {
            match self.cursor.peek() {
                Some(DQUOTE) => {
                    self.cursor.advance();
                    return Ok(content);
                }
                Some(BACKSLASH) => {
                    self.cursor.advance();
                    match self.cursor.advance() {
                        Some(c) if is_quoted_pair_char(c) => content.push(c),
                        Some(_) => {
                            return Err(self.error(EmailAddressParserError::InvalidQuotedString));
                        }
                        None => {
                            return Err(
                                self.error(EmailAddressParserError::UnexpectedCharacter(DQUOTE))
                            );
                        }
                    }
                }
                Some(c) if is_qtext(c) => {
                    self.cursor.advance();
                    content.push(c);
                }
                Some(_) => return Err(self.error(EmailAddressParserError::InvalidQuotedString)),
                None => {
                    return Err(self.error(EmailAddressParserError::UnexpectedCharacter(DQUOTE)));
                }
            }
        }
    }

    fn read_domain(&mut self) -> Result<String> {
        match self.cursor.peek() {
            Some(LEFT_BRACKET) => {
                return Err(self.error(EmailAddressParserError::AddressLiteralsNotSupported));
            }
            Some(c) if is_let_dig(c) => {}
            _ => return Err(self.error(EmailAddressParserError::InvalidDomainPart)),
        }

        let start = self.cursor.offset();
        loop {
            self.read_sub_domain()?;

            if !self.cursor.peek_is(DOT) {
                break;
            }
            self.cursor.advance();
        }

        Ok(self.cursor.slice_from(start).to_owned())
    }

    /// `sub-domain = Let-dig [Ldh-str]`
    fn read_sub_domain(&mut self) -> Result<()> {
        loop {
            if !self.cursor.peek().is_some_and(is_let_dig) {
                return Err(self.error(EmailAddressParserError::InvalidDomainPart));
            }
            self.cursor.advance_while(is_let_dig);

            if self.cursor.advance_while(|c| c == HYPHEN) == 0 {
                return Ok(());
            }
        }
    }

    fn check_lengths(&self, local_part: &str, domain: &str) -> Result<()> {
        let local_part_length = local_part.chars().count();

        if self.config.local_part_length_check_enabled
            && local_part_length > MAXIMUM_LOCAL_PART_LENGTH
        {
            return Err(Error::new(
                EmailAddressParserError::LocalPartLengthExceeded,
                MAXIMUM_LOCAL_PART_LENGTH + 1,
            ));
        }

        let total_length = local_part_length + 1 + domain.chars().count();
        if self.config.email_address_length_check_enabled
            && total_length > MAXIMUM_EMAIL_ADDRESS_LENGTH
        {
            return Err(Error::new(
                EmailAddressParserError::TotalLengthExceeded,
                MAXIMUM_EMAIL_ADDRESS_LENGTH + 1,
            ));
        }

        Ok(())
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        if self.cursor.peek_is(expected) {
            self.cursor.advance();
            Ok(())
        } else {
            Err(self.error(EmailAddressParserError::UnexpectedCharacter(expected)))
        }
    }

    fn error(&self, kind: EmailAddressParserError) -> Error {
        Error::new(kind, self.cursor.position())
    }
}
