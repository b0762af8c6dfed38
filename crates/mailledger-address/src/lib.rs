//! # mailledger-address
//!
//! An RFC 5322 email address parser and address value types.
//!
//! ## Features
//!
//! - **Hand-written grammar**: Dot-string and quoted-string local parts,
//!   quoted pairs, RFC 5321 domains; address literals are recognized and
//!   rejected
//! - **Exact error positions**: Every error carries the character offset
//!   where parsing stopped, for highlighting in input fields
//! - **Configurable strictness**: Independent toggles for quoting, empty
//!   local parts and length limits
//! - **Warnings instead of errors**: Borderline addresses that the config
//!   lets through are flagged on the resulting [`EmailAddress`]
//!
//! ## Quick Start
//!
//! ```ignore
//! use mailledger_address::{EmailAddressParserConfig, parse_email_address};
//!
//! let address = parse_email_address("alice@Domain.Example", EmailAddressParserConfig::LIMITED)?;
//! assert_eq!(address.local_part(), "alice");
//! assert_eq!(address.normalized_address(), "alice@domain.example");
//!
//! let err = parse_email_address("alice@domain.example#", EmailAddressParserConfig::LIMITED)
//!     .unwrap_err();
//! assert_eq!(err.position(), 20);
//! assert_eq!(err.message(), "Expected end of input");
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Parser configuration and presets
//! - [`parser`]: The grammar engine
//! - [`types`]: `EmailAddress`, `EmailDomain` and warnings

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod config;
mod error;
mod ext;
pub mod parser;
mod syntax;
pub mod types;

pub use config::{ConfigBuilder, EmailAddressParserConfig};
pub use error::{EmailAddressParserError, Error, Result};
pub use ext::EmailAddressExt;
pub use parser::{EmailAddressParser, parse_email_address};
pub use types::{EmailAddress, EmailDomain, Warning};

/// Maximum length of a local part in characters (RFC 5321, section 4.5.3.1.1).
pub const MAXIMUM_LOCAL_PART_LENGTH: usize = 64;

/// Maximum length of an address in characters (RFC 5321 path limit minus the angle brackets).
pub const MAXIMUM_EMAIL_ADDRESS_LENGTH: usize = 254;
