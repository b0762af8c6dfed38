//! Email address value types.

mod address;
mod domain;

pub use address::{EmailAddress, Warning};
pub use domain::EmailDomain;
