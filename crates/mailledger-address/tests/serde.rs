//! Serialization tests (requires the `serde` feature).

#![cfg(feature = "serde")]

use mailledger_address::{EmailAddress, EmailDomain};

#[test]
fn test_address_serializes_as_string() {
    let address = EmailAddress::new("one two", EmailDomain::new("Domain.Example"));

    let json = serde_json::to_string(&address).unwrap();

    assert_eq!(json, r#""\"one two\"@Domain.Example""#);
}

#[test]
fn test_address_deserializes_through_parser() {
    let address: EmailAddress = serde_json::from_str(r#""alice@domain.example""#).unwrap();

    assert_eq!(
        address,
        EmailAddress::new("alice", EmailDomain::new("domain.example"))
    );
}

#[test]
fn test_invalid_address_fails_to_deserialize() {
    let err = serde_json::from_str::<EmailAddress>(r#""user@[192.0.2.1]""#).unwrap_err();

    assert!(err.to_string().contains("Address literals are not supported"));
}

#[test]
fn test_domain_round_trip() {
    let domain = EmailDomain::new("Domain.Example");

    let json = serde_json::to_string(&domain).unwrap();
    let back: EmailDomain = serde_json::from_str(&json).unwrap();

    assert_eq!(json, r#""Domain.Example""#);
    assert_eq!(back.as_str(), "Domain.Example");
}
