#![cfg(test)]
use v6addr_core::{Address, AddressError, ErrorKind};

#[test]
fn invalid_addresses() {
    let invalid = [
        "a:b:c:d:e:f:g:0",                         // invalid characters
        "a:b",                                     // too few groups
        "a::b::c",                                 // too many elisions
        "ffff::ffff::ffff",                        // too many elisions
        "a::g",                                    // invalid characters
        "-1",                                      // an integer, not a group
        "::-1",                                    // an integer, not a group
        "a:aaaaa::",                               // group with too many digits
        "a:a:a:a:a:a:a:a:a",                       // too many groups
        "ffff:",                                   // trailing colon
        "ffgg:ffff:ffff:ffff:ffff:ffff:ffff:ffff", // invalid characters
    ];

    for raw in invalid {
        let a = Address::parse(raw);
        assert!(!a.is_valid(), "{raw}");
        assert!(!a.errors().is_empty(), "{raw}");
        assert!(a.correct_form().is_err(), "{raw}");
    }
}

#[test]
fn v4_in_v6_address() {
    assert!(Address::parse("::192.168.0.1").is_valid());
    assert!(!Address::parse("::192.168.0.256").is_valid());
    assert!(!Address::parse("192.168.0.1::").is_valid());
}

#[test]
fn address_with_a_zone() {
    let a = Address::parse("a::b%abcdefg");
    assert!(a.is_valid());
    assert_eq!(a.zone().as_deref(), Some("%abcdefg"));

    let a = Address::parse("a::b%");
    assert!(!a.is_valid());
    assert_eq!(a.errors(), &[AddressError::EmptyZone]);
}

#[test]
fn reports_why() {
    let a = Address::parse("a:aaaaa::/200");
    assert_eq!(
        a.errors(),
        &[
            AddressError::GroupTooLong("aaaaa".to_string()),
            AddressError::SubnetOutOfRange(200),
        ]
    );
    assert_eq!(a.errors()[1].kind(), ErrorKind::Domain);
    assert_eq!(a.validate(), Err(AddressError::GroupTooLong("aaaaa".to_string())));
}
