#![cfg(test)]
use v6addr_core::Address;

#[test]
fn address_with_a_subnet() {
    let a = Address::parse("a::b/48");
    assert!(a.is_valid());
    assert_eq!(a.subnet().as_deref(), Some("/48"));
    assert!(a.is_in_subnet(&Address::parse("a::b/48")));
    assert!(a.is_in_subnet(&Address::parse("a::c/48")));
}

#[test]
fn zero_length_prefix_contains_everything() {
    let a = Address::parse("::/0");
    assert!(a.is_in_subnet(&Address::parse("ffff:ffff::1/0")));
}

#[test]
fn full_length_prefix_is_exact() {
    let a = Address::parse("2001:db8::1/128");
    assert!(a.is_in_subnet(&Address::parse("2001:DB8:0:0:0:0:0:1/128")));
    assert!(!a.is_in_subnet(&Address::parse("2001:db8::2/128")));
}

#[test]
fn mismatched_or_missing_lengths_are_different_subnets() {
    let a = Address::parse("2001:db8::1/32");
    assert!(!a.is_in_subnet(&Address::parse("2001:db8::2/48")));
    assert!(!a.is_in_subnet(&Address::parse("2001:db8::2")));
}

#[test]
fn out_of_range_prefix_is_invalid() {
    let a = Address::parse("2001:db8::1/129");
    assert!(!a.is_valid());
    assert_eq!(a.subnet(), None);
    assert!(!a.is_in_subnet(&a));
}

#[test]
fn subnet_bounds() {
    let a = Address::parse("2001:db8:1234:5678::9/48");
    assert_eq!(a.start_address().unwrap().to_string(), "2001:db8:1234::");
    assert_eq!(
        a.end_address().unwrap().to_string(),
        "2001:db8:1234:ffff:ffff:ffff:ffff:ffff"
    );
}
