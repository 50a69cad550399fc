#![cfg(test)]
use v6addr_core::Address;

const SAME_ADDRESS: &[&str] = &[
    "2001:db8:0:0:1:0:0:1",
    "2001:0db8:0:0:1:0:0:1",
    "2001:db8::1:0:0:1",
    "2001:db8::0:1:0:0:1",
    "2001:0db8::1:0:0:1",
    "2001:db8:0:0:1::1",
    "2001:db8:0000:0:1::1",
    "2001:DB8:0:0:1::1",
];

/// Every notation of 2001:db8::1:0:0:1 renders identically.
#[test]
fn different_notations_render_the_same() {
    for raw in SAME_ADDRESS {
        let a = Address::parse(raw);
        assert_eq!(a.correct_form().unwrap(), "2001:db8::1:0:0:1", "{raw}");
        assert_eq!(
            a.canonical_form().unwrap(),
            "2001:0db8:0000:0000:0001:0000:0000:0001",
            "{raw}"
        );
        assert_eq!(a.v4_form().unwrap(), "2001:db8::1:0:0.0.0.1", "{raw}");
        assert_eq!(
            a.decimal().unwrap(),
            "08193:03512:00000:00000:00001:00000:00000:00001",
            "{raw}"
        );
        assert_eq!(
            a.binary_zero_pad().unwrap(),
            concat!(
                "0010000000000001000011011011100000000000000000000000000000000000",
                "0000000000000001000000000000000000000000000000000000000000000001"
            ),
            "{raw}"
        );
    }
}

#[test]
fn only_the_compressed_notation_is_correct() {
    let correct: Vec<&str> = SAME_ADDRESS
        .iter()
        .copied()
        .filter(|raw| Address::parse(raw).is_correct())
        .collect();
    assert_eq!(correct, ["2001:db8::1:0:0:1"]);
}

#[test]
fn correct_address() {
    let a = Address::parse("a::b");
    assert!(!a.raw().chars().any(|c| c.is_ascii_uppercase()));
    assert!(a.is_correct());
    assert_eq!(a.correct_form().unwrap(), "a::b");
}

#[test]
fn canonical_address() {
    let a = Address::parse("000a:0000:0000:0000:0000:0000:0000:000b");
    assert_eq!(a.raw().len(), 39);
    assert!(a.is_canonical());
    assert_eq!(
        a.canonical_form().unwrap(),
        "000a:0000:0000:0000:0000:0000:0000:000b"
    );
}

/*************************************************************
                 Fixtures from the RFC 4291 era
**************************************************************/

#[test]
fn well_known_correct_forms() {
    let cases = [
        ("2001:0000:4136:e378:8000:63bf:3fff:fdd2", "2001:0:4136:e378:8000:63bf:3fff:fdd2"),
        ("2001::CE49:7601:E866:EFFF:62C3:FFFE", "2001:0:ce49:7601:e866:efff:62c3:fffe"),
        ("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff", "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"),
        ("2608:af09:30:0:0:0:0:134", "2608:af09:30::134"),
        ("1080:0:0:0:8:800:200c:417a", "1080::8:800:200c:417a"),
        ("0:1:2:3:4:5:6:7", "0:1:2:3:4:5:6:7"),
        ("7:6:5:4:3:2:1:0", "7:6:5:4:3:2:1:0"),
        ("0:0:0:0:0:0:0:0", "::"),
        ("0:0:0:0:1:0:0:0", "::1:0:0:0"),
        ("ffff::", "ffff::"),
    ];

    for (raw, expected) in cases {
        assert_eq!(Address::parse(raw).correct_form().unwrap(), expected, "{raw}");
    }
}

#[test]
fn embedded_ipv4_forms() {
    let a = Address::parse("::ffff:192.168.0.1");
    assert!(a.is_valid());
    assert_eq!(a.correct_form().unwrap(), "::ffff:c0a8:1");
    assert_eq!(a.v4_form().unwrap(), "::ffff:192.168.0.1");
    assert_eq!(
        a.canonical_form().unwrap(),
        "0000:0000:0000:0000:0000:ffff:c0a8:0001"
    );
}
