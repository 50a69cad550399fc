#![cfg(test)]
use v6addr_core::Address;

const SAMPLES: &[&str] = &[
    "a::b",
    "::",
    "::1",
    "ffff::",
    "2001:db8::1:0:0:1",
    "fedc:ba98:7654:3210:fedc:ba98:7654:3210",
    "2608:af09:30::102a:7b91:c239:baff",
    "1:0:2:0:0:3:0:4",
    "::192.168.0.1",
    "fe80::1%eth0",
    "2001:db8::/32",
];

/// Parsing a canonical form gives back a canonical address.
#[test]
fn canonical_round_trip() {
    for raw in SAMPLES {
        let canonical = Address::parse(raw).canonical_form().unwrap();
        let again = Address::parse(&canonical);
        assert!(again.is_canonical(), "{raw}");
        assert_eq!(again.canonical_form().unwrap(), canonical, "{raw}");
    }
}

#[test]
fn correct_form_is_idempotent() {
    for raw in SAMPLES {
        let correct = Address::parse(raw).correct_form().unwrap();
        let again = Address::parse(&correct);
        assert!(again.is_correct(), "{raw}");
        assert_eq!(again.correct_form().unwrap(), correct, "{raw}");
    }
}

#[test]
fn case_does_not_change_the_value() {
    for raw in SAMPLES {
        let upper = raw.to_ascii_uppercase();
        assert_eq!(Address::parse(raw).value(), Address::parse(&upper).value(), "{raw}");
    }
}

#[test]
fn value_matches_groups() {
    for raw in SAMPLES {
        let a = Address::parse(raw);
        let groups = a.groups().unwrap();
        let expected = groups
            .iter()
            .enumerate()
            .fold(0u128, |acc, (i, &g)| acc | (u128::from(g) << (16 * (7 - i))));
        assert_eq!(a.value(), Some(expected), "{raw}");
        assert_eq!(Address::from_value(expected).groups(), Some(groups), "{raw}");
    }
}
