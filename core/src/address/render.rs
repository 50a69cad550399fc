//! Textual renderings of a fully expanded address.

use std::net::Ipv4Addr;

use super::groups::GROUPS;
use super::value::word;

/// Shortest zero run worth collapsing into `::`.
const MIN_ELIDED_RUN: usize = 2;

/// `2001:0db8:0000:0000:0001:0000:0000:0001`
pub fn canonical(groups: &[u16; GROUPS]) -> String {
    groups
        .iter()
        .map(|g| format!("{g:04x}"))
        .collect::<Vec<_>>()
        .join(":")
}

/// `2001:db8::1:0:0:1`
pub fn correct(groups: &[u16; GROUPS]) -> String {
    compress(groups)
}

/// `2001:db8::1:0:0.0.0.1`
pub fn v4(groups: &[u16; GROUPS]) -> String {
    let head = compress(&groups[..GROUPS - 2]);
    let tail = Ipv4Addr::from(word(groups, GROUPS - 2));

    if head.ends_with(':') {
        format!("{head}{tail}")
    } else {
        format!("{head}:{tail}")
    }
}

/// `08193:03512:00000:00000:00001:00000:00000:00001`
pub fn decimal(groups: &[u16; GROUPS]) -> String {
    groups
        .iter()
        .map(|g| format!("{g:05}"))
        .collect::<Vec<_>>()
        .join(":")
}

/// All 128 bits, most significant first.
pub fn binary(value: u128) -> String {
    format!("{value:0128b}")
}

/// Lowercase groups without leading zeros, with the leftmost longest run
/// of at least [`MIN_ELIDED_RUN`] zero groups collapsed.
fn compress(groups: &[u16]) -> String {
    let join = |part: &[u16]| {
        part.iter()
            .map(|g| format!("{g:x}"))
            .collect::<Vec<_>>()
            .join(":")
    };

    match longest_zero_run(groups) {
        Some((start, len)) if len >= MIN_ELIDED_RUN => {
            let head = join(&groups[..start]);
            let tail = join(&groups[start + len..]);
            format!("{head}::{tail}")
        }
        _ => join(groups),
    }
}

/// `(start, len)` of the leftmost longest run of zero groups.
fn longest_zero_run(groups: &[u16]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut run_start = None;

    for (i, &group) in groups.iter().enumerate() {
        if group == 0 {
            let start = *run_start.get_or_insert(i);
            let len = i + 1 - start;
            if best.is_none_or(|(_, best_len)| len > best_len) {
                best = Some((start, len));
            }
        } else {
            run_start = None;
        }
    }

    best
}
