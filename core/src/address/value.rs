//! Conversion between the eight hextets and the 128-bit magnitude.

use super::groups::GROUPS;

/// Big-endian concatenation of `groups`.
pub fn to_value(groups: &[u16; GROUPS]) -> u128 {
    groups
        .iter()
        .fold(0u128, |acc, &group| (acc << 16) | u128::from(group))
}

/// Splits `value` back into eight hextets, most significant first.
pub fn from_value(value: u128) -> [u16; GROUPS] {
    let mut groups = [0u16; GROUPS];
    for (i, group) in groups.iter_mut().enumerate() {
        *group = (value >> (16 * (GROUPS - 1 - i))) as u16;
    }
    groups
}

/// The 32-bit word made of groups `hi` and `hi + 1`.
pub fn word(groups: &[u16; GROUPS], hi: usize) -> u32 {
    (u32::from(groups[hi]) << 16) | u32::from(groups[hi + 1])
}
