//! Prefix masks and subnet containment.

/// `len` leading one bits over 128 bits. Lengths above 128 saturate.
pub fn mask_for(len: u8) -> u128 {
    match len {
        0 => 0,
        len if len >= 128 => u128::MAX,
        len => u128::MAX << (128 - u32::from(len)),
    }
}

/// Whether `a` and `b` share their first `len` bits.
pub fn same_prefix(a: u128, b: u128, len: u8) -> bool {
    let mask = mask_for(len);
    a & mask == b & mask
}

/// First address of the `len`-bit prefix containing `value`.
pub fn network(value: u128, len: u8) -> u128 {
    value & mask_for(len)
}

/// Last address of the `len`-bit prefix containing `value`.
pub fn last(value: u128, len: u8) -> u128 {
    value | !mask_for(len)
}
