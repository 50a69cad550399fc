//! Splits a raw notation into its address body and the optional
//! `/prefix` and `%zone` suffixes.

use tracing::trace;

use crate::error::AddressError;

/// Longest prefix length an IPv6 subnet can carry.
pub const MAX_PREFIX_LEN: u8 = 128;

/// The pieces of a raw notation, before any group is looked at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notation<'a> {
    pub body: &'a str,
    pub subnet: Option<u8>,
    pub zone: Option<&'a str>,
    pub errors: Vec<AddressError>,
}

impl<'a> Notation<'a> {
    /// Splits `raw` on the first `/`, then the remainder on the first `%`.
    ///
    /// A malformed suffix is remembered in `errors` and left unset; the body
    /// is always returned.
    pub fn split(raw: &'a str) -> Self {
        let mut errors = Vec::new();

        let (rest, subnet) = match raw.split_once('/') {
            Some((rest, prefix_str)) => match parse_prefix_len(prefix_str) {
                Ok(len) => (rest, Some(len)),
                Err(e) => {
                    errors.push(e);
                    (rest, None)
                }
            },
            None => (raw, None),
        };

        let (body, zone) = match rest.split_once('%') {
            Some((body, "")) => {
                errors.push(AddressError::EmptyZone);
                (body, None)
            }
            Some((body, zone)) => (body, Some(zone)),
            None => (rest, None),
        };

        trace!(raw, body, ?subnet, ?zone, "split notation");

        Self {
            body,
            subnet,
            zone,
            errors,
        }
    }
}

/// Parses the text after `/` as a decimal prefix length in `0..=128`.
fn parse_prefix_len(s: &str) -> Result<u8, AddressError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddressError::InvalidSubnet(s.to_string()));
    }

    // all digits: the only way `parse` fails now is overflow
    let len: u64 = s.parse().unwrap_or(u64::MAX);
    if len > u64::from(MAX_PREFIX_LEN) {
        return Err(AddressError::SubnetOutOfRange(len));
    }

    Ok(len as u8)
}
