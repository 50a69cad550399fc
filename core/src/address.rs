//! # IPv6 Address Model
//!
//! [`Address`] is built once from a textual notation and never changes.
//! Parsing always succeeds; whether the notation was valid is answered by
//! [`Address::is_valid`] and, in more detail, [`Address::errors`].
//!
//! Supported notations:
//! * Full or elided groups: `2001:db8:0:0:1:0:0:1`, `2001:db8::1:0:0:1`.
//! * An embedded IPv4 tail: `::ffff:192.168.0.1`.
//! * A prefix length: `2001:db8::/32`.
//! * A zone id: `fe80::1%eth0`.
//!
//! Rendering an invalid address yields the first recorded [`AddressError`]
//! instead of a string. Questions that don't apply (a Teredo decomposition of
//! a non-Teredo address, containment without prefix lengths) answer `None`
//! or `false`.

pub mod groups;
pub mod notation;
pub mod render;
pub mod subnet;
pub mod teredo;
pub mod validate;
pub mod value;

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::error::AddressError;
use groups::GROUPS;
use notation::Notation;
use teredo::{SixToFour, Teredo};

/// Suffix used by Windows for IPv6 literals in UNC paths.
const MICROSOFT_LITERAL_SUFFIX: &str = ".ipv6-literal.net";

/// A parsed IPv6 notation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    raw: String,
    body: String,
    groups: Option<[u16; GROUPS]>,
    subnet: Option<u8>,
    zone: Option<String>,
    elisions: usize,
    v4_tail: Option<Ipv4Addr>,
    errors: Vec<AddressError>,
}

impl Address {
    /// Parses `raw`. Never fails; check [`Address::is_valid`].
    pub fn parse(raw: &str) -> Self {
        let notation = Notation::split(raw);
        let expansion = groups::expand(notation.body);
        let errors = validate::verdict(&notation, &expansion);

        Self {
            raw: raw.to_string(),
            body: notation.body.to_string(),
            groups: expansion.groups.ok(),
            subnet: notation.subnet,
            zone: notation.zone.map(str::to_string),
            elisions: expansion.elisions,
            v4_tail: expansion.v4_tail,
            errors,
        }
    }

    /// A valid address holding `value`, written in canonical form.
    pub fn from_value(value: u128) -> Self {
        Self::parse(&render::canonical(&value::from_value(value)))
    }

    /// The notation exactly as supplied.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Every reason this notation is invalid, empty when valid.
    pub fn errors(&self) -> &[AddressError] {
        &self.errors
    }

    /// The first reason this notation is invalid.
    pub fn validate(&self) -> Result<(), AddressError> {
        match self.errors.first() {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    /// Whether the address part was written in correct form (case aside).
    pub fn is_correct(&self) -> bool {
        self.groups()
            .is_some_and(|groups| validate::is_correct(&self.body, &groups))
    }

    /// Whether the address part was written in canonical form.
    pub fn is_canonical(&self) -> bool {
        self.groups()
            .is_some_and(|groups| validate::is_canonical(&self.body, &groups))
    }

    /// The eight groups, when valid.
    pub fn groups(&self) -> Option<[u16; GROUPS]> {
        if self.is_valid() { self.groups } else { None }
    }

    /// The 128-bit magnitude, when valid.
    pub fn value(&self) -> Option<u128> {
        self.groups().map(|groups| value::to_value(&groups))
    }

    /// The prefix length as written, e.g. `/48`.
    pub fn subnet(&self) -> Option<String> {
        self.subnet.map(|len| format!("/{len}"))
    }

    pub fn subnet_len(&self) -> Option<u8> {
        self.subnet
    }

    /// The zone as written, e.g. `%eth0`.
    pub fn zone(&self) -> Option<String> {
        self.zone.as_ref().map(|zone| format!("%{zone}"))
    }

    pub fn zone_id(&self) -> Option<&str> {
        self.zone.as_deref()
    }

    /// Number of `::` markers in the notation.
    pub fn elisions(&self) -> usize {
        self.elisions
    }

    /// The dotted-quad tail, if the notation had one.
    pub fn v4_tail(&self) -> Option<Ipv4Addr> {
        self.v4_tail
    }

    pub fn to_std(&self) -> Option<Ipv6Addr> {
        self.value().map(Ipv6Addr::from)
    }

    fn checked_groups(&self) -> Result<[u16; GROUPS], AddressError> {
        self.validate()?;
        self.groups.ok_or(AddressError::Empty)
    }

    /// `2001:db8::1:0:0:1`
    pub fn correct_form(&self) -> Result<String, AddressError> {
        Ok(render::correct(&self.checked_groups()?))
    }

    /// `2001:0db8:0000:0000:0001:0000:0000:0001`
    pub fn canonical_form(&self) -> Result<String, AddressError> {
        Ok(render::canonical(&self.checked_groups()?))
    }

    /// `2001:db8::1:0:0.0.0.1`
    pub fn v4_form(&self) -> Result<String, AddressError> {
        Ok(render::v4(&self.checked_groups()?))
    }

    /// `08193:03512:00000:00000:00001:00000:00000:00001`
    pub fn decimal(&self) -> Result<String, AddressError> {
        Ok(render::decimal(&self.checked_groups()?))
    }

    /// The 128 bits as binary digits, most significant first.
    pub fn binary_zero_pad(&self) -> Result<String, AddressError> {
        let groups = self.checked_groups()?;
        Ok(render::binary(value::to_value(&groups)))
    }

    /// The leading prefix bits in binary; all 128 bits without a prefix.
    pub fn mask(&self) -> Result<String, AddressError> {
        let mut bits = self.binary_zero_pad()?;
        bits.truncate(usize::from(self.subnet.unwrap_or(128)));
        Ok(bits)
    }

    /// `2001-db8--1-0-0-1.ipv6-literal.net`, with `%` written as `s`.
    pub fn microsoft_transcription(&self) -> Result<String, AddressError> {
        let mut literal = self.correct_form()?.replace(':', "-");
        if let Some(zone) = &self.zone {
            literal.push('s');
            literal.push_str(zone);
        }
        literal.push_str(MICROSOFT_LITERAL_SUFFIX);
        Ok(literal)
    }

    /// Whether both addresses carry the same prefix length and agree on
    /// that many leading bits.
    pub fn is_in_subnet(&self, other: &Address) -> bool {
        let (Some(a), Some(b)) = (self.value(), other.value()) else {
            return false;
        };

        match (self.subnet, other.subnet) {
            (Some(len), Some(other_len)) if len == other_len => subnet::same_prefix(a, b, len),
            _ => false,
        }
    }

    /// First address of the subnet.
    pub fn start_address(&self) -> Option<Address> {
        let len = self.subnet?;
        self.value()
            .map(|value| Self::from_value(subnet::network(value, len)))
    }

    /// Last address of the subnet.
    pub fn end_address(&self) -> Option<Address> {
        let len = self.subnet?;
        self.value()
            .map(|value| Self::from_value(subnet::last(value, len)))
    }

    /// `::1`
    pub fn is_loopback(&self) -> bool {
        self.value() == Some(1)
    }

    /// `ff00::/8`
    pub fn is_multicast(&self) -> bool {
        self.groups().is_some_and(|groups| groups[0] >> 8 == 0xff)
    }

    /// `fe80::/10`
    pub fn is_link_local(&self) -> bool {
        self.groups()
            .is_some_and(|groups| groups[0] & 0xffc0 == 0xfe80)
    }

    /// `2001:0000::/32`
    pub fn is_teredo(&self) -> bool {
        self.groups().is_some_and(|groups| teredo::is_teredo(&groups))
    }

    /// `2002::/16`
    pub fn is_6to4(&self) -> bool {
        self.groups().is_some_and(|groups| teredo::is_6to4(&groups))
    }

    pub fn teredo(&self) -> Option<Teredo> {
        self.groups().and_then(|groups| Teredo::decode(&groups))
    }

    pub fn six_to_four(&self) -> Option<SixToFour> {
        self.groups().and_then(|groups| SixToFour::decode(&groups))
    }
}

impl From<&str> for Address {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    /// Strict parsing: unlike [`Address::parse`], rejects invalid notations.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let address = Self::parse(s);
        address.validate()?;
        Ok(address)
    }
}

impl From<Ipv6Addr> for Address {
    fn from(addr: Ipv6Addr) -> Self {
        Self::from_value(u128::from(addr))
    }
}

impl fmt::Display for Address {
    /// The correct form followed by the zone and the prefix length; the raw
    /// notation when invalid.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Ok(correct) = self.correct_form() else {
            return f.write_str(&self.raw);
        };

        f.write_str(&correct)?;
        if let Some(zone) = self.zone() {
            f.write_str(&zone)?;
        }
        if let Some(subnet) = self.subnet() {
            f.write_str(&subnet)?;
        }
        Ok(())
    }
}
