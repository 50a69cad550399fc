//! Decomposition of tunnelled addresses.
//!
//! A Teredo address (RFC 4380) is laid out as:
//!
//! ```text
//! | 32 bits  | 32 bits   | 16 bits | 16 bits  | 32 bits   |
//! | 2001:0   | server v4 | flags   | ~port    | ~client v4|
//! ```
//!
//! The port and the client address are stored complemented.
//!
//! A 6to4 address (RFC 3056) is `2002:` followed by the gateway's IPv4
//! address.

use std::fmt;
use std::net::Ipv4Addr;

use super::groups::GROUPS;
use super::value::word;

/// The well-known Teredo prefix `2001:0000::/32`.
pub const TEREDO_PREFIX: [u16; 2] = [0x2001, 0x0000];

/// The 6to4 prefix `2002::/16`.
pub const SIX_TO_FOUR_PREFIX: u16 = 0x2002;

/// Fields encoded in a Teredo address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Teredo {
    /// The first 32 bits as two zero-padded groups, `2001:0000`.
    pub prefix: String,
    /// The Teredo server.
    pub server4: Ipv4Addr,
    pub flags: u16,
    /// The client's mapped UDP port, already un-obfuscated.
    pub udp_port: u16,
    /// The client's mapped IPv4 address, already un-obfuscated.
    pub client4: Ipv4Addr,
}

impl Teredo {
    /// Decodes `groups`, or `None` when they don't carry the Teredo prefix.
    pub fn decode(groups: &[u16; GROUPS]) -> Option<Self> {
        if !is_teredo(groups) {
            return None;
        }

        Some(Self {
            prefix: format!("{:04x}:{:04x}", groups[0], groups[1]),
            server4: Ipv4Addr::from(word(groups, 2)),
            flags: groups[4],
            udp_port: !groups[5],
            client4: Ipv4Addr::from(!word(groups, 6)),
        })
    }

    /// The flags as a 16-character binary string.
    pub fn flags_bits(&self) -> String {
        format!("{:016b}", self.flags)
    }

    /// The cone NAT flag (most significant bit).
    pub fn is_cone(&self) -> bool {
        self.flags & 0x8000 != 0
    }
}

impl fmt::Display for Teredo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "prefix {} server {} flags {} client {}:{}",
            self.prefix,
            self.server4,
            self.flags_bits(),
            self.client4,
            self.udp_port
        )
    }
}

pub fn is_teredo(groups: &[u16; GROUPS]) -> bool {
    groups[..2] == TEREDO_PREFIX
}

/// Fields encoded in a 6to4 address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SixToFour {
    /// The first group, `2002`.
    pub prefix: String,
    /// The 6to4 gateway.
    pub gateway: Ipv4Addr,
}

impl SixToFour {
    pub fn decode(groups: &[u16; GROUPS]) -> Option<Self> {
        if !is_6to4(groups) {
            return None;
        }

        Some(Self {
            prefix: format!("{:04x}", groups[0]),
            gateway: Ipv4Addr::from(word(groups, 1)),
        })
    }
}

pub fn is_6to4(groups: &[u16; GROUPS]) -> bool {
    groups[0] == SIX_TO_FOUR_PREFIX
}
