//! Expands the colon-delimited address body into exactly eight hextets.

use std::net::Ipv4Addr;

use tracing::trace;

use crate::error::AddressError;

/// Number of 16-bit groups in an IPv6 address.
pub const GROUPS: usize = 8;

const ELISION: &str = "::";

/// Result of expanding an address body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub groups: Result<[u16; GROUPS], AddressError>,
    /// Number of `::` markers seen, whether or not expansion succeeded.
    pub elisions: usize,
    /// The dotted-quad tail, when the last 32 bits were written as IPv4.
    pub v4_tail: Option<Ipv4Addr>,
}

/// Expands `body` (no `/prefix` or `%zone`) into eight groups.
///
/// Never panics on malformed input; the failure is carried in
/// [`Expansion::groups`].
pub fn expand(body: &str) -> Expansion {
    let elisions = body.matches(ELISION).count();

    let (groups, v4_tail) = match expand_groups(body, elisions) {
        Ok((groups, v4_tail)) => (Ok(groups), v4_tail),
        Err(e) => (Err(e), None),
    };

    trace!(body, elisions, ?groups, "expanded groups");

    Expansion {
        groups,
        elisions,
        v4_tail,
    }
}

fn expand_groups(
    body: &str,
    elisions: usize,
) -> Result<([u16; GROUPS], Option<Ipv4Addr>), AddressError> {
    if body.is_empty() {
        return Err(AddressError::Empty);
    }
    if elisions > 1 {
        return Err(AddressError::TooManyElisions(elisions));
    }

    let mut groups = [0u16; GROUPS];

    let Some((head, tail)) = body.split_once(ELISION) else {
        let (present, v4_tail) = parse_tokens(body, true)?;
        if present.len() != GROUPS {
            return Err(AddressError::WrongGroupCount(present.len()));
        }
        groups.copy_from_slice(&present);
        return Ok((groups, v4_tail));
    };

    let (head, _) = parse_tokens(head, false)?;
    let (tail, v4_tail) = parse_tokens(tail, true)?;

    // the elision stands for at least one zero group
    let present = head.len() + tail.len();
    if present >= GROUPS {
        return Err(AddressError::WrongGroupCount(present));
    }

    groups[..head.len()].copy_from_slice(&head);
    groups[GROUPS - tail.len()..].copy_from_slice(&tail);

    Ok((groups, v4_tail))
}

/// Parses one side of an elision (or the whole body when there is none).
///
/// A dotted quad is only accepted as the final token of the tail side and
/// contributes two groups.
fn parse_tokens(
    part: &str,
    v4_allowed: bool,
) -> Result<(Vec<u16>, Option<Ipv4Addr>), AddressError> {
    let mut groups = Vec::with_capacity(GROUPS);
    let mut v4_tail = None;

    if part.is_empty() {
        return Ok((groups, v4_tail));
    }

    let tokens: Vec<&str> = part.split(':').collect();
    let last = tokens.len() - 1;

    for (i, token) in tokens.into_iter().enumerate() {
        if token.contains('.') {
            if !v4_allowed || i != last {
                return Err(AddressError::MisplacedIpv4(token.to_string()));
            }
            let v4 = parse_dotted_quad(token)?;
            let bits = u32::from(v4);
            groups.push((bits >> 16) as u16);
            groups.push(bits as u16);
            v4_tail = Some(v4);
        } else {
            groups.push(parse_hextet(token)?);
        }
    }

    Ok((groups, v4_tail))
}

/// Parses 1-4 hex digits, either case, no sign.
fn parse_hextet(token: &str) -> Result<u16, AddressError> {
    if token.is_empty() {
        return Err(AddressError::EmptyGroup);
    }
    if !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AddressError::InvalidCharacter(token.to_string()));
    }
    if token.len() > 4 {
        return Err(AddressError::GroupTooLong(token.to_string()));
    }

    u16::from_str_radix(token, 16).map_err(|_| AddressError::InvalidCharacter(token.to_string()))
}

fn parse_dotted_quad(token: &str) -> Result<Ipv4Addr, AddressError> {
    token
        .parse::<Ipv4Addr>()
        .map_err(|_| AddressError::InvalidIpv4(token.to_string()))
}
