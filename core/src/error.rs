use thiserror::Error;

/// Broad category of an [`AddressError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The notation itself is malformed.
    Syntax,
    /// The notation is well formed but a value lies outside its domain.
    Domain,
}

/// Reasons an IPv6 notation was rejected.
///
/// Parsing never fails outright: these are recorded on the
/// [`Address`](crate::Address) and surface through
/// [`Address::errors`](crate::Address::errors) and the rendering methods.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum AddressError {
    #[error("address is empty")]
    Empty,
    #[error("group '{0}' contains a non-hexadecimal character")]
    InvalidCharacter(String),
    #[error("group '{0}' has more than 4 hex digits")]
    GroupTooLong(String),
    #[error("empty group (stray ':')")]
    EmptyGroup,
    #[error("expected 8 groups, found {0}")]
    WrongGroupCount(usize),
    #[error("found {0} elisions ('::'), at most one is allowed")]
    TooManyElisions(usize),
    #[error("invalid embedded IPv4 address '{0}'")]
    InvalidIpv4(String),
    #[error("embedded IPv4 address '{0}' must be the final component")]
    MisplacedIpv4(String),
    #[error("invalid subnet length '{0}'")]
    InvalidSubnet(String),
    #[error("subnet length {0} is outside 0..=128")]
    SubnetOutOfRange(u64),
    #[error("zone id after '%' is empty")]
    EmptyZone,
}

impl AddressError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SubnetOutOfRange(_) => ErrorKind::Domain,
            _ => ErrorKind::Syntax,
        }
    }
}
