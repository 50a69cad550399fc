//! # v6addr core
//!
//! Parses, validates and re-renders IPv6 address notations.
//!
//! ```
//! use v6addr_core::Address;
//!
//! let a = Address::parse("2001:DB8:0:0:1::1");
//! assert!(a.is_valid());
//! assert_eq!(a.correct_form().unwrap(), "2001:db8::1:0:0:1");
//! assert_eq!(
//!     a.canonical_form().unwrap(),
//!     "2001:0db8:0000:0000:0001:0000:0000:0001"
//! );
//! ```
//!
//! ## Modules
//! * **[`address`]**: The [`Address`] type and the stages it is built from
//!   (notation splitting, group expansion, validation, rendering, subnets,
//!   tunnel decoding).
//! * **[`error`]**: Why a notation was rejected.

pub mod address;
pub mod error;

pub use address::Address;
pub use address::teredo::{SixToFour, Teredo};
pub use error::{AddressError, ErrorKind};
