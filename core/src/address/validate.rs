//! Validity, correctness and canonicity verdicts.

use tracing::debug;

use super::groups::{Expansion, GROUPS};
use super::notation::Notation;
use super::render;
use crate::error::AddressError;

/// Every reason the notation is invalid, body errors first.
///
/// An empty list means the address is valid.
pub fn verdict(notation: &Notation<'_>, expansion: &Expansion) -> Vec<AddressError> {
    let mut errors = Vec::new();

    if let Err(e) = &expansion.groups {
        errors.push(e.clone());
    }
    errors.extend(notation.errors.iter().cloned());

    if !errors.is_empty() {
        debug!(body = notation.body, ?errors, "rejected address");
    }

    errors
}

/// Whether `body` is already written in correct form, ignoring case.
pub fn is_correct(body: &str, groups: &[u16; GROUPS]) -> bool {
    body.to_ascii_lowercase() == render::correct(groups)
}

/// Whether `body` is written exactly in canonical form.
pub fn is_canonical(body: &str, groups: &[u16; GROUPS]) -> bool {
    body == render::canonical(groups)
}
