//! Behavioural tests of the address model through its public API.

mod address;
