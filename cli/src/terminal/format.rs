use crate::terminal::colors;
use colored::*;
use v6addr_core::{Address, AddressError, SixToFour, Teredo};

pub type Detail = (String, ColoredString);

/// Short labels for the special ranges an address falls in.
pub fn address_type_str(address: &Address) -> &'static str {
    if address.is_loopback() {
        return "Loopback";
    }
    if address.is_link_local() {
        return "Link-local";
    }
    if address.is_multicast() {
        return "Multicast";
    }
    if address.is_teredo() {
        return "Teredo";
    }
    if address.is_6to4() {
        return "6to4";
    }
    "Unicast"
}

pub fn forms_to_key_value_pair(address: &Address) -> Result<Vec<Detail>, AddressError> {
    Ok(vec![
        form("Correct", address.correct_form()?, colors::IPV6_ADDR),
        form("Canonical", address.canonical_form()?, colors::IPV6_ADDR),
        form("IPv4 tail", address.v4_form()?, colors::IPV4_ADDR),
        form("Decimal", address.decimal()?, colors::TEXT_DEFAULT),
        form("Binary", address.binary_zero_pad()?, colors::BITS),
        form("UNC", address.microsoft_transcription()?, colors::TEXT_DEFAULT),
    ])
}

pub fn suffixes_to_key_value_pair(address: &Address) -> Vec<Detail> {
    let mut details = Vec::new();
    if let Some(subnet) = address.subnet() {
        details.push(form("Subnet", subnet, colors::IPV6_PREFIX));
    }
    if let (Some(start), Some(end)) = (address.start_address(), address.end_address()) {
        details.push(form("First", start.to_string(), colors::IPV6_ADDR));
        details.push(form("Last", end.to_string(), colors::IPV6_ADDR));
    }
    if let Some(zone) = address.zone() {
        details.push(form("Zone", zone, colors::ZONE));
    }
    details
}

pub fn teredo_to_key_value_pair(teredo: &Teredo) -> Vec<Detail> {
    vec![
        form("Prefix", teredo.prefix.clone(), colors::IPV6_PREFIX),
        form("Server", teredo.server4.to_string(), colors::IPV4_ADDR),
        form("Flags", teredo.flags_bits(), colors::BITS),
        form("UDP port", teredo.udp_port.to_string(), colors::TEXT_DEFAULT),
        form("Client", teredo.client4.to_string(), colors::IPV4_ADDR),
    ]
}

pub fn six_to_four_to_key_value_pair(six_to_four: &SixToFour) -> Vec<Detail> {
    vec![
        form("Prefix", six_to_four.prefix.clone(), colors::IPV6_PREFIX),
        form("Gateway", six_to_four.gateway.to_string(), colors::IPV4_ADDR),
    ]
}

fn form(key: &str, value: String, color: Color) -> Detail {
    (key.to_string(), value.color(color))
}
