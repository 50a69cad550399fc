use anyhow::Context;
use tracing::{info, warn};
use v6addr_core::Address;

use crate::config::Config;
use crate::terminal::{format, print};

pub fn subnet(raw: &str, other_raw: &str, cfg: &Config) -> anyhow::Result<()> {
    let address = parse_valid(raw)?;
    let other = parse_valid(other_raw)?;

    print::header("subnet", cfg.quiet);
    print::tree_head(&address.to_string());
    print::as_tree_one_level(format::suffixes_to_key_value_pair(&address));

    if address.subnet_len() != other.subnet_len() {
        warn!("Prefix lengths differ, the addresses are treated as different subnets");
    }

    if address.is_in_subnet(&other) {
        info!("{other} is in the same subnet as {address}");
    } else {
        warn!("{other} is not in the same subnet as {address}");
    }

    print::end_of_program(cfg.quiet);
    Ok(())
}

fn parse_valid(raw: &str) -> anyhow::Result<Address> {
    raw.parse::<Address>()
        .with_context(|| format!("'{raw}' is not a valid IPv6 address"))
}
