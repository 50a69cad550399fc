use anyhow::Context;
use tracing::warn;
use v6addr_core::Address;

use crate::config::Config;
use crate::terminal::{format, print};

pub fn teredo(raw: &str, cfg: &Config) -> anyhow::Result<()> {
    let address: Address = raw
        .parse()
        .with_context(|| format!("'{raw}' is not a valid IPv6 address"))?;

    let Some(teredo) = address.teredo() else {
        warn!("{address} is not a Teredo address (expected prefix 2001:0000::/32)");
        return Ok(());
    };

    print::header("teredo", cfg.quiet);
    print::tree_head(&address.to_string());
    print::as_tree_one_level(format::teredo_to_key_value_pair(&teredo));
    print::end_of_program(cfg.quiet);
    Ok(())
}
