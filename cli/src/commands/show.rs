use anyhow::Context;
use colored::*;
use tracing::warn;
use v6addr_core::Address;

use crate::config::Config;
use crate::terminal::{colors, format, print};

pub fn show(raw: &str, cfg: &Config) -> anyhow::Result<()> {
    let address = Address::parse(raw);

    print::header("address", cfg.quiet);
    print::aligned_line("Input", raw.color(colors::PRIMARY));

    if !address.is_valid() {
        for error in address.errors() {
            warn!("{error}");
        }
        address
            .validate()
            .with_context(|| format!("'{raw}' is not a valid IPv6 address"))?;
    }

    print::aligned_line("Type", format::address_type_str(&address));
    print::aligned_line("Correct", yes_no(address.is_correct()));
    print::aligned_line("Canonical", yes_no(address.is_canonical()));

    print::header("representations", cfg.quiet);
    print::as_tree_one_level(format::forms_to_key_value_pair(&address)?);

    if cfg.quiet < 2 {
        print_details(&address, cfg);
    }

    print::end_of_program(cfg.quiet);
    Ok(())
}

fn print_details(address: &Address, cfg: &Config) {
    let suffixes = format::suffixes_to_key_value_pair(address);
    if !suffixes.is_empty() {
        print::header("suffixes", cfg.quiet);
        print::as_tree_one_level(suffixes);
    }

    if let Some(teredo) = address.teredo() {
        print::header("teredo", cfg.quiet);
        print::as_tree_one_level(format::teredo_to_key_value_pair(&teredo));
    }

    if let Some(six_to_four) = address.six_to_four() {
        print::header("6to4", cfg.quiet);
        print::as_tree_one_level(format::six_to_four_to_key_value_pair(&six_to_four));
    }
}

fn yes_no(value: bool) -> ColoredString {
    if value { "yes".green() } else { "no".bright_black() }
}
