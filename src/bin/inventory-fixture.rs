//! Generate a large static Ansible inventory on stdout.
//!
//! Speaks just enough of the dynamic-inventory protocol to be used as an
//! inventory script: it always prints the full `--list` document, hostvars
//! included, so no per-host callbacks are needed.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use vault_password_client::inventory;

#[derive(Parser)]
#[command(
    name = "inventory-fixture",
    about = "Emit a generated Ansible inventory as JSON",
    version
)]
struct Cli {
    /// Number of hosts to generate.
    #[arg(long, default_value_t = inventory::DEFAULT_HOST_COUNT)]
    hosts: usize,

    /// Dynamic-inventory protocol flag, accepted for compatibility.
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    let Cli { hosts, list: _list } = Cli::parse();
    let document = inventory::build(hosts);

    let mut out = io::stdout().lock();
    serde_json::to_writer(&mut out, &document)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
