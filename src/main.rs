use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use mos_regmap::{options::Options, target_xml};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let _options = Options::parse();

    // Diagnostics go to stderr; stdout carries only the generated table.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    target_xml::write_register_map(&mut out)?;
    out.flush()?;

    Ok(())
}
