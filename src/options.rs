use clap::Parser;

/// The register layout is fixed, so there is nothing to configure;
/// clap still provides `--help` and `--version`.
#[derive(Clone, Debug, Parser)]
#[command(version, about = "Register map generator for the MOS 6502 debug stub")]
pub struct Options {}
