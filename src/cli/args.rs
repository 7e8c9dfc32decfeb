use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Show firewall policies of a virtual domain from a FortiGate configuration export",
    override_usage = "fgpolicy [OPTIONS] <CONFIG> <VDOM> [ <POLICY_ID> | <FROM_ZONE> <TO_ZONE> ]"
)]
pub struct Args {
    /// Path to display settings file (TOML)
    #[arg(long = "settings", value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Disable ANSI colors in the table output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Configuration export to read
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Virtual domain whose policies are loaded
    #[arg(value_name = "VDOM")]
    pub vdom: String,

    /// Policy id, or source and destination zone; further values are ignored
    #[arg(value_name = "SELECTOR", required = true, num_args = 1..)]
    pub selectors: Vec<String>,
}
