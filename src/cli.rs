//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};
use parrot::build_info;

/// Relay an editor prompt or search string to an HTTP API and print the text.
#[derive(Debug, Parser)]
#[command(
    name = "parrot",
    version = build_info::VERSION,
    long_version = Box::leak(build_info::cli_version_text().into_boxed_str()) as &'static str,
    after_help = build_info::HELP_BUILD_METADATA
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to config file (default: ./parrot.toml or ~/.config/parrot/parrot.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Display the response in a new tmux window instead of stdout.
    #[arg(long = "tmux", global = true)]
    pub tmux: bool,

    /// Override the configured request timeout.
    #[arg(long = "timeout", value_name = "SECS", global = true)]
    pub timeout: Option<u64>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// POST a prompt to a generateContent endpoint and print the model text.
    Ask {
        /// Endpoint URL, e.g. the provider's :generateContent URL.
        endpoint: String,
        /// Free-text prompt to send.
        prompt: String,
    },
    /// GET a URL template with the parameter substituted at its `{}` marker.
    Get {
        /// URL template containing one `{}` marker.
        template: String,
        /// Parameter substituted into the template, form-encoded.
        param: String,
    },
}
