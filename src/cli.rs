//! CLI definitions for WebHands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// WebHands CLI.
#[derive(Parser)]
#[command(name = "webhands")]
#[command(about = "Element attribute resolution and key-sequence typing over CDP")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    /// Also write daily-rotated logs to this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Translate key sequences offline and print the batches as JSON
    Keys {
        /// Key sequences; `\n`, `\t`, `\b` and `\uXXXX` escapes are decoded
        #[arg(required = true)]
        sequences: Vec<String>,

        /// Keep modifiers held across batches
        #[arg(long)]
        persist: bool,
    },

    /// Resolve an element attribute on a live page
    Attr {
        /// Page to open
        #[arg(long)]
        url: String,

        /// CSS selector of the element
        #[arg(long)]
        selector: String,

        /// Attribute name
        #[arg(long)]
        name: String,
    },

    /// Type key sequences into an element on a live page
    Type {
        /// Page to open
        #[arg(long)]
        url: String,

        /// CSS selector of the element
        #[arg(long)]
        selector: String,

        /// Keep modifiers held across batches (defaults to config)
        #[arg(long)]
        persist: bool,

        /// Release modifiers after each batch, overriding the config
        #[arg(long, conflicts_with = "persist")]
        no_persist: bool,

        /// Key sequences; escapes are decoded as for `keys`
        #[arg(required = true)]
        sequences: Vec<String>,
    },

    /// Load and validate the configuration file
    CheckConfig,
}

/// Pick the effective persist setting: explicit flags win over the config.
pub(crate) fn resolve_persist(persist: bool, no_persist: bool, configured: bool) -> bool {
    match (persist, no_persist) {
        (true, _) => true,
        (_, true) => false,
        _ => configured,
    }
}

/// Decode the backslash escapes accepted on the command line.
///
/// `\uXXXX` takes exactly four hex digits, which is enough for the
/// private-use key codes. Unknown escapes are kept verbatim.
pub(crate) fn decode_escapes(input: &str) -> anyhow::Result<String> {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('b') => out.push('\u{8}'),
            Some('\\') => out.push('\\'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                if hex.len() != 4 {
                    anyhow::bail!("Truncated \\u escape in {:?}", input);
                }
                let code = u32::from_str_radix(&hex, 16)
                    .map_err(|_| anyhow::anyhow!("Invalid \\u escape: \\u{}", hex))?;
                let decoded = char::from_u32(code)
                    .ok_or_else(|| anyhow::anyhow!("Not a character: \\u{}", hex))?;
                out.push(decoded);
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    Ok(out)
}
