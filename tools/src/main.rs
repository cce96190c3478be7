use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codec::CodecLimits;
use registry::Registry;
use wavecode_tools::{decode_report, preview_report, registry_report};

#[derive(Parser)]
#[command(
    name = "wavecode-tools",
    version,
    about = "wavecode save code inspection tools"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fully decode a save code into structured JSON.
    Decode {
        /// The save code text.
        code: String,
        /// Maximum inventory entries to accept.
        #[arg(long, default_value_t = CodecLimits::default().max_items)]
        max_items: usize,
        /// Maximum debt entries to accept.
        #[arg(long, default_value_t = CodecLimits::default().max_debts)]
        max_debts: usize,
    },
    /// Preview a save code the way the import dialog would.
    Preview {
        /// The save code text.
        code: String,
    },
    /// Dump the registry tables and their digest.
    Registry,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let registry = Registry::standard();

    let report = match cli.command {
        Command::Decode {
            code,
            max_items,
            max_debts,
        } => {
            let limits = CodecLimits {
                max_items,
                max_debts,
            };
            decode_report(&registry, &limits, &code)
                .with_context(|| "failed to decode the save code")?
        }
        Command::Preview { code } => preview_report(&registry, &code),
        Command::Registry => registry_report(&registry),
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
