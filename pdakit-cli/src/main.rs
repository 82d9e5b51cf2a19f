use anyhow::Result;
use clap::{Parser, Subcommand};
use pdakit_cli::commands::{self, Report};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pdakit")]
#[command(about = "Derive and inspect account addresses", long_about = None)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a program derived address and its bump seed.
    /// Seeds are text, or prefixed with hex:, pubkey:, u8:, u16:, u32: or u64:
    Find {
        /// Program id (base58)
        #[arg(long, short)]
        program: String,

        seeds: Vec<String>,
    },
    /// Derive a program address from exactly the given seeds
    Create {
        /// Program id (base58)
        #[arg(long, short)]
        program: String,

        seeds: Vec<String>,
    },
    /// Derive an address from a base address, a text seed and an owner
    WithSeed {
        #[arg(long)]
        base: String,

        #[arg(long)]
        seed: String,

        #[arg(long)]
        owner: String,
    },
    /// Check whether an address is on the ed25519 curve
    OnCurve {
        address: String,
    },
    /// SHA-256 over the concatenated arguments
    Hash {
        data: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pdakit=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let report: Report = match &cli.command {
        Commands::Find { program, seeds } => commands::find(program, seeds)?,
        Commands::Create { program, seeds } => commands::create(program, seeds)?,
        Commands::WithSeed { base, seed, owner } => commands::with_seed(base, seed, owner)?,
        Commands::OnCurve { address } => commands::on_curve(address)?,
        Commands::Hash { data } => commands::hash(data),
    };
    tracing::debug!("command produced {:?}", report);

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
