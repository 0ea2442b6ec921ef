#![forbid(unsafe_code)]
use anyhow::Result;
use clap::Parser;
use hebdo::{run, RandomPicker, StdConsole};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Planning hebdomadaire interactif (stdin/stdout, sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long)]
    log: bool,

    /// Graine RNG fixe pour un déroulé reproductible (rejeu, tests)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let mut console = StdConsole::stdio();
    let mut picker = match cli.seed {
        Some(seed) => RandomPicker::seeded(seed),
        None => RandomPicker::from_entropy(),
    };

    run(&mut console, &mut picker)?;
    Ok(())
}
