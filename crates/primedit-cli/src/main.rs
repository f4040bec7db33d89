//! primedit entry point

use std::path::PathBuf;

use clap::Parser;
use primedit_cli::{DragScript, ReplayError, replay};
use primedit_core::EditConfig;

#[derive(Parser)]
#[command(name = "primedit")]
#[command(about = "Replay scripted scale drags against an in-memory scene")]
struct Args {
    /// Drag script (RON)
    script: PathBuf,
    /// Edit configuration (RON); defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), ReplayError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "primedit_core=debug,primedit_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EditConfig::load(path)?,
        None => EditConfig::default(),
    };

    tracing::info!("Replaying {}", args.script.display());
    let script = DragScript::load(&args.script)?;
    let outcome = replay(&script, config)?;

    tracing::info!(
        "{} steps applied, {} skipped",
        outcome.applied,
        outcome.skipped
    );

    let entity = ron::ser::to_string_pretty(&outcome.entity, ron::ser::PrettyConfig::default())
        .map_err(|e| ReplayError::Serialize(e.to_string()))?;
    println!("{entity}");
    Ok(())
}
