//! `patter` - interactive front end for the Patter engine.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use tracing::{info, info_span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

use patter::repl::{Ending, Repl};
use patter::{Cli, EngineConfig};

fn init_logging(config: &EngineConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("Invalid log filter '{}'", config.log_filter))?;
    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);

    let installed = if config.log_json {
        builder.json().try_init()
    } else {
        builder.with_ansi(false).try_init()
    };
    installed.map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = EngineConfig::load(&cli).context("Failed to read configuration")?;
    init_logging(&config)?;

    let mut engine = config.build_engine().context("Failed to start the engine")?;

    let session_id = Uuid::new_v4();
    let span = info_span!("session", id = %session_id);
    let _guard = span.enter();
    info!("Session started");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let ending = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {:?}", path))?;
            Repl::new(&mut engine)
                .echo_input(true)
                .run(BufReader::new(file), &mut out)?
        }
        None => Repl::new(&mut engine).run(io::stdin().lock(), &mut out)?,
    };

    let farewell = ending == Ending::Farewell;
    info!(turns = engine.state().turn_count, farewell, "Session finished");
    Ok(())
}
