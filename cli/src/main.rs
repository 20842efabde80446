//! Terminal front-end for the Lista de Compras API.
//!
//! Owns everything the deterministic core refuses to: argument parsing,
//! logging, the ureq transport, and the interactive screen loop.

mod screens;
mod transport;

use anyhow::Context;
use clap::Parser;
use compras_core::ListaClient;
use tracing_subscriber::EnvFilter;

/// Terminal client for the Lista de Compras shopping-list API.
#[derive(Parser, Debug)]
#[command(name = "compras", version, about = "Shopping-list client for the /ListaCompras API")]
struct Args {
    /// Base URL of the remote collection resource.
    #[arg(long, env = "COMPRAS_BASE_URL", default_value = "http://localhost:3000")]
    base_url: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let client = ListaClient::new(&args.base_url);
    let transport = transport::Transport::new();

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let stdout = std::io::stdout();
    let mut output = stdout.lock();

    screens::run(&client, &transport, &mut input, &mut output).context("terminal session failed")
}
