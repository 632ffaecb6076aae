//! `seal-svc` — binary entry point.
//!
//! Startup sequence:
//! 1. Parse the CLI and load [`Config`] (optional file + environment).
//! 2. Initialise the tracing subscriber.
//! 3. Generate a fresh keyphrase and build the [`CipherContext`].
//! 4. Build the Axum router and start the HTTP server.
//!
//! The keyphrase is generated anew on every process start and never
//! persisted, so ciphertext from one run is undecryptable by a different
//! run.

mod config;
mod crypto;
mod server;
mod telemetry;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use config::{Cli, Config};
use crypto::CipherContext;
use server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = Config::load(&cli).map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e}");
        e
    })?;

    telemetry::init_telemetry(&cfg.log_level)?;
    if !Config::file_present(&cli.config) {
        info!(path = %cli.config, "no configuration file found, using environment and defaults");
    }
    info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %cfg.listen_addr,
        "seal-svc starting"
    );

    // A fresh key per process run; different runs are not interoperable.
    let keyphrase =
        crypto::keyphrase::generate(cfg.key_len).context("could not generate a keyphrase")?;
    let cipher =
        CipherContext::new(keyphrase.as_bytes()).context("could not construct the cipher")?;

    let state = AppState::new(cipher);
    let router = server::router::build(state);

    let addr = cfg.socket_addr()?;
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
