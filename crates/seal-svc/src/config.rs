//! Configuration loading and validation for the service.
//!
//! Values come from three layers, later layers winning: an optional
//! configuration file, environment variables, and the command line. The
//! process exits with a clear error message if any value is invalid.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "seal-svc", about = "HTTP encrypt/decrypt service")]
pub struct Cli {
    /// Address the HTTP server listens on (overrides file and environment).
    #[arg(long)]
    pub addr: Option<String>,

    /// Path to an optional configuration file; absence is non-fatal.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
}

/// Validated service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Socket address the HTTP server binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Keyphrase length in bytes; selects the AES security level.
    #[serde(default = "default_key_len")]
    pub key_len: usize,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_listen_addr() -> String {
    "0.0.0.0:4000".into()
}
fn default_key_len() -> usize {
    32
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from the file (if present), the
    /// environment, and the CLI.
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be parsed or fails validation.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(&cli.config).required(false))
            .add_source(config::Environment::default())
            .build()
            .context("failed to build configuration")?;

        let mut c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        if let Some(addr) = &cli.addr {
            c.listen_addr = addr.clone();
        }

        c.validate()?;
        Ok(c)
    }

    /// Returns `true` if the configuration file at `path` exists.
    pub fn file_present(path: &str) -> bool {
        Path::new(path).exists()
    }

    /// Parse the listen address into a bindable [`SocketAddr`].
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.listen_addr
            .parse()
            .with_context(|| format!("invalid listen address: {}", self.listen_addr))
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    fn validate(&self) -> Result<()> {
        if !matches!(self.key_len, 16 | 24 | 32) {
            anyhow::bail!("KEY_LEN must be 16, 24, or 32 bytes, got {}", self.key_len);
        }
        self.socket_addr()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            listen_addr: default_listen_addr(),
            key_len: default_key_len(),
            log_level: default_log_level(),
        }
    }

    #[test]
    fn defaults_are_correct() {
        assert_eq!(default_listen_addr(), "0.0.0.0:4000");
        assert_eq!(default_key_len(), 32);
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn default_config_validates() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_key_len() {
        for key_len in [0, 8, 20, 48] {
            let cfg = Config {
                key_len,
                ..base_config()
            };
            assert!(cfg.validate().is_err(), "key_len {key_len} should fail");
        }
    }

    #[test]
    fn validate_rejects_unparseable_addr() {
        let cfg = Config {
            listen_addr: ":4000".into(),
            ..base_config()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn cli_addr_overrides_config() {
        let cli = Cli {
            addr: Some("127.0.0.1:9999".into()),
            config: "does-not-exist.toml".into(),
        };
        let cfg = Config::load(&cli).unwrap();
        assert_eq!(cfg.listen_addr, "127.0.0.1:9999");
    }
}
