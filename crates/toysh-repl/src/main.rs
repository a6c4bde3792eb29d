//! toysh entry point.
//!
//! Boot the toy machine and start the shell:
//! ```bash
//! cargo run -p toysh-repl -- --no-boot-delay
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use toysh_repl::ReplConfig;

/// A toy operating system shell over an in-memory filesystem.
#[derive(Debug, Parser)]
#[command(name = "toysh", version)]
struct Cli {
    /// Read configuration from this file instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the boot screen.
    #[arg(long)]
    no_boot: bool,

    /// Show the boot screen without pausing.
    #[arg(long)]
    no_boot_delay: bool,

    /// Fail on unresolvable working path segments.
    #[arg(long)]
    strict: bool,

    /// Let chmod accept any integer mode and keep its low three bits.
    #[arg(long)]
    lenient_chmod: bool,

    /// Host name shown in the prompt.
    #[arg(long)]
    hostname: Option<String>,
}

impl Cli {
    fn apply(self, mut config: ReplConfig) -> ReplConfig {
        if self.no_boot {
            config.boot = false;
        }
        if self.no_boot_delay {
            config.boot_pacing = 0.0;
        }
        if self.strict {
            config.strict = true;
        }
        if self.lenient_chmod {
            config.lenient_chmod = true;
        }
        if let Some(hostname) = self.hostname {
            config.hostname = hostname;
        }
        config
    }
}

fn main() -> Result<()> {
    // Log to stderr so it never mixes with shell output (respects RUST_LOG)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = ReplConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let config = cli.apply(config);

    tracing::debug!(?config, "starting");

    toysh_repl::run(config)
}
