// src/logging.rs
use anyhow::{Result, anyhow};
use clap::Args;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Format;

#[derive(Args, Debug, Clone, Default)]
pub struct LoggingOpts {
    /// A level of verbosity, and can be used multiple times
    #[arg(short, long, action = clap::ArgAction::Count, global(true))]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, global(true), conflicts_with = "verbose")]
    pub quiet: bool,
}

impl LoggingOpts {
    #[inline]
    #[must_use]
    pub const fn to_level_filter(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Installs the global subscriber. `RUST_LOG` wins over the flags when set.
    ///
    /// # Errors
    ///
    /// Fails if a global subscriber is already installed.
    #[inline]
    pub fn configure_logging(&self) -> Result<()> {
        let filter = EnvFilter::builder()
            .with_default_directive(self.to_level_filter().into())
            .from_env_lossy();

        tracing_subscriber::fmt()
            .event_format(Format::default().with_target(false).compact())
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|err| anyhow!("setting default subscriber failed: {err}"))
    }
}
