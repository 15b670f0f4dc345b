use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logging flags shared by every subcommand. Logs go to stderr; stdout
/// carries the results.
#[derive(clap::Args, Debug, Clone)]
pub struct TracingArgs {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Write logs as JSON lines
    #[arg(long = "json-logs", global = true)]
    pub json_logs: bool,
}

impl TracingArgs {
    pub fn level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Install the global subscriber. `RUST_LOG` takes precedence over `-v`.
    ///
    /// # Panics
    ///
    /// Panics if a global subscriber has already been set.
    pub fn init_tracing(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{0},poker_primer={0}", self.level())));
        let registry = tracing_subscriber::registry().with(filter);

        if self.json_logs {
            registry
                .with(fmt::layer().with_writer(std::io::stderr).json())
                .init();
        } else {
            registry
                .with(fmt::layer().with_writer(std::io::stderr).compact())
                .init();
        }
    }
}
