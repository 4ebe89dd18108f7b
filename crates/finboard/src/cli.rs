use clap::{Args, Parser, Subcommand};
use finboard_market::prelude::Period;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage API credentials.
    #[command(subcommand)]
    Secrets(SecretsCommand),

    /// Price history helpers for the stock dashboard.
    #[command(subcommand)]
    Stock(StockCommand),
}

/// Which dotenv file, if any, a command loads before it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dotenv {
    /// Leave the process environment untouched.
    Skip,
    /// `.env` in the working directory or one of its parents.
    Discover,
    /// Exactly this file.
    File(PathBuf),
}

impl Commands {
    /// `default_env_file` is the `secrets write` target when `--path` is absent.
    pub fn dotenv(&self, default_env_file: &Path) -> Dotenv {
        match self {
            // the exporter reports the raw environment
            Commands::Secrets(SecretsCommand::Export) => Dotenv::Skip,
            // only the target, so other files never leak into it
            Commands::Secrets(SecretsCommand::Write { path }) => {
                Dotenv::File(path.clone().unwrap_or_else(|| default_env_file.to_path_buf()))
            }
            Commands::Stock(_) => Dotenv::Discover,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum SecretsCommand {
    /// Write the known API credentials from the environment into a `.env` file.
    Write {
        /// Target file; overwritten on every run [default: $FINBOARD_ENV_FILE or .env]
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// Print every credential-looking environment variable as JSON.
    Export,
}

#[derive(Subcommand, Debug)]
pub enum StockCommand {
    /// Current price, day-over-day change & latest OHLC row.
    Quote {
        ticker: String,

        #[command(flatten)]
        period: PeriodArg,
    },

    /// Write a candlestick figure (Plotly JSON) with a 20-day moving average.
    Chart {
        ticker: String,

        #[command(flatten)]
        period: PeriodArg,

        /// Output file [default: ./charts/{TICKER}.json]
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Fetch several tickers, one after another, and summarise each.
    Batch {
        #[arg(required = true)]
        tickers: Vec<String>,

        #[command(flatten)]
        period: PeriodArg,
    },
}

#[derive(Args, Debug)]
pub struct PeriodArg {
    /// Lookback: 1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max [default: $FINBOARD_PERIOD or 1y]
    #[arg(long)]
    pub period: Option<Period>,
}
