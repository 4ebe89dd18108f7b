use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use finboard_market::{prelude::*, yahoo};
use finboard_secrets::{export, materialize, ProcessEnv, CREDENTIALS, MARKERS};
use std::path::PathBuf;

use cli::{Commands, Dotenv, SecretsCommand, StockCommand};
use config::Config;

mod cli;
mod config;
mod ui;

fn preprocess(source: &Dotenv) {
    // grant access to .env
    match source {
        Dotenv::Skip => {}
        Dotenv::Discover => {
            dotenv::dotenv().ok();
        }
        Dotenv::File(path) => {
            dotenv::from_path(path).ok();
        }
    }

    // initialise logger
    env_logger::init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // the write target is fixed by the shell, before any dotenv file loads
    let env_file = Config::from_env().env_file;
    let source = cli.command.dotenv(&env_file);
    preprocess(&source);
    log::info!("Command line input recorded: {cli:#?}");
    log::debug!("dotenv source: {source:?}");

    let config = Config::from_env();
    log::debug!("{config:#?}");

    // cli framework:
    // "> finboard <COMMAND>"
    match cli.command {
        // "> finboard secrets [write export]"
        Commands::Secrets(command) => match command {
            SecretsCommand::Write { path } => {
                let path = path.unwrap_or(env_file);
                let written = materialize::write_env_file(&ProcessEnv, &CREDENTIALS, &path)?;
                log::info!("{written} credential(s) written to {}", path.display());
            }

            SecretsCommand::Export => {
                let mut stdout = std::io::stdout().lock();
                export::export(&ProcessEnv, &MARKERS, &mut stdout)?;
            }
        },

        // "> finboard stock [quote chart batch]"
        Commands::Stock(command) => {
            let default_period = config.period()?;
            let client = yahoo::build_client(&config.user_agent)?;
            let provider = YahooFinance::with_client(client, &config.chart_url);

            match command {
                StockCommand::Quote { ticker, period } => {
                    let period = period.period.unwrap_or(default_period);
                    quote(&provider, &ticker, period).await?;
                }

                StockCommand::Chart {
                    ticker,
                    period,
                    out,
                } => {
                    let period = period.period.unwrap_or(default_period);
                    chart(&provider, &ticker, period, out).await?;
                }

                StockCommand::Batch { tickers, period } => {
                    let period = period.period.unwrap_or(default_period);
                    batch(&provider, &tickers, period).await?;
                }
            }
        }
    }

    Ok(())
}

async fn quote<P: MarketData>(provider: &P, ticker: &str, period: Period) -> Result<()> {
    let stock = Stock::resolve(provider, ticker)?;
    let history = stock
        .history(period)
        .await
        .with_context(|| format!("failed to fetch {} over {period}", stock.ticker()))?;

    println!(
        "{} {}",
        stock.ticker().as_str().bold(),
        current_price(&history)?
    );
    println!("{}", ui::change_line(&change(&history)?));
    println!("{}", ui::ohlc_table(&ohlc_summary(&history)?));
    Ok(())
}

async fn chart<P: MarketData>(
    provider: &P,
    ticker: &str,
    period: Period,
    out: Option<PathBuf>,
) -> Result<()> {
    let stock = Stock::resolve(provider, ticker)?;
    let history = stock
        .history(period)
        .await
        .with_context(|| format!("failed to fetch {} over {period}", stock.ticker()))?;
    let figure = candlestick_chart(&history, stock.ticker().as_str())?;

    let out = out.unwrap_or_else(|| PathBuf::from(format!("./charts/{}.json", stock.ticker())));
    if let Some(dir) = out.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir).await?;
    }
    tokio::fs::write(&out, figure.to_json()?)
        .await
        .with_context(|| format!("failed to write {}", out.display()))?;

    log::info!("[{}] chart written to {}", stock.ticker(), out.display());
    println!("{}", out.display());
    Ok(())
}

async fn batch<P: MarketData>(provider: &P, tickers: &[String], period: Period) -> Result<()> {
    let pb = ui::single_pb(tickers.len() as u64);
    let fetched = resolve_all_with(provider, tickers, period, |key, _| {
        pb.set_message(key.to_string());
        pb.inc(1);
    })
    .await;
    pb.finish_and_clear();
    let (_stocks, histories) = fetched?;

    for ticker in tickers {
        let history = &histories[ticker];
        println!(
            "{:<10} {:>14}  {}",
            ticker.to_uppercase().bold(),
            current_price(history)?,
            ui::change_line(&change(history)?)
        );
    }
    Ok(())
}
