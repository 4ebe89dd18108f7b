use crate::error::{MarketError, Result};
use crate::history::PriceHistory;
use crate::provider::MarketData;
use crate::ticker::{Period, Ticker};
use std::collections::BTreeMap;
use std::fmt;

/// A ticker bound to the provider that serves it.
pub struct Stock<'p, P> {
    ticker: Ticker,
    provider: &'p P,
}

impl<'p, P: MarketData> Stock<'p, P> {
    /// Uppercase `ticker` and bind it to `provider`.
    ///
    /// Malformed symbols fail here; symbols the provider doesn't know fail on
    /// the first [`history`](Self::history) call.
    pub fn resolve(provider: &'p P, ticker: &str) -> Result<Self> {
        Ok(Self {
            ticker: ticker.parse()?,
            provider,
        })
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Fetch daily rows covering `period`; an empty answer is [`MarketError::NoData`].
    pub async fn history(&self, period: Period) -> Result<PriceHistory> {
        let rows = self.provider.history(&self.ticker, period).await?;
        if rows.is_empty() {
            return Err(MarketError::NoData(self.ticker.to_string()));
        }
        Ok(PriceHistory::new(self.ticker.clone(), period, rows))
    }
}

impl<P> Clone for Stock<'_, P> {
    fn clone(&self) -> Self {
        Self {
            ticker: self.ticker.clone(),
            provider: self.provider,
        }
    }
}

impl<P> fmt::Debug for Stock<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stock").field("ticker", &self.ticker).finish()
    }
}

pub type Stocks<'p, P> = BTreeMap<String, Stock<'p, P>>;
pub type Histories = BTreeMap<String, PriceHistory>;

/// Resolve & fetch every ticker, one after another.
///
/// Keys are the tickers as given. The first failure aborts the batch.
pub async fn resolve_all<'p, P, S>(
    provider: &'p P,
    tickers: &[S],
    period: Period,
) -> Result<(Stocks<'p, P>, Histories)>
where
    P: MarketData,
    S: AsRef<str>,
{
    resolve_all_with(provider, tickers, period, |key, history| {
        log::debug!("[{key}] fetched {} rows", history.len());
    })
    .await
}

/// Same as [`resolve_all`], calling `on_fetched` after each ticker lands.
pub async fn resolve_all_with<'p, P, S, F>(
    provider: &'p P,
    tickers: &[S],
    period: Period,
    mut on_fetched: F,
) -> Result<(Stocks<'p, P>, Histories)>
where
    P: MarketData,
    S: AsRef<str>,
    F: FnMut(&str, &PriceHistory),
{
    let mut stocks = BTreeMap::new();
    let mut histories = BTreeMap::new();
    for ticker in tickers {
        let key = ticker.as_ref().to_string();
        let stock = Stock::resolve(provider, &key)?;
        let history = stock.history(period).await?;
        on_fetched(&key, &history);
        stocks.insert(key.clone(), stock);
        histories.insert(key, history);
    }
    Ok((stocks, histories))
}
