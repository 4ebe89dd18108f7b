use crate::error::Result;
use crate::history::Ohlcv;
use crate::ticker::{Period, Ticker};
use std::future::Future;

/// A source of daily price history.
///
/// Implementors translate their own wire format into [`Ohlcv`] rows; nothing
/// past this boundary sees provider-specific data.
pub trait MarketData {
    fn history(
        &self,
        ticker: &Ticker,
        period: Period,
    ) -> impl Future<Output = Result<Vec<Ohlcv>>> + Send;
}
