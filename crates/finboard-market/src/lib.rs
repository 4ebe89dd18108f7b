//! Stock helpers for the dashboard: fetch a price history, then derive the
//! numbers and the chart shown on the page.
//!
//! ```rust,no_run
//! use finboard_market::prelude::*;
//!
//! # async fn run() -> finboard_market::Result<()> {
//! let yahoo = YahooFinance::new("Mozilla/5.0")?;
//! let stock = Stock::resolve(&yahoo, "aapl")?;
//! let history = stock.history(Period::default()).await?;
//!
//! println!("{}", current_price(&history)?);
//! println!("{:?}", change(&history)?);
//! let figure = candlestick_chart(&history, stock.ticker().as_str())?;
//! # Ok(())
//! # }
//! ```
pub mod chart;
pub mod display;
pub mod error;
pub mod history;
pub mod provider;
pub mod stock;
pub mod ticker;
pub mod yahoo;

pub use crate::error::{MarketError, Result};

pub mod prelude {
    pub use crate::chart::{candlestick_chart, Figure};
    pub use crate::display::{change, current_price, ohlc_summary, Change, Icon, OhlcSummary, Tone};
    pub use crate::history::{Ohlcv, PriceHistory};
    pub use crate::provider::MarketData;
    pub use crate::stock::{resolve_all, resolve_all_with, Stock};
    pub use crate::ticker::{Period, Ticker};
    pub use crate::yahoo::YahooFinance;
}
