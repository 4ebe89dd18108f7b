use crate::error::{MarketError, Result};
use crate::history::Ohlcv;
use crate::ticker::Ticker;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

// `chart` schema
#[derive(Deserialize, Serialize, Debug)]
pub struct ChartEnvelope {
    pub chart: ChartResponse,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ChartResponse {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ChartError {
    pub code: String,
    pub description: Option<String>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ChartResult {
    #[serde(default)]
    pub meta: Meta,
    #[serde(rename = "timestamp", default)]
    pub timestamps: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct Meta {
    /// Seconds east of UTC for the exchange.
    #[serde(default)]
    pub gmtoffset: i64,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct Indicators {
    pub quote: Vec<Quote>,
}

/// Columns may carry `null` for halted or not-yet-closed sessions.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct Quote {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<u64>>,
}

/// Unix timestamp shifted to exchange-local time, as a calendar date, e.g.,
/// `1709649000` + `-18000` -> `2024-03-05`
fn local_date(timestamp: i64, gmtoffset: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(timestamp.checked_add(gmtoffset)?, 0).map(|dt| dt.date_naive())
}

impl ChartEnvelope {
    /// Flatten the column-oriented response into rows.
    pub fn into_rows(self, ticker: &Ticker) -> Result<Vec<Ohlcv>> {
        if let Some(error) = self.chart.error {
            return Err(MarketError::Rejected {
                ticker: ticker.to_string(),
                description: error.description.unwrap_or(error.code),
            });
        }

        let base = match self.chart.result.and_then(|r| r.into_iter().next()) {
            Some(base) => base,
            None => return Err(MarketError::NoData(ticker.to_string())),
        };
        let offset = base.meta.gmtoffset;
        let quote = base.indicators.quote.into_iter().next().unwrap_or_default();

        let rows = base
            .timestamps
            .iter()
            .zip(quote.open.iter())
            .zip(quote.high.iter())
            .zip(quote.low.iter())
            .zip(quote.close.iter())
            .zip(quote.volume.iter())
            .filter_map(|(((((ts, open), high), low), close), volume)| {
                let row = Ohlcv {
                    date: local_date(*ts, offset)?,
                    open: (*open)?,
                    high: (*high)?,
                    low: (*low)?,
                    close: (*close)?,
                    volume: (*volume)?,
                };
                Some(row)
            })
            .collect::<Vec<_>>();

        let dropped = base.timestamps.len() - rows.len();
        if dropped > 0 {
            log::warn!("[{ticker}] dropped {dropped} incomplete price row(s)");
        }

        if rows.is_empty() {
            return Err(MarketError::NoData(ticker.to_string()));
        }
        Ok(rows)
    }
}
