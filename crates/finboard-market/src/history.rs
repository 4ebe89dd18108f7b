use crate::error::{MarketError, Result};
use crate::ticker::{Period, Ticker};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ohlcv {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Daily OHLCV rows for a single ticker, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    ticker: Ticker,
    period: Period,
    rows: Vec<Ohlcv>,
}

impl PriceHistory {
    pub fn new(ticker: Ticker, period: Period, mut rows: Vec<Ohlcv>) -> Self {
        rows.sort_by_key(|row| row.date);
        Self {
            ticker,
            period,
            rows,
        }
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn rows(&self) -> &[Ohlcv] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Most recent row.
    pub fn last(&self) -> Result<&Ohlcv> {
        self.rows.last().ok_or(MarketError::InsufficientRows {
            needed: 1,
            found: 0,
        })
    }

    /// `(previous, latest)`.
    pub fn last_two(&self) -> Result<(&Ohlcv, &Ohlcv)> {
        match self.rows.as_slice() {
            [.., prev, last] => Ok((prev, last)),
            rows => Err(MarketError::InsufficientRows {
                needed: 2,
                found: rows.len(),
            }),
        }
    }

    pub fn closes(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|row| row.close)
    }

    /// Trailing mean of close over `window` rows; `None` until the window fills.
    pub fn rolling_mean(&self, window: usize) -> Vec<Option<f64>> {
        if window == 0 {
            return vec![None; self.rows.len()];
        }

        let closes: Vec<f64> = self.closes().collect();
        let mut sum = 0.0;
        closes
            .iter()
            .enumerate()
            .map(|(i, close)| {
                sum += close;
                if i >= window {
                    sum -= closes[i - window];
                }
                (i + 1 >= window).then(|| sum / window as f64)
            })
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::history;
    use super::*;

    #[test]
    fn rows_are_sorted_by_date() {
        let mut rows = history(&[1.0, 2.0, 3.0]).rows().to_vec();
        rows.reverse();
        let h = PriceHistory::new("X".parse().unwrap(), Period::OneMonth, rows);
        assert_eq!(h.closes().collect::<Vec<_>>(), [1.0, 2.0, 3.0]);
        assert_eq!(h.last().unwrap().close, 3.0);
    }

    #[test]
    fn short_histories_fail_loudly() {
        let empty = history(&[]);
        assert!(matches!(
            empty.last(),
            Err(MarketError::InsufficientRows { needed: 1, found: 0 })
        ));
        assert!(matches!(
            history(&[5.0]).last_two(),
            Err(MarketError::InsufficientRows { needed: 2, found: 1 })
        ));

        let (prev, last) = history(&[1.0, 2.0, 3.0]).last_two().map(|(p, l)| (p.close, l.close)).unwrap();
        assert_eq!((prev, last), (2.0, 3.0));
    }

    #[test]
    fn rolling_mean_waits_for_a_full_window() {
        let h = history(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(
            h.rolling_mean(3),
            [None, None, Some(2.0), Some(3.0), Some(4.0)]
        );
        assert_eq!(h.rolling_mean(6), vec![None; 5]);
        assert_eq!(h.rolling_mean(0), vec![None; 5]);
    }
}
