//! Dashboard-ready strings derived from a [`PriceHistory`].
use crate::error::{MarketError, Result};
use crate::history::PriceHistory;
use serde::{Deserialize, Serialize};

/// Badge colour for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Icon {
    #[serde(rename = "arrow-up")]
    ArrowUp,
    #[serde(rename = "arrow-down")]
    ArrowDown,
}

/// Day-over-day move of the close.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    /// `$` + absolute move, e.g., `$10.00`
    pub amount: String,
    /// Signed percentage of the prior close, without `%`, e.g., `-9.52`
    pub percent: String,
    pub color: Tone,
    pub icon: Icon,
}

/// Latest session, formatted for a one-row table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OhlcSummary {
    pub date: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
}

/// Latest close, e.g., `1,234,567.89`
pub fn current_price(history: &PriceHistory) -> Result<String> {
    let last = history.last()?;
    Ok(group_thousands(&format!("{:.2}", last.close)))
}

/// Move between the last two closes. A flat day counts as up.
pub fn change(history: &PriceHistory) -> Result<Change> {
    let (prev, last) = history.last_two()?;
    if prev.close == 0.0 {
        return Err(MarketError::ZeroPreviousClose { date: prev.date });
    }
    let delta = last.close - prev.close;
    let up = delta >= 0.0;
    Ok(Change {
        amount: dollars(delta.abs()),
        percent: format!("{:.2}", delta / prev.close * 100.0),
        color: if up { Tone::Success } else { Tone::Danger },
        icon: if up { Icon::ArrowUp } else { Icon::ArrowDown },
    })
}

pub fn ohlc_summary(history: &PriceHistory) -> Result<OhlcSummary> {
    let last = history.last()?;
    Ok(OhlcSummary {
        date: last.date.format("%Y-%m-%d").to_string(),
        open: dollars(last.open),
        high: dollars(last.high),
        low: dollars(last.low),
        close: dollars(last.close),
        volume: group_thousands(&last.volume.to_string()),
    })
}

fn dollars(value: f64) -> String {
    format!("${value:.2}")
}

/// Insert `,` every three digits of the integer part, e.g.,
/// `-1234567.89` -> `-1,234,567.89`
fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int, frac) = match unsigned.find('.') {
        Some(i) => unsigned.split_at(i),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, digit) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{sign}{grouped}{frac}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::fixtures::history;
    use chrono::NaiveDate;

    #[test]
    fn drop_is_danger() {
        let c = change(&history(&[100.0, 105.0, 95.0])).unwrap();
        assert_eq!(c.amount, "$10.00");
        assert_eq!(c.percent, "-9.52");
        assert_eq!(c.color, Tone::Danger);
        assert_eq!(c.icon, Icon::ArrowDown);
    }

    #[test]
    fn flat_day_is_success() {
        let c = change(&history(&[100.0, 100.0])).unwrap();
        assert_eq!(c.amount, "$0.00");
        assert_eq!(c.percent, "0.00");
        assert_eq!(c.color, Tone::Success);
        assert_eq!(c.icon, Icon::ArrowUp);
    }

    #[test]
    fn zero_previous_close_has_no_percent() {
        match change(&history(&[5.0, 0.0, 3.0])) {
            Err(MarketError::ZeroPreviousClose { date }) => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn change_serialises_like_the_dashboard_expects() {
        let c = change(&history(&[50.0, 55.0])).unwrap();
        assert_eq!(
            serde_json::to_value(&c).unwrap(),
            serde_json::json!({
                "amount": "$5.00",
                "percent": "10.00",
                "color": "success",
                "icon": "arrow-up",
            })
        );
    }

    #[test]
    fn price_is_grouped() {
        assert_eq!(current_price(&history(&[1.0, 1234567.891])).unwrap(), "1,234,567.89");
        assert_eq!(current_price(&history(&[999.999])).unwrap(), "1,000.00");
        assert_eq!(current_price(&history(&[12.5])).unwrap(), "12.50");
    }

    #[test]
    fn grouping_handles_sign_and_short_numbers() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("-1234567.89"), "-1,234,567.89");
    }

    #[test]
    fn summary_reads_the_last_row() {
        // fixture dates start 2024-03-01, so the 5th row is 2024-03-05
        let s = ohlc_summary(&history(&[10.0, 11.0, 12.0, 13.0, 1500.25])).unwrap();
        assert_eq!(s.date, "2024-03-05");
        assert_eq!(s.open, "$1499.25");
        assert_eq!(s.high, "$1502.25");
        assert_eq!(s.low, "$1498.25");
        assert_eq!(s.close, "$1500.25");
        assert_eq!(s.volume, "5,000");
    }

    #[test]
    fn empty_history_fails_every_helper() {
        let empty = history(&[]);
        for result in [
            current_price(&empty).map(|_| ()),
            change(&empty).map(|_| ()),
            ohlc_summary(&empty).map(|_| ()),
        ] {
            assert!(matches!(result, Err(MarketError::InsufficientRows { .. })));
        }
        assert!(matches!(
            change(&history(&[1.0])),
            Err(MarketError::InsufficientRows { needed: 2, found: 1 })
        ));
    }
}
