//! Candlestick figures in Plotly's JSON figure format.
//!
//! Nothing is drawn here; the caller hands the JSON to `Plotly.newPlot` (or any
//! other consumer of the figure schema).
//! ```json
//! {
//!     "data": [
//!         { "type": "candlestick", "x": ["2024-03-04", ...], "open": [...], ... },
//!         { "type": "scatter", "name": "20 Day MA", "y": [null, ..., 171.3], ... }
//!     ],
//!     "layout": { "title": { "text": "AAPL Stock Price" }, ... }
//! }
//! ```
use crate::error::{MarketError, Result};
use crate::history::PriceHistory;
use serde::{Deserialize, Serialize};

pub const MA_WINDOW: usize = 20;
pub const MA_NAME: &str = "20 Day MA";
pub const MA_COLOR: &str = "orange";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Candlestick(Candlestick),
    Scatter(Scatter),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candlestick {
    pub x: Vec<String>,
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scatter {
    pub x: Vec<String>,
    /// `null` where the series is undefined
    pub y: Vec<Option<f64>>,
    pub name: String,
    pub mode: String,
    pub line: Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub template: Template,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rangeslider: Option<RangeSlider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridcolor: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSlider {
    pub visible: bool,
}

/// Plotly's `template.layout` subset used for the light theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub layout: TemplateLayout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateLayout {
    pub paper_bgcolor: String,
    pub plot_bgcolor: String,
    pub font: Font,
    pub xaxis: Axis,
    pub yaxis: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub color: String,
}

impl Template {
    /// White background with light grey gridlines.
    pub fn light() -> Self {
        let grid = Axis {
            gridcolor: Some("#EBF0F8".to_string()),
            ..Axis::default()
        };
        Self {
            layout: TemplateLayout {
                paper_bgcolor: "white".to_string(),
                plot_bgcolor: "white".to_string(),
                font: Font {
                    color: "#2a3f5f".to_string(),
                },
                xaxis: grid.clone(),
                yaxis: grid,
            },
        }
    }
}

impl Figure {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Candlesticks for every row, overlaid with the 20-period moving average of
/// the close.
pub fn candlestick_chart(history: &PriceHistory, ticker: &str) -> Result<Figure> {
    if history.is_empty() {
        return Err(MarketError::InsufficientRows {
            needed: 1,
            found: 0,
        });
    }

    let rows = history.rows();
    let dates: Vec<String> = rows
        .iter()
        .map(|row| row.date.format("%Y-%m-%d").to_string())
        .collect();

    let candles = Candlestick {
        x: dates.clone(),
        open: rows.iter().map(|row| row.open).collect(),
        high: rows.iter().map(|row| row.high).collect(),
        low: rows.iter().map(|row| row.low).collect(),
        close: rows.iter().map(|row| row.close).collect(),
    };

    let moving_average = Scatter {
        x: dates,
        y: history.rolling_mean(MA_WINDOW),
        name: MA_NAME.to_string(),
        mode: "lines".to_string(),
        line: Line {
            color: MA_COLOR.to_string(),
        },
    };

    let layout = Layout {
        title: Title {
            text: format!("{ticker} Stock Price"),
        },
        xaxis: Axis {
            rangeslider: Some(RangeSlider { visible: false }),
            ..Axis::default()
        },
        yaxis: Axis {
            title: Some(Title {
                text: "Price".to_string(),
            }),
            ..Axis::default()
        },
        template: Template::light(),
    };

    Ok(Figure {
        data: vec![Trace::Candlestick(candles), Trace::Scatter(moving_average)],
        layout,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::fixtures::history;

    fn closes(n: usize) -> Vec<f64> {
        (1..=n).map(|i| i as f64).collect()
    }

    #[test]
    fn figure_overlays_moving_average() {
        let figure = candlestick_chart(&history(&closes(25)), "AAPL").unwrap();
        assert_eq!(figure.data.len(), 2);

        match &figure.data[0] {
            Trace::Candlestick(c) => {
                assert_eq!(c.x.len(), 25);
                assert_eq!(c.x[0], "2024-03-01");
                assert_eq!(c.close[24], 25.0);
            }
            other => panic!("expected candlestick, got {other:?}"),
        }

        match &figure.data[1] {
            Trace::Scatter(s) => {
                assert_eq!(s.name, "20 Day MA");
                assert_eq!(s.line.color, "orange");
                assert!(s.y[..19].iter().all(Option::is_none));
                // mean of 1..=20
                assert_eq!(s.y[19], Some(10.5));
                assert_eq!(s.y[24], Some(15.5));
            }
            other => panic!("expected scatter, got {other:?}"),
        }
    }

    #[test]
    fn layout_matches_dashboard_style() {
        let figure = candlestick_chart(&history(&closes(3)), "MSFT").unwrap();
        let json: serde_json::Value = serde_json::from_str(&figure.to_json().unwrap()).unwrap();

        assert_eq!(json["layout"]["title"]["text"], "MSFT Stock Price");
        assert_eq!(json["layout"]["yaxis"]["title"]["text"], "Price");
        assert_eq!(json["layout"]["xaxis"]["rangeslider"]["visible"], false);
        assert_eq!(json["layout"]["template"]["layout"]["plot_bgcolor"], "white");
        assert_eq!(json["data"][0]["type"], "candlestick");
        assert_eq!(json["data"][1]["type"], "scatter");
        assert!(json["data"][1]["y"][0].is_null());
    }

    #[test]
    fn empty_history_has_no_chart() {
        assert!(matches!(
            candlestick_chart(&history(&[]), "AAPL"),
            Err(MarketError::InsufficientRows { needed: 1, found: 0 })
        ));
    }
}
