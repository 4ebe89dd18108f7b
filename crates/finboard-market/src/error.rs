use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum MarketError {
    #[error("invalid ticker: {0:?}")]
    InvalidTicker(String),

    #[error("invalid period: {0:?} (expected one of 1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max)")]
    InvalidPeriod(String),

    #[error("[{ticker}] rejected by provider: {description}")]
    Rejected { ticker: String, description: String },

    #[error("[{0}] no price data returned")]
    NoData(String),

    #[error("price history has {found} row(s); {needed} required")]
    InsufficientRows { needed: usize, found: usize },

    #[error("previous close on {date} is zero; percent change is undefined")]
    ZeroPreviousClose { date: chrono::NaiveDate },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MarketError>;
