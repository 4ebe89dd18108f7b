//! Yahoo! Finance v8 `chart` endpoint.
pub mod schema;
pub mod www;

use crate::error::{MarketError, Result};
use crate::history::Ohlcv;
use crate::provider::MarketData;
use crate::ticker::{Period, Ticker};
use reqwest::Client;
use schema::ChartEnvelope;

pub use www::DEFAULT_CHART_URL;

/// Build the HTTP client; Yahoo refuses requests without a `User-Agent`.
pub fn build_client(user_agent: &str) -> Result<Client> {
    let client = reqwest::ClientBuilder::new()
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

#[derive(Debug, Clone)]
pub struct YahooFinance {
    client: Client,
    base_url: String,
}

impl YahooFinance {
    pub fn new(user_agent: &str) -> Result<Self> {
        Ok(Self::with_client(build_client(user_agent)?, DEFAULT_CHART_URL))
    }

    /// Point at a different `chart` endpoint, e.g., a proxy or a local mock.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl MarketData for YahooFinance {
    async fn history(&self, ticker: &Ticker, period: Period) -> Result<Vec<Ohlcv>> {
        let url = www::price_url(&self.base_url, ticker, period);
        log::debug!("[{ticker}] GET {url}");

        // unknown symbols come back as a 404 with a `chart.error` body
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        match serde_json::from_slice::<ChartEnvelope>(&body) {
            Ok(envelope) => {
                let rows = envelope.into_rows(ticker)?;
                log::trace!("[{ticker}] {} rows over {period}", rows.len());
                Ok(rows)
            }
            Err(_) if !status.is_success() => Err(MarketError::Rejected {
                ticker: ticker.to_string(),
                description: format!("HTTP {status}"),
            }),
            Err(e) => Err(e.into()),
        }
    }
}
