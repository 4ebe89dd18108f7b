use crate::ticker::{Period, Ticker};

pub const DEFAULT_CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
const INTERVAL: &str = "1d";

pub fn price_url(base: &str, ticker: &Ticker, period: Period) -> String {
    format!(
        "{}/{ticker}?symbol={ticker}&interval={}&range={}&events=div|split|capitalGains",
        base.trim_end_matches('/'),
        INTERVAL,
        period.token(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_carries_ticker_and_range() {
        let ticker: Ticker = "aapl".parse().unwrap();
        assert_eq!(
            price_url("http://localhost:9000/chart/", &ticker, Period::FiveYears),
            "http://localhost:9000/chart/AAPL?symbol=AAPL&interval=1d&range=5y&events=div|split|capitalGains"
        );
    }
}
