use colored::Colorize;
use finboard_market::prelude::{Change, Icon, OhlcSummary, Tone};
use indicatif::{ProgressBar, ProgressStyle};

pub fn single_pb(length: u64) -> ProgressBar {
    let pb = ProgressBar::new(length);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [ {bar:50} ] {pos}/{len} {msg} {spinner}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#|-"),
    );
    pb
}

/// e.g., `▲ $5.00 (10.00%)` in green, `▼ $10.00 (-9.52%)` in red
pub fn change_line(change: &Change) -> String {
    let arrow = match change.icon {
        Icon::ArrowUp => "▲",
        Icon::ArrowDown => "▼",
    };
    let line = format!("{arrow} {} ({}%)", change.amount, change.percent);
    match change.color {
        Tone::Success => line.green().to_string(),
        Tone::Danger => line.red().to_string(),
    }
}

pub fn ohlc_table(summary: &OhlcSummary) -> String {
    format!(
        "{:<10} {:>12} {:>12} {:>12} {:>12} {:>16}\n{:<10} {:>12} {:>12} {:>12} {:>12} {:>16}",
        "Date", "Open", "High", "Low", "Close", "Volume",
        summary.date, summary.open, summary.high, summary.low, summary.close, summary.volume,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(percent: &str, color: Tone, icon: Icon) -> Change {
        Change {
            amount: "$10.00".to_string(),
            percent: percent.to_string(),
            color,
            icon,
        }
    }

    #[test]
    fn change_line_has_arrow_and_percent() {
        colored::control::set_override(false);
        let down = change("-9.52", Tone::Danger, Icon::ArrowDown);
        assert_eq!(change_line(&down), "▼ $10.00 (-9.52%)");
    }

    #[test]
    fn arrow_follows_the_icon() {
        colored::control::set_override(false);
        let mixed = change("10.00", Tone::Danger, Icon::ArrowUp);
        assert_eq!(change_line(&mixed), "▲ $10.00 (10.00%)");
    }

    #[test]
    fn table_has_header_and_row() {
        let summary = OhlcSummary {
            date: "2024-03-05".to_string(),
            open: "$1.00".to_string(),
            high: "$2.00".to_string(),
            low: "$0.50".to_string(),
            close: "$1.50".to_string(),
            volume: "1,000".to_string(),
        };
        let table = ohlc_table(&summary);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Date"));
        assert!(lines[1].starts_with("2024-03-05"));
        assert!(lines[1].ends_with("1,000"));
    }
}
