use chrono::NaiveDate;
use serde::Serialize;

// ── Daily price point ─────────────────────────────────────────────────────────

/// One trading day. The indicator fields start out empty and are filled in by
/// the enrichers in `crate::indicators`; they never feed back into OHLCV.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    pub ma20: Option<f64>,
    pub ma60: Option<f64>,
    pub rsi: Option<f64>,
    /// Set on every point by `with_macd_like`; `None` only on bare bars.
    pub macd: Option<f64>,
}

impl PricePoint {
    /// A bare OHLCV bar with no indicators attached yet.
    pub fn bar(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
            ma20: None,
            ma60: None,
            rsi: None,
            macd: None,
        }
    }
}

// ── Reference data ────────────────────────────────────────────────────────────

/// Static fundamentals for a supported symbol. `price` seeds the generator.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerProfile {
    pub symbol: &'static str,
    pub name: &'static str,
    pub sector: &'static str,
    pub price: f64,
    pub pe: f64,
    pub pb: f64,
    pub market_cap: &'static str,
    pub roe: &'static str,
    pub revenue: &'static str,
    pub net_income: &'static str,
    pub debt_ratio: &'static str,
    pub dividend_yield: Option<&'static str>, // None when no dividend is paid
    pub eps: &'static str,
    pub beta: &'static str,
}

/// One row of the quarterly results table (revenue / net income in 100M units).
#[derive(Debug, Clone, PartialEq)]
pub struct QuarterlyReport {
    pub quarter: &'static str,
    pub revenue: f64,
    pub net_income: f64,
    pub eps: f64,
}
