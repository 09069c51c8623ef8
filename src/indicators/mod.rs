//! Indicator enrichers.
//!
//! Each stage takes the whole series by value and hands it back with one more
//! set of derived fields filled in. Stages only ever read `close`; OHLCV is
//! left untouched.
//!
//! Order used by the pipeline: moving averages → RSI → MACD.

pub mod macd;
pub mod moving_average;
pub mod rsi;

pub use self::macd::with_macd_like;
pub use self::moving_average::with_moving_averages;
pub use self::rsi::{with_rsi, DEFAULT_RSI_PERIOD};

use crate::error::Result;
use crate::models::PricePoint;

/// Run every enricher in pipeline order.
pub fn enrich(series: Vec<PricePoint>, rsi_period: usize) -> Result<Vec<PricePoint>> {
    let series = with_moving_averages(series);
    let series = with_rsi(series, rsi_period)?;
    Ok(with_macd_like(series))
}
