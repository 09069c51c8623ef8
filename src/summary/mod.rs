//! Scalar statistics derived from an enriched series for display.

use crate::models::PricePoint;
use serde::Serialize;

/// Placeholder 52-week band: a fixed spread around the current price, not a
/// rolling extremum over real history.
const BAND_HIGH_RATIO: f64 = 1.28;
const BAND_LOW_RATIO: f64 = 0.72;

/// Padding applied to the chart's y-axis range.
const CHART_LOW_PAD: f64 = 0.995;
const CHART_HIGH_PAD: f64 = 1.005;

pub const RSI_UNAVAILABLE: &str = "--";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Summary {
    pub current_price: f64,
    pub previous_price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub is_up: bool,
    pub week52_high: f64,
    pub week52_low: f64,
    pub latest_rsi: Option<f64>,
}

impl Summary {
    /// Project the headline numbers. Missing points fall back to `base_price`.
    pub fn project(series: &[PricePoint], base_price: f64) -> Self {
        let n = series.len();
        let current_price = series.last().map(|p| p.close).unwrap_or(base_price);
        let previous_price = n
            .checked_sub(2)
            .and_then(|i| series.get(i))
            .map(|p| p.close)
            .unwrap_or(base_price);

        let change = current_price - previous_price;

        Self {
            current_price,
            previous_price,
            change,
            change_percent: change / previous_price * 100.0,
            is_up: change >= 0.0,
            week52_high: current_price * BAND_HIGH_RATIO,
            week52_low: current_price * BAND_LOW_RATIO,
            latest_rsi: series.iter().rev().find_map(|p| p.rsi),
        }
    }

    /// RSI as shown in the metric card: one decimal, or `--`.
    pub fn rsi_label(&self) -> String {
        match self.latest_rsi {
            Some(v) => format!("{v:.1}"),
            None => RSI_UNAVAILABLE.to_string(),
        }
    }
}

// ── Chart window ──────────────────────────────────────────────────────────────

/// The trailing `window` points the chart shows.
pub fn display_window(series: &[PricePoint], window: usize) -> &[PricePoint] {
    &series[series.len().saturating_sub(window)..]
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ChartBounds {
    pub min: f64,
    pub max: f64,
}

impl ChartBounds {
    /// Padded low/high range of the visible points; `0..0` when empty.
    pub fn of(points: &[PricePoint]) -> Self {
        if points.is_empty() {
            return Self { min: 0.0, max: 0.0 };
        }
        let low = points.iter().map(|p| p.low).fold(f64::INFINITY, f64::min);
        let high = points.iter().map(|p| p.high).fold(f64::NEG_INFINITY, f64::max);
        Self {
            min: low * CHART_LOW_PAD,
            max: high * CHART_HIGH_PAD,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
