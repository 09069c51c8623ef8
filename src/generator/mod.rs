//! Synthetic daily OHLCV series.
//!
//! Prices follow a bounded random walk with a slight upward drift: each day
//! the running price moves by `(u - 0.48) * 2.5%` of itself and is clamped at
//! half the base price. Open/high/low are derived from the running price so
//! that `low <= min(open, close) <= max(open, close) <= high` holds by
//! construction, and every stored price is rounded to cents.

use crate::error::{AnalysisError, Result};
use crate::models::PricePoint;
use crate::utils::round_to;
use chrono::{Days, NaiveDate};
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

pub const DEFAULT_DAYS: u32 = 90;

const DRIFT_CENTER: f64 = 0.48;
const STEP_SCALE: f64 = 0.025;
const OPEN_JITTER: f64 = 0.01;
const WICK_SCALE: f64 = 0.015;
const FLOOR_RATIO: f64 = 0.5;
const VOLUME_MIN: f64 = 10_000_000.0;
const VOLUME_SPAN: f64 = 50_000_000.0;

// ── Source trait ──────────────────────────────────────────────────────────────

/// Swappable price series source.
pub trait PriceSource {
    /// Produce `days + 1` daily bars ending on `end`, oldest first.
    fn daily_series(&mut self, base_price: f64, days: u32, end: NaiveDate) -> Result<Vec<PricePoint>>;
}

// ── Random-walk generator ─────────────────────────────────────────────────────

pub struct SeriesGenerator<R = StdRng> {
    rng: R,
}

impl SeriesGenerator<StdRng> {
    /// Deterministic generator: the same seed always yields the same series.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SeriesGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn unit(&mut self) -> f64 {
        StandardUniform.sample(&mut self.rng)
    }

    pub fn generate(&mut self, base_price: f64, days: u32, end: NaiveDate) -> Result<Vec<PricePoint>> {
        if !base_price.is_finite() || base_price <= 0.0 {
            return Err(AnalysisError::InvalidParameter(format!(
                "base price must be positive, got {base_price}"
            )));
        }
        if days < 1 {
            return Err(AnalysisError::InvalidParameter(
                "days must be at least 1".to_string(),
            ));
        }

        let start = end.checked_sub_days(Days::new(u64::from(days))).ok_or_else(|| {
            AnalysisError::InvalidParameter(format!("{days} days before {end} is out of range"))
        })?;

        // Cent-aligned and never below half the base price, so the rounded
        // close cannot slip under the floor.
        let floor = (base_price * FLOOR_RATIO * 100.0).ceil() / 100.0;

        let mut price = base_price;
        let mut series = Vec::with_capacity(days as usize + 1);

        for date in start.iter_days().take(days as usize + 1) {
            let change = (self.unit() - DRIFT_CENTER) * price * STEP_SCALE;
            price = (price + change).max(floor);

            let open = price + (self.unit() - 0.5) * price * OPEN_JITTER;
            let high = price.max(open) * (1.0 + self.unit() * WICK_SCALE);
            let low = price.min(open) * (1.0 - self.unit() * WICK_SCALE);
            let volume = (self.unit() * VOLUME_SPAN + VOLUME_MIN) as u64;

            series.push(PricePoint::bar(
                date,
                round_to(open, 2),
                round_to(high, 2),
                round_to(low, 2),
                round_to(price, 2),
                volume,
            ));
        }

        debug!(
            "Generated {} bars from base {:.2} ({} → {})",
            series.len(),
            base_price,
            start,
            end
        );
        Ok(series)
    }
}

impl<R: Rng> PriceSource for SeriesGenerator<R> {
    fn daily_series(&mut self, base_price: f64, days: u32, end: NaiveDate) -> Result<Vec<PricePoint>> {
        self.generate(base_price, days, end)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
