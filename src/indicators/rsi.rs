use crate::error::{AnalysisError, Result};
use crate::models::PricePoint;
use crate::utils::round_to;

pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Stand-in denominator when a window has no losses.
const ZERO_LOSS_EPSILON: f64 = 0.0001;

/// Simple RSI over the `period` close-to-close moves ending at `i`.
///
/// Recomputed from scratch for every index (no Wilder smoothing). Requires
/// `i >= period` so the window has a predecessor for each of its moves.
fn simple_rsi(series: &[PricePoint], i: usize, period: usize) -> f64 {
    let mut gains = 0.0;
    let mut losses = 0.0;
    for j in (i + 1 - period)..=i {
        let diff = series[j].close - series[j - 1].close;
        if diff > 0.0 {
            gains += diff;
        } else {
            losses -= diff;
        }
    }

    let rs = gains / if losses == 0.0 { ZERO_LOSS_EPSILON } else { losses };
    round_to(100.0 - 100.0 / (1.0 + rs), 2)
}

/// Attach RSI to every index `>= period`; earlier points are left empty.
pub fn with_rsi(mut series: Vec<PricePoint>, period: usize) -> Result<Vec<PricePoint>> {
    if period == 0 {
        return Err(AnalysisError::InvalidParameter(
            "RSI period must be at least 1".to_string(),
        ));
    }

    for i in 0..series.len() {
        series[i].rsi = if i >= period {
            Some(simple_rsi(&series, i, period))
        } else {
            None
        };
    }
    Ok(series)
}
