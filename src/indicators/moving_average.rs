use crate::models::PricePoint;
use crate::utils::round_to;

pub const MA_SHORT_WINDOW: usize = 20;
pub const MA_LONG_WINDOW: usize = 60;

/// Mean close over the trailing `min(i + 1, window)` points ending at `i`.
///
/// Early points average whatever history exists instead of staying empty, so
/// index 0 is just its own close.
pub fn trailing_mean(series: &[PricePoint], i: usize, window: usize) -> f64 {
    let from = (i + 1).saturating_sub(window);
    let slice = &series[from..=i];
    let sum: f64 = slice.iter().map(|p| p.close).sum();
    round_to(sum / slice.len() as f64, 2)
}

pub fn with_moving_averages(mut series: Vec<PricePoint>) -> Vec<PricePoint> {
    for i in 0..series.len() {
        let ma20 = trailing_mean(&series, i, MA_SHORT_WINDOW);
        let ma60 = trailing_mean(&series, i, MA_LONG_WINDOW);
        series[i].ma20 = Some(ma20);
        series[i].ma60 = Some(ma60);
    }
    series
}
