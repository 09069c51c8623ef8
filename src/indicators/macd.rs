use crate::models::PricePoint;
use crate::utils::round_to;

const FAST_PERIOD: f64 = 12.0;
const SLOW_PERIOD: f64 = 26.0;

/// EMA12 − EMA26 divergence, both EMAs seeded with the first close.
///
/// Only the divergence line is produced; there is no signal line or
/// histogram. Index 0 is always exactly zero.
pub fn with_macd_like(mut series: Vec<PricePoint>) -> Vec<PricePoint> {
    let Some(first) = series.first() else {
        return series;
    };

    let k12 = 2.0 / (FAST_PERIOD + 1.0);
    let k26 = 2.0 / (SLOW_PERIOD + 1.0);
    let mut ema12 = first.close;
    let mut ema26 = first.close;

    for (i, point) in series.iter_mut().enumerate() {
        if i > 0 {
            ema12 = point.close * k12 + ema12 * (1.0 - k12);
            ema26 = point.close * k26 + ema26 * (1.0 - k26);
        }
        point.macd = Some(round_to(ema12 - ema26, 3));
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::fixtures::series_from_closes;

    #[test]
    fn test_origin_is_zero() {
        for first in [0.01, 77.2, 1680.0] {
            let series = with_macd_like(series_from_closes(&[first, first * 1.1]));
            assert_eq!(series[0].macd, Some(0.0));
        }
    }

    #[test]
    fn test_second_point() {
        // ema12 = 100 + 13 * 2/13 = 102, ema26 = 100 + 13 * 2/27 ≈ 100.963
        let series = with_macd_like(series_from_closes(&[100.0, 113.0]));
        assert_eq!(series[1].macd, Some(1.037));
    }

    #[test]
    fn test_flat_series_stays_zero() {
        let series = with_macd_like(series_from_closes(&[42.0; 40]));
        assert!(series.iter().all(|p| p.macd == Some(0.0)));
    }

    #[test]
    fn test_rising_series_is_positive() {
        let closes: Vec<f64> = (0..30).map(|x| 10.0 + x as f64).collect();
        let series = with_macd_like(series_from_closes(&closes));
        assert!(series[1..].iter().all(|p| p.macd.unwrap() > 0.0));
    }

    #[test]
    fn test_empty_series() {
        assert!(with_macd_like(Vec::new()).is_empty());
    }
}
