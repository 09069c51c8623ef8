//! Pipeline orchestrator: symbol → series → indicators → summary.
//!
//! ## Flow
//!
//!   1. Resolve the symbol against the reference table (`UnknownSymbol` otherwise)
//!   2. Generate `days + 1` daily bars from the profile's price
//!   3. Moving averages → RSI → MACD
//!   4. Project the summary scalars
//!
//! Every selection re-runs the whole thing; nothing is cached between symbols.
//! `Selection` decides which finished run the caller should keep.

use crate::config::AppConfig;
use crate::error::Result;
use crate::generator::PriceSource;
use crate::indicators::enrich;
use crate::models::{PricePoint, TickerProfile};
use crate::reference;
use crate::summary::Summary;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// A fully enriched series for one symbol.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub profile: &'static TickerProfile,
    pub series: Vec<PricePoint>,
    pub summary: Summary,
}

pub struct Pipeline<S> {
    source: S,
    days: u32,
    rsi_period: usize,
}

impl<S: PriceSource> Pipeline<S> {
    pub fn new(source: S, config: &AppConfig) -> Self {
        Self {
            source,
            days: config.generator.days,
            rsi_period: config.indicators.rsi_period,
        }
    }

    pub fn run(&mut self, symbol: &str, today: NaiveDate) -> Result<Analysis> {
        let profile = reference::lookup(symbol)?;
        info!("Analysing {} ({}) from base {:.2}", profile.symbol, profile.name, profile.price);

        let raw = self.source.daily_series(profile.price, self.days, today)?;
        let series = enrich(raw, self.rsi_period)?;
        let summary = Summary::project(&series, profile.price);

        debug!(
            "{}: {} points, close {:.2} ({:+.2}%)",
            profile.symbol,
            series.len(),
            summary.current_price,
            summary.change_percent
        );

        Ok(Analysis {
            profile,
            series,
            summary,
        })
    }
}

// ── Selection tracking ────────────────────────────────────────────────────────

/// Proof that a run was started for a particular selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    id: u64,
    symbol: String,
}

/// Last-write-wins on the selected symbol: only the result belonging to the
/// most recent `select` is kept, whatever order runs finish in.
#[derive(Debug, Default)]
pub struct Selection {
    latest: u64,
    current: Option<Analysis>,
}

impl Selection {
    pub fn select(&mut self, symbol: &str) -> Ticket {
        self.latest += 1;
        Ticket {
            id: self.latest,
            symbol: symbol.to_string(),
        }
    }

    /// Store `analysis` if `ticket` is still the latest selection.
    /// Returns `false` (and drops the result) for stale tickets.
    pub fn apply(&mut self, ticket: &Ticket, analysis: Analysis) -> bool {
        if ticket.id != self.latest {
            warn!(
                "Discarding stale result for {} (selection {} superseded by {})",
                ticket.symbol, ticket.id, self.latest
            );
            return false;
        }
        self.current = Some(analysis);
        true
    }

    pub fn current(&self) -> Option<&Analysis> {
        self.current.as_ref()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use crate::generator::SeriesGenerator;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 28).unwrap()
    }

    fn pipeline(seed: u64) -> Pipeline<SeriesGenerator> {
        Pipeline::new(SeriesGenerator::seeded(seed), &AppConfig::default())
    }

    #[test]
    fn test_run_known_symbol() {
        let analysis = pipeline(1).run("tsla", today()).unwrap();
        assert_eq!(analysis.profile.symbol, "TSLA");
        assert_eq!(analysis.series.len(), 91);
        assert_eq!(analysis.series.last().unwrap().date, today());
        assert_eq!(analysis.series[0].macd, Some(0.0));
        assert!(analysis.series.iter().all(|p| p.close >= 248.3 * 0.5));
        assert_eq!(
            analysis.summary.current_price,
            analysis.series.last().unwrap().close
        );
    }

    #[test]
    fn test_unknown_symbol_generates_nothing() {
        let err = pipeline(1).run("GOOG", today()).unwrap_err();
        assert_eq!(err, AnalysisError::UnknownSymbol("GOOG".to_string()));
    }

    #[test]
    fn test_days_from_config() {
        let mut cfg = AppConfig::default();
        cfg.generator.days = 10;
        let analysis = Pipeline::new(SeriesGenerator::seeded(2), &cfg)
            .run("BABA", today())
            .unwrap();
        assert_eq!(analysis.series.len(), 11);
        assert!(analysis.series.iter().all(|p| p.rsi.is_none()));
        assert_eq!(analysis.summary.latest_rsi, None);

        cfg.generator.days = 0;
        let err = Pipeline::new(SeriesGenerator::seeded(2), &cfg)
            .run("BABA", today())
            .unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidParameter(_)));
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let a = pipeline(99).run("NVDA", today()).unwrap();
        let b = pipeline(99).run("nvda", today()).unwrap();
        assert_eq!(a.series, b.series);
        assert_eq!(a.summary, b.summary);
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut p = pipeline(5);
        let mut selection = Selection::default();

        let first = selection.select("AAPL");
        let second = selection.select("600519");

        let late = p.run("600519", today()).unwrap();
        let stale = p.run("AAPL", today()).unwrap();

        assert!(selection.apply(&second, late));
        assert!(!selection.apply(&first, stale));
        assert_eq!(selection.current().unwrap().profile.symbol, "600519");
    }

    #[test]
    fn test_empty_selection() {
        let selection = Selection::default();
        assert!(selection.current().is_none());
    }
}
