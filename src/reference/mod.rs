//! Read-only fundamentals tables.
//!
//! The core only needs these for symbol lookup and for the base price that
//! seeds the generator; everything else is passed through to the display.

use crate::error::{AnalysisError, Result};
use crate::models::{QuarterlyReport, TickerProfile};

// ── Profiles ──────────────────────────────────────────────────────────────────

pub static PROFILES: [TickerProfile; 5] = [
    TickerProfile {
        symbol: "AAPL",
        name: "Apple Inc.",
        sector: "Technology",
        price: 189.5,
        pe: 28.4,
        pb: 43.2,
        market_cap: "2.94T",
        roe: "147%",
        revenue: "383.4B",
        net_income: "97.0B",
        debt_ratio: "31%",
        dividend_yield: Some("0.5%"),
        eps: "6.67",
        beta: "1.24",
    },
    TickerProfile {
        symbol: "TSLA",
        name: "Tesla",
        sector: "Automotive / EV",
        price: 248.3,
        pe: 65.2,
        pb: 12.8,
        market_cap: "791B",
        roe: "19.4%",
        revenue: "96.7B",
        net_income: "15.0B",
        debt_ratio: "18%",
        dividend_yield: None,
        eps: "3.81",
        beta: "2.31",
    },
    TickerProfile {
        symbol: "NVDA",
        name: "NVIDIA",
        sector: "Semiconductors",
        price: 875.4,
        pe: 52.1,
        pb: 28.7,
        market_cap: "2.16T",
        roe: "55.3%",
        revenue: "60.9B",
        net_income: "29.8B",
        debt_ratio: "14%",
        dividend_yield: Some("0.03%"),
        eps: "16.84",
        beta: "1.97",
    },
    TickerProfile {
        symbol: "BABA",
        name: "Alibaba",
        sector: "E-commerce / Cloud",
        price: 77.2,
        pe: 14.3,
        pb: 1.8,
        market_cap: "198B",
        roe: "12.8%",
        revenue: "931.5B",
        net_income: "71.1B",
        debt_ratio: "22%",
        dividend_yield: None,
        eps: "5.41",
        beta: "0.87",
    },
    TickerProfile {
        symbol: "600519",
        name: "Kweichow Moutai",
        sector: "Baijiu",
        price: 1680.0,
        pe: 29.5,
        pb: 8.4,
        market_cap: "2.1T(RMB)",
        roe: "31.2%",
        revenue: "150.5B",
        net_income: "74.7B",
        debt_ratio: "8%",
        dividend_yield: Some("2.8%"),
        eps: "59.49",
        beta: "0.62",
    },
];

pub static QUARTERLY: [QuarterlyReport; 6] = [
    QuarterlyReport { quarter: "Q1 2023", revenue: 1174.0, net_income: 241.0, eps: 1.52 },
    QuarterlyReport { quarter: "Q2 2023", revenue: 1218.0, net_income: 198.0, eps: 1.26 },
    QuarterlyReport { quarter: "Q3 2023", revenue: 1346.0, net_income: 307.0, eps: 1.94 },
    QuarterlyReport { quarter: "Q4 2023", revenue: 1196.0, net_income: 224.0, eps: 1.43 },
    QuarterlyReport { quarter: "Q1 2024", revenue: 1353.0, net_income: 289.0, eps: 1.85 },
    QuarterlyReport { quarter: "Q2 2024", revenue: 1498.0, net_income: 341.0, eps: 2.19 },
];

// ── Lookup ────────────────────────────────────────────────────────────────────

pub fn normalise_symbol(s: &str) -> String {
    s.trim().to_uppercase()
}

/// Resolve user input to a profile.
///
/// Tries the upper-cased key first, then the trimmed input as typed.
pub fn lookup(input: &str) -> Result<&'static TickerProfile> {
    let upper = normalise_symbol(input);
    let raw = input.trim();

    PROFILES
        .iter()
        .find(|p| p.symbol == upper)
        .or_else(|| PROFILES.iter().find(|p| p.symbol == raw))
        .ok_or_else(|| AnalysisError::UnknownSymbol(raw.to_string()))
}

pub fn symbols() -> impl Iterator<Item = &'static str> {
    PROFILES.iter().map(|p| p.symbol)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
