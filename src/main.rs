mod config;
mod error;
mod export;
mod generator;
mod indicators;
mod models;
mod pipeline;
mod reference;
mod summary;
mod utils;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use std::io;
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::AppConfig;
use crate::export::ExportFormat;
use crate::generator::SeriesGenerator;
use crate::pipeline::{Analysis, Pipeline, Selection};
use crate::summary::{display_window, ChartBounds};

#[derive(Parser)]
#[command(name = "stock-pulse", about = "Synthetic stock series with technical indicators", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Days of history to generate (overrides config)
    #[arg(long, global = true)]
    days: Option<u32>,

    /// Seed for a reproducible series (overrides config)
    #[arg(long, global = true, env = "PULSE_SEED")]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the indicator pipeline and print the dashboard summary
    Analyze {
        /// Ticker symbol (default: display.default_symbol)
        symbol: Option<String>,

        /// Number of trailing rows to print
        #[arg(short, long, default_value_t = 10)]
        rows: usize,
    },

    /// Write the enriched series to stdout
    Export {
        symbol: String,

        #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
    },

    /// Show the fundamentals and quarterly results table
    Fundamentals { symbol: String },

    /// List supported ticker symbols
    Symbols,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "stock_pulse=info,warn",
        1 => "stock_pulse=debug,info",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false).with_writer(io::stderr))
        .with(EnvFilter::new(filter))
        .init();

    let mut config = AppConfig::load()?;
    if let Some(days) = cli.days {
        config.generator.days = days;
    }
    if cli.seed.is_some() {
        config.generator.seed = cli.seed;
    }

    match cli.command {
        Command::Analyze { symbol, rows } => {
            let symbol = symbol.unwrap_or_else(|| config.display.default_symbol.clone());
            let mut selection = Selection::default();
            let ticket = selection.select(&symbol);

            let analysis = {
                let _t = utils::Timer::start(format!("Pipeline for {}", symbol));
                run_pipeline(&config, &symbol)?
            };
            selection.apply(&ticket, analysis);

            if let Some(analysis) = selection.current() {
                print_dashboard(analysis, &config, rows);
            }
        }

        Command::Export { symbol, format } => {
            let analysis = run_pipeline(&config, &symbol)?;
            export::write_series(io::stdout().lock(), &analysis.series, format)?;
        }

        Command::Fundamentals { symbol } => {
            let p = reference::lookup(&symbol)?;
            println!("─────────────────────────────────");
            println!("  {} ({}) · {}", p.name, p.symbol, p.sector);
            println!("─────────────────────────────────");
            println!("  Price      : {:.2}", p.price);
            println!("  P/E        : {}", p.pe);
            println!("  P/B        : {}", p.pb);
            println!("  Market cap : {}", p.market_cap);
            println!("  ROE        : {}", p.roe);
            println!("  Revenue    : {}", p.revenue);
            println!("  Net income : {}", p.net_income);
            println!("  Debt ratio : {}", p.debt_ratio);
            println!("  Div. yield : {}", p.dividend_yield.unwrap_or("—"));
            println!("  EPS        : {}", p.eps);
            println!("  Beta       : {}", p.beta);
            println!("─────────────────────────────────");
            println!("  {:<8} {:>9} {:>11} {:>6}", "Quarter", "Revenue", "Net income", "EPS");
            for q in &reference::QUARTERLY {
                println!(
                    "  {:<8} {:>9.0} {:>11.0} {:>6.2}",
                    q.quarter, q.revenue, q.net_income, q.eps
                );
            }
        }

        Command::Symbols => {
            let syms: Vec<&str> = reference::symbols().collect();
            println!("{} symbols:", syms.len());
            for s in syms {
                println!("  {}", s);
            }
        }
    }

    Ok(())
}

fn run_pipeline(config: &AppConfig, symbol: &str) -> Result<Analysis> {
    let seed = config.generator.seed.unwrap_or_else(rand::random);
    info!("Series seed: {}", seed);

    let mut pipeline = Pipeline::new(SeriesGenerator::seeded(seed), config);
    let today = Local::now().date_naive();
    pipeline
        .run(symbol, today)
        .with_context(|| format!("Analysis failed for {:?}", symbol))
}

fn print_dashboard(analysis: &Analysis, config: &AppConfig, rows: usize) {
    let p = analysis.profile;
    let s = &analysis.summary;
    let visible = display_window(&analysis.series, config.display.window);
    let bounds = ChartBounds::of(visible);
    let arrow = if s.is_up { "▲" } else { "▼" };

    println!("─────────────────────────────────────────────────────────────────");
    println!("  {} ({}) · {}", p.name, p.symbol, p.sector);
    println!(
        "  {:.2}  {} {:+.2} ({:+.2}%)",
        s.current_price, arrow, s.change, s.change_percent
    );
    println!("─────────────────────────────────────────────────────────────────");
    println!("  52w high   : {:.2}", s.week52_high);
    println!("  52w low    : {:.2}", s.week52_low);
    println!("  Prev close : {:.2}", s.previous_price);
    println!("  RSI({:<2})    : {}", config.indicators.rsi_period, s.rsi_label());
    println!("  Chart range: {:.2} – {:.2} ({} days)", bounds.min, bounds.max, visible.len());
    println!("─────────────────────────────────────────────────────────────────");
    println!(
        "  {:<10} {:>9} {:>9} {:>9} {:>9} {:>12} {:>9} {:>9} {:>6} {:>8}",
        "Date", "Open", "High", "Low", "Close", "Volume", "MA20", "MA60", "RSI", "MACD"
    );

    let fmt_opt = |v: Option<f64>, prec: usize| {
        v.map(|x| format!("{:.*}", prec, x))
            .unwrap_or_else(|| "—".to_string())
    };

    for pt in &visible[visible.len().saturating_sub(rows)..] {
        println!(
            "  {:<10} {:>9.2} {:>9.2} {:>9.2} {:>9.2} {:>12} {:>9} {:>9} {:>6} {:>8}",
            pt.date.format("%Y-%m-%d").to_string(),
            pt.open,
            pt.high,
            pt.low,
            pt.close,
            utils::fmt_number(pt.volume),
            fmt_opt(pt.ma20, 2),
            fmt_opt(pt.ma60, 2),
            fmt_opt(pt.rsi, 1),
            fmt_opt(pt.macd, 3),
        );
    }
}
