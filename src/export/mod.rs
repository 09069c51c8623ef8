//! Render an enriched series for downstream consumers (charting, notebooks).
//!
//! Dates are ISO `YYYY-MM-DD`; absent indicators are empty CSV cells or JSON `null`.

use crate::models::PricePoint;
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

pub fn write_series<W: Write>(writer: W, series: &[PricePoint], format: ExportFormat) -> Result<()> {
    match format {
        ExportFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(writer);
            for point in series {
                wtr.serialize(point)
                    .with_context(|| format!("CSV row for {}", point.date))?;
            }
            wtr.flush().context("CSV flush failed")?;
        }
        ExportFormat::Json => {
            let mut writer = writer;
            serde_json::to_writer_pretty(&mut writer, series).context("JSON encoding failed")?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{enrich, fixtures::series_from_closes};

    #[test]
    fn test_csv_has_header_and_empty_rsi() {
        let series = enrich(series_from_closes(&[10.0, 11.0]), 14).unwrap();
        let mut buf = Vec::new();
        write_series(&mut buf, &series, ExportFormat::Csv).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "date,open,high,low,close,volume,ma20,ma60,rsi,macd");
        assert_eq!(lines[1], "2024-01-01,10.0,10.0,10.0,10.0,10000000,10.0,10.0,,0.0");
    }

    #[test]
    fn test_json_uses_null_for_absent_values() {
        let series = enrich(series_from_closes(&[10.0]), 14).unwrap();
        let mut buf = Vec::new();
        write_series(&mut buf, &series, ExportFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["date"], "2024-01-01");
        assert!(value[0]["rsi"].is_null());
        assert_eq!(value[0]["macd"], 0.0);
    }
}
