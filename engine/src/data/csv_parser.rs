use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use csv::{ReaderBuilder, StringRecord};
use shared::models::{Bar, Series, TimeFrame};
use shared::utils::brazilian_format;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::provider::PriceProvider;
use crate::error::EngineError;

// Parses date "dd/mm/yyyy" and optional time "HH:MM:SS" into DateTime<Utc>
pub fn parse_datetime(date_str: &str, time_str: Option<&str>) -> Result<DateTime<Utc>, EngineError> {
    let date = NaiveDate::parse_from_str(date_str.trim(), "%d/%m/%Y")
        .map_err(|e| EngineError::CsvDataFormatError(format!("Failed to parse date '{}': {}", date_str, e)))?;
    let time = match time_str.map(str::trim).filter(|t| !t.is_empty()) {
        Some(t) => NaiveTime::parse_from_str(t, "%H:%M:%S")
            .map_err(|e| EngineError::CsvDataFormatError(format!("Failed to parse time '{}': {}", t, e)))?,
        None => NaiveTime::MIN,
    };

    // B3 exports carry no zone; stored as UTC.
    Ok(DateTime::from_naive_utc_and_offset(date.and_time(time), Utc))
}

pub struct BrazilianCsvParser;

impl BrazilianCsvParser {
    // CSV Header: Ativo;Data;Hora;Abertura;Máximo;Mínimo;Fechamento;Volume;Quantidade
    // Example Row: PETR4;02/01/2024;00:00:00;37,90;38,40;37,60;38,10;45.123.400;31.002
    // Hora and Quantidade are optional. Blank or unreadable prices become
    // missing fields on the bar instead of failing the whole file.
    pub fn load_bars<R: Read>(reader: R) -> Result<Vec<Bar>, EngineError> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        for required in ["Data", "Abertura", "Máximo", "Mínimo", "Fechamento", "Volume"] {
            if !headers.iter().any(|h| h.trim() == required) {
                return Err(EngineError::CsvDataFormatError(format!("Missing '{}' column", required)));
            }
        }

        let mut bars = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let line = idx + 2;
            let record = result?;

            let date_str = Self::get_field(&record, &headers, "Data")
                .filter(|s| !s.trim().is_empty())
                .ok_or_else(|| EngineError::CsvDataFormatError(format!("Missing 'Data' field at line {}", line)))?;
            let timestamp = parse_datetime(date_str, Self::get_field(&record, &headers, "Hora")).map_err(|e| {
                EngineError::CsvDataFormatError(format!("Error parsing datetime at line {}: {}", line, e))
            })?;

            bars.push(Bar {
                timestamp,
                open: Self::number(&record, &headers, "Abertura", line),
                high: Self::number(&record, &headers, "Máximo", line),
                low: Self::number(&record, &headers, "Mínimo", line),
                close: Self::number(&record, &headers, "Fechamento", line),
                volume: Self::number(&record, &headers, "Volume", line),
            });
        }
        Ok(bars)
    }

    pub fn load_bars_from_path(file_path: &Path) -> Result<Vec<Bar>, EngineError> {
        let file = File::open(file_path)?;
        Self::load_bars(BufReader::new(file))
    }

    fn number(record: &StringRecord, headers: &StringRecord, name: &str, line: usize) -> Option<f64> {
        let raw = Self::get_field(record, headers, name)?.trim();
        if raw.is_empty() {
            return None;
        }
        match brazilian_format::parse_decimal(raw) {
            Ok(value) if value.is_finite() => Some(value),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(field = name, line, error = %e, "Unreadable value, treating as missing");
                None
            }
        }
    }

    // Helper to get field by header name
    fn get_field<'a>(record: &'a StringRecord, headers: &StringRecord, name: &str) -> Option<&'a str> {
        headers
            .iter()
            .position(|header| header.trim() == name)
            .and_then(|pos| record.get(pos))
    }
}

/// Reads `{directory}/{ticker}.csv` exported from the B3 terminal.
pub struct CsvDirectoryProvider {
    directory: PathBuf,
}

impl CsvDirectoryProvider {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn path_for(&self, ticker: &str) -> PathBuf {
        self.directory.join(format!("{}.csv", ticker))
    }
}

#[async_trait]
impl PriceProvider for CsvDirectoryProvider {
    async fn fetch(&self, ticker: &str, lookback: Duration, interval: TimeFrame) -> Result<Series, EngineError> {
        let path = self.path_for(ticker);
        if !path.exists() {
            tracing::debug!(ticker, path = %path.display(), "No CSV file for ticker");
            return Ok(Series::empty(ticker));
        }
        if interval != TimeFrame::Day1 {
            tracing::warn!(ticker, ?interval, "CSV exports are daily; interval ignored");
        }

        let bars = BrazilianCsvParser::load_bars_from_path(&path)?;
        let series = Series::new(ticker, bars);
        match series.last_timestamp() {
            Some(newest) => Ok(series.since(newest - lookback)),
            None => Ok(series),
        }
    }
}
