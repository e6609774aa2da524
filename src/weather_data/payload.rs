//! Reading the temperature CSV served by the SMHI archive.
//!
//! A payload starts with a free-form preamble (station description, parameter, period)
//! followed by the table proper:
//!
//! ```text
//! Datum;Tid (UTC);Lufttemperatur;Kvalitet;;Tidsutsnitt:
//! 2009-09-01;06:00:00;7.6;G;;Kvalitetskontrollerade historiska data
//! 2009-09-01;07:00:00;8.7;G
//! ```
//!
//! Only the date, time and temperature columns are kept.

use crate::types::temperature::{TemperatureSample, TemperatureSeries};
use crate::utils::{parse_decimal, parse_timestamp, ParseError};
use csv::{ReaderBuilder, StringRecord};
use log::{debug, info, warn};

/// The start of the line that introduces the data table.
pub const TABLE_HEADER_PREFIX: &str = "Datum;Tid (UTC);Lufttemperatur";

const DATE_COLUMN: &str = "Datum";
const TIME_COLUMN: &str = "Tid (UTC)";
const TEMPERATURE_COLUMN: &str = "Lufttemperatur";

struct Columns {
    date: usize,
    time: usize,
    temperature: usize,
    width: usize,
}

/// Parses an archive CSV payload into a [`TemperatureSeries`].
///
/// Lines before the first one starting with [`TABLE_HEADER_PREFIX`] are ignored. If no
/// such line exists, the whole text is read as the table, which usually yields an empty
/// series. Rows with more fields than the header, rows that do not tokenize and rows
/// whose timestamp or temperature do not parse are skipped. An empty result is not an
/// error here.
///
/// # Examples
///
/// ```
/// use smhi_weather::parse_payload;
///
/// let payload = "\
/// Stationsnamn;Stationsnummer
/// Stockholm;98230
///
/// Datum;Tid (UTC);Lufttemperatur;Kvalitet
/// 2023-01-15;11:00:00;-2,5;G
/// 2023-01-15;12:00:00;-1.5;G
/// 2023-01-15;13:00:00;;G
/// ";
///
/// let series = parse_payload(payload);
/// assert_eq!(series.len(), 2);
/// assert_eq!(series.samples()[0].temperature_celsius, -2.5);
/// ```
pub fn parse_payload(text: &str) -> TemperatureSeries {
    let start = table_start(text).unwrap_or_else(|| {
        warn!(
            "No '{}' header line in payload, reading from the first line",
            TABLE_HEADER_PREFIX
        );
        0
    });

    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(text[start..].as_bytes());

    let columns = match reader.headers() {
        Ok(headers) => match locate_columns(headers) {
            Some(columns) => columns,
            None => {
                warn!("Payload header lacks the date, time or temperature column");
                return TemperatureSeries::new();
            }
        },
        Err(e) => {
            warn!("Failed to read payload header: {}", e);
            return TemperatureSeries::new();
        }
    };

    let mut series = TemperatureSeries::new();
    let mut dropped = 0usize;

    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                dropped += 1;
                debug!("Skipping payload line that failed to tokenize: {}", e);
                continue;
            }
        };

        if record.len() > columns.width {
            dropped += 1;
            debug!(
                "Skipping payload row with {} fields, header has {}",
                record.len(),
                columns.width
            );
            continue;
        }

        match sample_from_record(&record, &columns) {
            Ok(sample) => series.push(sample),
            Err(e) => {
                dropped += 1;
                debug!("Dropping payload row {:?}: {}", record.position(), e);
            }
        }
    }

    info!(
        "Parsed {} temperature samples from payload, dropped {} rows",
        series.len(),
        dropped
    );
    series
}

fn table_start(text: &str) -> Option<usize> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line.starts_with(TABLE_HEADER_PREFIX) {
            return Some(offset);
        }
        offset += line.len();
    }
    None
}

fn locate_columns(headers: &StringRecord) -> Option<Columns> {
    let position = |name: &str| headers.iter().position(|header| header.trim() == name);
    Some(Columns {
        date: position(DATE_COLUMN)?,
        time: position(TIME_COLUMN)?,
        temperature: position(TEMPERATURE_COLUMN)?,
        width: headers.len(),
    })
}

fn sample_from_record(
    record: &StringRecord,
    columns: &Columns,
) -> Result<TemperatureSample, ParseError> {
    let field = |index: usize| record.get(index).unwrap_or("").trim();

    let timestamp = parse_timestamp(&format!(
        "{} {}",
        field(columns.date),
        field(columns.time)
    ))?;
    let temperature = parse_decimal(field(columns.temperature))?;

    Ok(TemperatureSample::new(timestamp, temperature))
}
