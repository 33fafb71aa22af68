use crate::date::parse_capture_date;
use crocmap_core::entities::*;
use std::{collections::HashMap, io};
use thiserror::Error;

pub const COLUMN_NAME: &str = "name";
pub const COLUMN_LATITUDE: &str = "latitude";
pub const COLUMN_LONGITUDE: &str = "longitude";

pub const COLUMN_ZONE_NAME: &str = "ZONE_NAME";
pub const COLUMN_DATE_CAPTURED: &str = "DATE_CAPTURED";
pub const COLUMN_ZONE_LATITUDE: &str = "LATITUDE";
pub const COLUMN_ZONE_LONGITUDE: &str = "LONGITUDE";

/// A single row that cannot be used.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Line {line}: Column not found: {column}")]
    MissingColumn { line: u64, column: &'static str },
    #[error("Line {line}: Empty value in column {column}")]
    EmptyValue { line: u64, column: &'static str },
    #[error("Line {line}: Invalid number '{value}' in column {column}")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },
    #[error("Line {line}: Invalid date '{value}' in column {column}")]
    InvalidDate {
        line: u64,
        column: &'static str,
        value: String,
    },
    #[error("Line {line}: {source}")]
    InvalidPosition { line: u64, source: CoordError },
}

pub type RecordResult<T> = Result<T, RecordError>;

struct Row<'a> {
    line: u64,
    columns: &'a HashMap<String, usize>,
    record: &'a ::csv::StringRecord,
}

impl Row<'_> {
    fn field(&self, column: &'static str) -> RecordResult<&str> {
        let line = self.line;
        let value = self
            .columns
            .get(column)
            .and_then(|idx| self.record.get(*idx))
            .ok_or(RecordError::MissingColumn { line, column })?;
        if value.is_empty() {
            return Err(RecordError::EmptyValue { line, column });
        }
        Ok(value)
    }

    fn number(&self, column: &'static str) -> RecordResult<f64> {
        let value = self.field(column)?;
        value.parse().map_err(|_| RecordError::InvalidNumber {
            line: self.line,
            column,
            value: value.to_string(),
        })
    }

    fn pos(&self, lat_column: &'static str, lng_column: &'static str) -> RecordResult<MapPoint> {
        let lat = self.number(lat_column)?;
        let lng = self.number(lng_column)?;
        MapPoint::try_from_lat_lng_deg(lat, lng).map_err(|source| RecordError::InvalidPosition {
            line: self.line,
            source,
        })
    }
}

/// Reads all rows of a CSV file with a header line.
///
/// Rows that don't match the expected columns are returned as
/// [`RecordError`]s; a malformed file fails as a whole.
fn read_rows<R, T, F>(reader: R, parse: F) -> Result<Vec<RecordResult<T>>, ::csv::Error>
where
    R: io::Read,
    F: Fn(&Row) -> RecordResult<T>,
{
    let mut rdr = ::csv::ReaderBuilder::new()
        .flexible(true)
        .trim(::csv::Trim::All)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();
    log::debug!(
        "Columns in the CSV file: {:?}",
        headers.iter().collect::<Vec<_>>()
    );
    let columns: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.to_string(), idx))
        .collect();
    let mut rows = vec![];
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        if i < 5 {
            log::debug!("{:?}", record);
        }
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let row = Row {
            line,
            columns: &columns,
            record: &record,
        };
        rows.push(parse(&row));
    }
    log::debug!("Read {} rows", rows.len());
    Ok(rows)
}

pub fn read_location_records<R: io::Read>(
    reader: R,
) -> Result<Vec<RecordResult<LocationRecord>>, ::csv::Error> {
    read_rows(reader, |row| {
        let name = row.field(COLUMN_NAME)?.to_string();
        let pos = row.pos(COLUMN_LATITUDE, COLUMN_LONGITUDE)?;
        Ok(LocationRecord { name, pos })
    })
}

pub fn read_capture_records<R: io::Read>(
    reader: R,
) -> Result<Vec<RecordResult<CaptureRecord>>, ::csv::Error> {
    read_rows(reader, |row| {
        let zone_name = row.field(COLUMN_ZONE_NAME)?.to_string();
        let value = row.field(COLUMN_DATE_CAPTURED)?;
        let date_captured =
            parse_capture_date(value).ok_or_else(|| RecordError::InvalidDate {
                line: row.line,
                column: COLUMN_DATE_CAPTURED,
                value: value.to_string(),
            })?;
        Ok(CaptureRecord {
            zone_name,
            date_captured,
        })
    })
}

pub fn read_zones<R: io::Read>(reader: R) -> Result<Vec<RecordResult<Zone>>, ::csv::Error> {
    read_rows(reader, |row| {
        let name = row.field(COLUMN_ZONE_NAME)?.to_string();
        let pos = row.pos(COLUMN_ZONE_LATITUDE, COLUMN_ZONE_LONGITUDE)?;
        Ok(Zone { name, pos })
    })
}
