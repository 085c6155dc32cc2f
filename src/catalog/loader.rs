use super::raw_record::{Column, RawRecord};
use crate::Result;
use camino::Utf8Path;
use csv::StringRecord;
use ohno::{IntoAppError, bail};
use std::fs::File;
use std::io::{BufReader, Read};
use strum::IntoEnumIterator;

/// Position of every required column within the source header.
#[derive(Debug)]
struct ColumnLayout {
    positions: [usize; Column::COUNT],
}

impl ColumnLayout {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let names: Vec<&str> = headers.iter().map(|h| h.trim_start_matches('\u{feff}').trim()).collect();

        let mut positions = [0; Column::COUNT];
        let mut missing = Vec::new();
        for column in Column::iter() {
            let found = column
                .header_aliases()
                .iter()
                .find_map(|alias| names.iter().position(|name| name == alias));

            match found {
                Some(position) => positions[column.index()] = position,
                None => missing.push(column.to_string()),
            }
        }

        if !missing.is_empty() {
            bail!("catalog is missing required column(s): {}", missing.join(", "));
        }

        log::debug!("resolved catalog columns at positions {positions:?}");
        Ok(Self { positions })
    }

    fn extract(&self, row: &StringRecord) -> RawRecord {
        RawRecord::from_cells(|column| row.get(self.positions[column.index()]))
    }
}

/// Read raw catalog records from CSV text.
///
/// The header is validated before any row is read: a missing required column is an error
/// naming every missing column. Short rows are accepted and their trailing cells are absent.
pub fn read_catalog<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = csv_reader.headers().into_app_err("reading catalog header")?.clone();
    let layout = ColumnLayout::resolve(&headers)?;

    let mut records = Vec::new();
    for (index, row) in csv_reader.records().enumerate() {
        let row = row.into_app_err_with(|| format!("reading catalog row {}", index + 1))?;
        records.push(layout.extract(&row));
    }

    Ok(records)
}

/// Read raw catalog records from a CSV file.
pub fn load_catalog(path: &Utf8Path) -> Result<Vec<RawRecord>> {
    let file = File::open(path).into_app_err_with(|| format!("opening catalog '{path}'"))?;
    let records = read_catalog(BufReader::new(file)).into_app_err_with(|| format!("loading catalog '{path}'"))?;
    log::info!("loaded {} raw records from '{path}'", records.len());
    Ok(records)
}
