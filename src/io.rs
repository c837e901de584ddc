use csv::StringRecord;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::coco::CocoFile;
use crate::error::ConvertError;
use crate::types::{Row, REQUIRED_COLUMNS};

/// Load all rows from the input CSV.
///
/// Fatal checks run in a fixed order: missing file, unparsable records, zero
/// data rows, then the required-column set. The column check runs once
/// against the header, never per row, and a header-only file counts as empty
/// rather than as a schema failure. Extra columns are ignored.
pub fn load_rows(csv_path: &Path) -> Result<Vec<Row>, ConvertError> {
    if !csv_path.exists() {
        return Err(ConvertError::CsvNotFound {
            path: csv_path.to_path_buf(),
        });
    }

    let malformed = |source: csv::Error| ConvertError::CsvMalformed {
        path: csv_path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(csv_path).map_err(malformed)?;
    let headers = reader.headers().map_err(malformed)?.clone();

    let records = reader
        .into_records()
        .collect::<Result<Vec<StringRecord>, _>>()
        .map_err(malformed)?;

    if records.is_empty() {
        return Err(ConvertError::CsvEmpty {
            path: csv_path.to_path_buf(),
        });
    }

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ConvertError::CsvSchema {
            path: csv_path.to_path_buf(),
            missing,
        });
    }

    let mut rows = Vec::with_capacity(records.len());
    for record in &records {
        rows.push(record.deserialize(Some(&headers)).map_err(malformed)?);
    }

    Ok(rows)
}

/// Distinct image names in first-occurrence order.
pub fn distinct_image_names(rows: &[Row]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut names = Vec::new();
    for row in rows {
        if seen.insert(row.image_name.as_str()) {
            names.push(row.image_name.clone());
        }
    }
    names
}

/// Write the COCO document as indented JSON, creating any missing parent
/// directories of `output_path` first.
pub fn write_coco_file(coco: &CocoFile, output_path: &Path) -> Result<(), ConvertError> {
    let write_failed = |source: std::io::Error| ConvertError::WriteFailed {
        path: output_path.to_path_buf(),
        source,
    };

    // A bare file name has an empty parent; nothing to create then.
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_failed)?;
        }
    }

    let file = File::create(output_path).map_err(write_failed)?;
    let mut writer = BufWriter::new(file);

    // Four-space indentation.
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    coco.serialize(&mut serializer)
        .map_err(|e| write_failed(std::io::Error::from(e)))?;

    writer.write_all(b"\n").map_err(write_failed)?;
    writer.flush().map_err(write_failed)
}
