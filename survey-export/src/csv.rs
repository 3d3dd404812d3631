//! CSV export in the fixed long format: one row per answer, headers
//! `Section,Record #,Field,Value`.

use survey_spec::{RecordRow, SerializedRecord};

use crate::ExportError;

const HEADERS: [&str; 4] = ["Section", "Record #", "Field", "Value"];

/// Render a serialized submission to CSV text.
pub fn make_csv(record: &SerializedRecord) -> Result<String, ExportError> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADERS)?;
    for row in record.rows() {
        let number = row.record_number.to_string();
        writer.write_record([
            row.section.as_str(),
            number.as_str(),
            row.field.as_str(),
            row.value.as_str(),
        ])?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Parse CSV text produced by [`make_csv`] back into rows.
///
/// Data-processing scripts downstream rely on the export being readable by
/// any conforming CSV reader; this parser doubles as the round-trip check.
pub fn parse_csv(text: &str) -> Result<Vec<RecordRow>, ExportError> {
    let mut reader = ::csv::Reader::from_reader(text.as_bytes());
    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let number = record.get(1).unwrap_or_default();
        rows.push(RecordRow::new(
            record.get(0).unwrap_or_default(),
            number
                .parse()
                .map_err(|_| ExportError::RecordNumber(number.to_string()))?,
            record.get(2).unwrap_or_default(),
            record.get(3).unwrap_or_default(),
        ));
    }
    Ok(rows)
}

/// Sanitize a string for use in filenames: invalid characters, spaces, and
/// dashes become underscores, runs collapse, and the result is capped at
/// fifty characters.
pub fn sanitize_filename(name: &str) -> String {
    let mut sanitized = String::with_capacity(name.len());
    let mut last_was_underscore = true;
    for c in name.chars() {
        let mapped = match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' | ' ' | '-' => '_',
            other => other,
        };
        if mapped == '_' {
            if !last_was_underscore {
                sanitized.push('_');
            }
            last_was_underscore = true;
        } else {
            sanitized.push(mapped);
            last_was_underscore = false;
        }
    }
    let sanitized = sanitized.trim_matches('_');
    sanitized.chars().take(50).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SerializedRecord {
        SerializedRecord::new(
            "demo",
            "Demo Survey",
            vec![
                RecordRow::new("Trust", 1, "trust", "5 - Strongly Agree"),
                RecordRow::new("Trust", 1, "trust_comments", ""),
                RecordRow::new("Postal Address", 1, "city", "Cape Town, ZA"),
            ],
        )
    }

    #[test]
    fn header_row() {
        let csv = make_csv(&sample()).unwrap();
        assert!(csv.starts_with("Section,Record #,Field,Value\n"));
    }

    #[test]
    fn round_trip() {
        let record = sample();
        let csv = make_csv(&record).unwrap();
        let rows = parse_csv(&csv).unwrap();
        assert_eq!(rows, record.rows());
    }

    #[test]
    fn quotes_embedded_commas() {
        let csv = make_csv(&sample()).unwrap();
        assert!(csv.contains("\"Cape Town, ZA\""));
    }

    #[test]
    fn empty_record_is_headers_only() {
        let record = SerializedRecord::new("demo", "Demo", vec![]);
        let csv = make_csv(&record).unwrap();
        assert_eq!(csv, "Section,Record #,Field,Value\n");
        assert!(parse_csv(&csv).unwrap().is_empty());
    }

    #[test]
    fn filename_sanitization() {
        assert_eq!(sanitize_filename("Investment Decision-Making Survey"), "Investment_Decision_Making_Survey");
        assert_eq!(sanitize_filename("a/b\\c:d*e"), "a_b_c_d_e");
        assert_eq!(sanitize_filename("__already__"), "already");
    }
}
