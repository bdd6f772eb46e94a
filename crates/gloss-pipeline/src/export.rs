//! CSV export of annotation tables

use crate::error::PipelineError;
use gloss_domain::AnnotationTable;
use std::io;

/// Suggested file name for the exported table
pub const EXPORT_FILE_NAME: &str = "keywords_with_explanations_or_synonyms.csv";

/// MIME type of the exported table
pub const EXPORT_MIME_TYPE: &str = "text/csv";

/// A parsed CSV export: header plus (word, annotation) rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    /// Header record, `Word` and the mode name
    pub header: Vec<String>,
    /// Data rows in file order
    pub rows: Vec<(String, String)>,
}

/// Write `table` as CSV: a `Word,<Mode>` header then one row per keyword.
///
/// Fields containing commas, quotes or line breaks are quoted.
pub fn write_csv<W: io::Write>(table: &AnnotationTable, writer: W) -> Result<(), PipelineError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    writer.write_record(table.header())?;
    for row in table.rows() {
        let annotation = row.annotation.to_string();
        writer.write_record([row.keyword.as_str(), annotation.as_str()])?;
    }
    writer.flush().map_err(|e| PipelineError::Export(e.to_string()))?;
    Ok(())
}

/// Render `table` as a CSV string
pub fn to_csv(table: &AnnotationTable) -> Result<String, PipelineError> {
    let mut buffer = Vec::new();
    write_csv(table, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| PipelineError::Export(e.to_string()))
}

/// Parse CSV produced by [`to_csv`]
pub fn parse_csv(data: &str) -> Result<CsvTable, PipelineError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(data.as_bytes());

    let header = reader.headers()?.iter().map(String::from).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let word = record.get(0).unwrap_or_default().to_string();
        let annotation = record.get(1).unwrap_or_default().to_string();
        rows.push((word, annotation));
    }

    Ok(CsvTable { header, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloss_domain::{Annotation, AnnotationMode, Keyword};

    fn table(mode: AnnotationMode, rows: &[(&str, Annotation)]) -> AnnotationTable {
        let mut table = AnnotationTable::new(mode);
        for (word, annotation) in rows {
            table.push(Keyword::from_token(word).unwrap(), annotation.clone());
        }
        table
    }

    #[test]
    fn test_header_and_rows() {
        let table = table(
            AnnotationMode::Explanation,
            &[("loyal", Annotation::text("faithful to a person"))],
        );
        let csv = to_csv(&table).unwrap();
        assert_eq!(csv, "Word,Explanation\nloyal,faithful to a person\n");
    }

    #[test]
    fn test_round_trip_with_embedded_commas_and_quotes() {
        let table = table(
            AnnotationMode::Synonym,
            &[
                ("cats", Annotation::text("feline, kitty")),
                ("pets", Annotation::text("a \"companion\" animal")),
                ("dogs", Annotation::text("hound\ncanine")),
                ("loyal", Annotation::Failed("API failure: HTTP 500: oops".into())),
            ],
        );

        let csv = to_csv(&table).unwrap();
        assert!(csv.contains("cats,\"feline, kitty\""));

        let parsed = parse_csv(&csv).unwrap();
        assert_eq!(parsed.header, vec!["Word", "Synonym"]);
        let expected: Vec<(String, String)> = table
            .rows()
            .iter()
            .map(|r| (r.keyword.to_string(), r.annotation.to_string()))
            .collect();
        assert_eq!(parsed.rows, expected);
        assert_eq!(parsed.rows[3].1, "error: API failure: HTTP 500: oops");
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let csv = to_csv(&AnnotationTable::new(AnnotationMode::Synonym)).unwrap();
        assert_eq!(csv, "Word,Synonym\n");
        assert!(parse_csv(&csv).unwrap().rows.is_empty());
    }
}
