use crate::csv_processor::table::{LanguageColumn, TranslationTable};
use crate::utils::Result;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Parses a semicolon-delimited translation CSV into a [`TranslationTable`].
///
/// The first row is the header: cell 0 is the key-column label and is ignored;
/// each non-empty cell after it names a language. An empty header cell drops
/// that column position for every row, so data cells keep their positional
/// alignment to the surviving languages.
///
/// Data rows insert `key -> value` into a language's entries only when the row
/// reaches that column position and the cell is non-empty; an empty cell leaves
/// the key absent for that language. A row that fails to decode is logged and
/// skipped, and parsing continues with the rows already read.
pub fn parse_reader<R: Read>(reader: R) -> Result<TranslationTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .quoting(false)
        .flexible(true)
        .has_headers(false)
        .from_reader(reader);

    let mut records = rdr.records();
    let header = match records.next() {
        Some(record) => record?,
        None => return Ok(TranslationTable::default()),
    };

    // Retained columns keep their index into the raw record so that an empty
    // header cell leaves a hole instead of shifting later languages left.
    let mut columns: Vec<(usize, LanguageColumn)> = Vec::new();
    for (position, cell) in header.iter().enumerate().skip(1) {
        let language = cell.trim();
        if !language.is_empty() {
            columns.push((position, LanguageColumn::new(language)));
        }
    }

    for result in records {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("skipping unreadable CSV row: {e}");
                continue;
            }
        };
        let Some(key) = record.get(0) else { continue };
        for (position, column) in &mut columns {
            if let Some(value) = record.get(*position) {
                if !value.is_empty() {
                    column.insert(key, value);
                }
            }
        }
    }

    Ok(TranslationTable::new(
        columns.into_iter().map(|(_, column)| column).collect(),
    ))
}

/// Opens and parses a translation CSV file. An open failure is returned to the
/// caller, which treats it as "no languages produced" rather than aborting.
pub fn parse_file(path: &Path) -> Result<TranslationTable> {
    let file = File::open(path)?;
    parse_reader(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> TranslationTable {
        parse_reader(text.as_bytes()).unwrap()
    }

    #[test]
    fn header_names_languages_in_column_order() {
        let table = parse("key;en;sv\ngreeting;Hello;Hej\n");
        let languages: Vec<&str> = table.columns().iter().map(|c| c.language()).collect();
        assert_eq!(languages, vec!["en", "sv"]);
        assert_eq!(table.columns()[0].get("greeting"), Some("Hello"));
        assert_eq!(table.columns()[1].get("greeting"), Some("Hej"));
    }

    #[test]
    fn empty_header_cell_drops_the_column_position() {
        let table = parse(";en;;sv\ngreeting;Hello;IGNORED;Hej\n");
        let languages: Vec<&str> = table.columns().iter().map(|c| c.language()).collect();
        assert_eq!(languages, vec!["en", "sv"]);
        // The dropped position must not bleed into sv.
        assert_eq!(table.columns()[1].get("greeting"), Some("Hej"));
    }

    #[test]
    fn empty_value_cell_leaves_the_key_absent() {
        let table = parse(";en;sv\ngreeting;Hello;\n");
        assert_eq!(table.columns()[0].get("greeting"), Some("Hello"));
        assert_eq!(table.columns()[1].get("greeting"), None);
        assert!(table.columns()[1].is_empty());
    }

    #[test]
    fn short_rows_are_bounds_checked() {
        let table = parse(";en;sv\ngreeting;Hello\n");
        assert_eq!(table.columns()[0].get("greeting"), Some("Hello"));
        assert_eq!(table.columns()[1].get("greeting"), None);
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let table = parse("");
        assert!(table.is_empty());
    }

    #[test]
    fn header_only_yields_languages_without_entries() {
        let table = parse(";en;sv\n");
        assert_eq!(table.len(), 2);
        assert!(table.columns().iter().all(LanguageColumn::is_empty));
    }

    #[test]
    fn delimiter_is_not_quotable() {
        // Quoting is disabled: a quote is just another character in the cell.
        let table = parse(";en\nkey;\"a;b\"\n");
        assert_eq!(table.columns()[0].get("key"), Some("\"a"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(parse_file(Path::new("/nonexistent/translations.csv")).is_err());
    }
}
