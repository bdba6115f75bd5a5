use crate::csv_processor::TranslationTable;
use crate::strings::{render, StringsWriter, TemplateMerger, TemplateSource};
use crate::utils::Result;

/// Renders every language without a template and writes one `.strings` file
/// per language. A write failure is reported and that language skipped; the
/// remaining languages still get their files. Returns the number written.
pub fn write_plain(table: &TranslationTable, writer: &StringsWriter) -> usize {
    let mut written = 0;
    for column in table.columns() {
        let content = render(column);
        match writer.write(column.language(), &content) {
            Ok(path) => {
                tracing::info!("wrote {}", path.display());
                written += 1;
            }
            Err(e) => {
                tracing::error!("failed to write {}.strings: {e}", column.language());
            }
        }
    }
    written
}

/// Merges every language through the template and writes one `.strings` file
/// per language. The key/value pattern is compiled once up front; a compile
/// failure aborts before any language is processed. Per-language failures
/// (template unreadable, write failure) are reported and that language
/// skipped, leaving the others unaffected. Returns the number written.
pub fn write_merged(
    table: &TranslationTable,
    source: &TemplateSource,
    writer: &StringsWriter,
) -> Result<usize> {
    let merger = TemplateMerger::new()?;
    let mut written = 0;
    for column in table.columns() {
        let lines = match source.lines() {
            Ok(lines) => lines,
            Err(e) => {
                tracing::warn!(
                    "skipping {}: cannot open template {}: {e}",
                    column.language(),
                    source.path().display()
                );
                continue;
            }
        };
        let content = match merger.merge(lines, column) {
            Ok(content) => content,
            Err(e) => {
                tracing::error!("failed to merge {}: {e}", column.language());
                continue;
            }
        };
        match writer.write(column.language(), &content) {
            Ok(path) => {
                tracing::info!("wrote {}", path.display());
                written += 1;
            }
            Err(e) => {
                tracing::error!("failed to write {}.strings: {e}", column.language());
            }
        }
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv_processor::parse_reader;
    use std::io::Write;

    fn table(csv: &str) -> TranslationTable {
        parse_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn plain_mode_writes_one_file_per_language() {
        let dir = tempfile::tempdir().unwrap();
        let table = table(";en;sv\ngreeting;Hello;Hej\n");
        let writer = StringsWriter::new(dir.path());

        assert_eq!(write_plain(&table, &writer), 2);
        let en = std::fs::read_to_string(dir.path().join("en.strings")).unwrap();
        let sv = std::fs::read_to_string(dir.path().join("sv.strings")).unwrap();
        assert_eq!(en, "\"greeting\" = \"Hello\";\n");
        assert_eq!(sv, "\"greeting\" = \"Hej\";\n");
    }

    #[test]
    fn one_language_write_failure_does_not_stop_the_others() {
        let dir = tempfile::tempdir().unwrap();
        // "bad/lang" resolves to a path inside a directory that does not exist.
        let table = table(";bad/lang;en\ngreeting;Hej;Hello\n");
        let writer = StringsWriter::new(dir.path());

        assert_eq!(write_plain(&table, &writer), 1);
        assert!(dir.path().join("en.strings").exists());
    }

    #[test]
    fn merged_mode_substitutes_through_the_template() {
        let dir = tempfile::tempdir().unwrap();
        let template_path = dir.path().join("Localizable.strings");
        let mut file = std::fs::File::create(&template_path).unwrap();
        write!(file, "// Greetings\n\n\"greeting\" = \"Old\";\n\"farewell\" = \"Bye\";\n").unwrap();

        let table = table(";en;sv\ngreeting;Hello;Hej\n");
        let writer = StringsWriter::new(dir.path());
        let source = TemplateSource::new(&template_path);

        assert_eq!(write_merged(&table, &source, &writer).unwrap(), 2);
        let en = std::fs::read_to_string(dir.path().join("en.strings")).unwrap();
        assert_eq!(
            en,
            "// Greetings\n\n\"greeting\" = \"Hello\";\n\"farewell\" = \"Bye\";\n"
        );
        let sv = std::fs::read_to_string(dir.path().join("sv.strings")).unwrap();
        assert_eq!(
            sv,
            "// Greetings\n\n\"greeting\" = \"Hej\";\n\"farewell\" = \"Bye\";\n"
        );
    }

    #[test]
    fn unreadable_template_skips_every_language_without_error() {
        let dir = tempfile::tempdir().unwrap();
        let table = table(";en;sv\ngreeting;Hello;Hej\n");
        let writer = StringsWriter::new(dir.path());
        let source = TemplateSource::new("/nonexistent/Localizable.strings");

        assert_eq!(write_merged(&table, &source, &writer).unwrap(), 0);
        assert!(!dir.path().join("en.strings").exists());
    }
}
