use crate::csv_processor::LanguageColumn;
use crate::strings::matcher::{LineMatcher, RegexLineMatcher};
use crate::utils::Result;
use std::io;

/// Renders a language column without a template: one `"key" = "value";` line
/// per entry, in first-seen CSV order. Keys and values are written verbatim;
/// embedded double quotes are not escaped.
pub fn render(column: &LanguageColumn) -> String {
    let mut out = String::new();
    for (key, value) in column.iter() {
        out.push('"');
        out.push_str(key);
        out.push_str("\" = \"");
        out.push_str(value);
        out.push_str("\";\n");
    }
    out
}

/// Merges a translation column into an existing template, line by line.
///
/// A line that matches the key/value pattern has only its value span replaced
/// with the translation; every other character on the line is kept. A matched
/// line whose key has no translation for this language is emitted verbatim,
/// template value included. Non-matching lines (comments, blank lines, other
/// syntax) pass through unchanged.
pub struct TemplateMerger<M: LineMatcher = RegexLineMatcher> {
    matcher: M,
}

impl TemplateMerger<RegexLineMatcher> {
    /// Fails only if the key/value pattern does not compile; that failure is
    /// fatal to the whole merge run, before any language is processed.
    pub fn new() -> Result<Self> {
        Ok(Self {
            matcher: RegexLineMatcher::new()?,
        })
    }
}

impl<M: LineMatcher> TemplateMerger<M> {
    pub fn with_matcher(matcher: M) -> Self {
        Self { matcher }
    }

    pub fn merge<I>(&self, lines: I, column: &LanguageColumn) -> Result<String>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        let mut out = String::new();
        for line in lines {
            let line = line?;
            out.push_str(&self.merge_line(&line, column));
            out.push('\n');
        }
        Ok(out)
    }

    fn merge_line(&self, line: &str, column: &LanguageColumn) -> String {
        let Some(m) = self.matcher.match_key_value(line) else {
            return line.to_string();
        };
        match column.get(&line[m.key]) {
            Some(value) => {
                let mut merged = String::with_capacity(line.len() + value.len());
                merged.push_str(&line[..m.value.start]);
                merged.push_str(value);
                merged.push_str(&line[m.value.end..]);
                merged
            }
            // Missing translation: fall back to whatever the template has.
            None => line.to_string(),
        }
    }
}
