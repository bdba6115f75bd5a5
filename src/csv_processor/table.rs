use std::collections::HashMap;

/// One translation column from the CSV: a language name plus its key/value
/// entries. Keys iterate in first-seen order so rendered output is stable
/// across runs.
#[derive(Debug, Clone, Default)]
pub struct LanguageColumn {
    language: String,
    entries: HashMap<String, String>,
    order: Vec<String>,
}

impl LanguageColumn {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Inserts a translation. A duplicate key overwrites the value but keeps
    /// its original position.
    pub fn insert(&mut self, key: &str, value: &str) {
        if self.entries.insert(key.to_string(), value.to_string()).is_none() {
            self.order.push(key.to_string());
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order
            .iter()
            .filter_map(|key| self.entries.get(key).map(|value| (key.as_str(), value.as_str())))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The full translation table parsed from the CSV, one column per retained
/// language header cell, in CSV column order. Read-only after parsing.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    columns: Vec<LanguageColumn>,
}

impl TranslationTable {
    pub fn new(columns: Vec<LanguageColumn>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[LanguageColumn] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
