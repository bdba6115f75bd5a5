use crate::utils::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes one `<language>.strings` file per language into the output
/// directory, creating or truncating without confirmation. A failure is
/// scoped to the language being written; the caller decides whether to
/// continue with the others.
pub struct StringsWriter {
    output_dir: PathBuf,
}

impl StringsWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn write(&self, language: &str, content: &str) -> Result<PathBuf> {
        let path = self.output_dir.join(format!("{language}.strings"));
        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(content.as_bytes())?;
        writer.flush()?;
        Ok(path)
    }
}
