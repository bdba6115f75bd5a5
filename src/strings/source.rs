use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

/// A restartable line source over the template file. The merge consumes the
/// template once per language, so each `lines()` call reopens the file from
/// the start; the handle is dropped when the iterator goes out of scope.
pub struct TemplateSource {
    path: PathBuf,
}

impl TemplateSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> io::Result<Lines<BufReader<File>>> {
        let file = File::open(&self.path)?;
        Ok(BufReader::new(file).lines())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reiterates_from_the_start_on_every_call() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Localizable.strings");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "first\nsecond").unwrap();

        let source = TemplateSource::new(&path);
        for _ in 0..2 {
            let lines: Vec<String> = source.lines().unwrap().map(|l| l.unwrap()).collect();
            assert_eq!(lines, vec!["first", "second"]);
        }
    }

    #[test]
    fn missing_template_is_an_open_error() {
        let source = TemplateSource::new("/nonexistent/Localizable.strings");
        assert!(source.lines().is_err());
    }
}
