pub mod reader;
pub mod table;

pub use reader::{parse_file, parse_reader};
pub use table::{LanguageColumn, TranslationTable};
