pub mod cli;
pub mod convert;
pub mod csv_processor;
pub mod strings;
pub mod utils;

pub use cli::{Command, ConvertOptions};
pub use convert::{write_merged, write_plain};
pub use csv_processor::{parse_file, parse_reader, LanguageColumn, TranslationTable};
pub use strings::{render, RegexLineMatcher, StringsWriter, TemplateMerger, TemplateSource};
pub use utils::{AppConfig, ConverterError, Result};
