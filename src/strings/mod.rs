pub mod matcher;
pub mod merger;
pub mod source;
pub mod writer;

pub use matcher::{KeyValueMatch, LineMatcher, RegexLineMatcher};
pub use merger::{render, TemplateMerger};
pub use source::TemplateSource;
pub use writer::StringsWriter;
