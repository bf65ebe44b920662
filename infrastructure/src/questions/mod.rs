//! Question sources backed by local files.

mod file_source;

pub use file_source::JsonFileQuestionSource;
