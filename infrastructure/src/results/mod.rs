//! Match result sinks backed by local files.

mod jsonl_sink;

pub use jsonl_sink::JsonlMatchSink;
