//! Game narration: events and the sinks that present them.

pub mod event;
pub mod sink;

pub use event::GameEvent;
pub use sink::{ConsoleSink, EventSink, LogSink, RecordingSink};
