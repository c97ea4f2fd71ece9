//! Event sinks: where narration goes.

use std::io::Write;

use log::debug;

use super::event::GameEvent;

/// Consumer of game events (the display collaborator).
pub trait EventSink {
    /// Present one event.
    fn emit(&mut self, event: &GameEvent);

    /// Present a batch of events in order.
    fn emit_all(&mut self, events: &[GameEvent]) {
        for event in events {
            self.emit(event);
        }
    }
}

/// Writes each event's text on its own line.
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl ConsoleSink<std::io::Stdout> {
    /// Sink writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> ConsoleSink<W> {
    /// Sink writing to any writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EventSink for ConsoleSink<W> {
    fn emit(&mut self, event: &GameEvent) {
        // A closed stdout shouldn't abort the game.
        if let Err(err) = writeln!(self.out, "{event}").and_then(|()| self.out.flush()) {
            debug!("dropping event, output closed: {err}");
        }
    }
}

/// Keeps every event, for tests and post-game inspection.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<GameEvent>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

/// Both sinks, in order.
impl<A: EventSink, B: EventSink> EventSink for (A, B) {
    fn emit(&mut self, event: &GameEvent) {
        self.0.emit(event);
        self.1.emit(event);
    }
}

/// Forwards events to the `log` facade at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&mut self, event: &GameEvent) {
        debug!("{event:?}");
    }
}
