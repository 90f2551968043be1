//! Opt-in JSON-lines game event log.
//!
//! One object per line, tagged by `type`. The first failed write closes the
//! log for the rest of the session; the game keeps running.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::core::LockEvent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// `game` counts from 1; later games continue the seeded sequence.
    NewGame {
        seed: u32,
        game: u32,
    },
    Locked {
        shape: &'static str,
        lines_cleared: u32,
        total_lines: u32,
    },
    GameOver {
        total_lines: u32,
    },
    Quit,
}

impl From<&LockEvent> for GameEvent {
    fn from(ev: &LockEvent) -> Self {
        GameEvent::Locked {
            shape: ev.shape.as_str(),
            lines_cleared: ev.lines_cleared,
            total_lines: ev.total_lines,
        }
    }
}

pub struct EventLog<W: Write = BufWriter<File>> {
    out: Option<W>,
    buf: Vec<u8>,
}

impl EventLog {
    /// Append to `path`, creating it if needed. A path that cannot be opened
    /// yields a disabled log.
    pub fn open(path: impl AsRef<Path>) -> Self {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => Self::to_writer(BufWriter::new(f)),
            Err(_) => Self::disabled(),
        }
    }

    pub fn from_path(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::open(p),
            None => Self::disabled(),
        }
    }
}

impl<W: Write> EventLog<W> {
    pub fn to_writer(out: W) -> Self {
        Self {
            out: Some(out),
            buf: Vec::with_capacity(256),
        }
    }

    pub fn disabled() -> Self {
        Self {
            out: None,
            buf: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn record(&mut self, event: &GameEvent) {
        let Some(out) = self.out.as_mut() else {
            return;
        };
        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, event).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if write_line(out, &self.buf).is_err() {
            self.out = None;
        }
    }

    pub fn into_inner(self) -> Option<W> {
        self.out
    }
}

fn write_line<W: Write>(out: &mut W, line: &[u8]) -> io::Result<()> {
    out.write_all(line)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Shape;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_events_are_json_lines() {
        let mut log = EventLog::to_writer(Vec::new());
        log.record(&GameEvent::NewGame { seed: 9, game: 1 });
        log.record(&GameEvent::from(&LockEvent {
            shape: Shape::T,
            lines_cleared: 2,
            total_lines: 5,
            game_over: false,
        }));
        log.record(&GameEvent::GameOver { total_lines: 5 });
        log.record(&GameEvent::Quit);

        let bytes = log.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);

        let locked: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(locked["type"], "locked");
        assert_eq!(locked["shape"], "T");
        assert_eq!(locked["lines_cleared"], 2);
        assert_eq!(locked["total_lines"], 5);

        assert_eq!(lines[0], r#"{"type":"new_game","seed":9,"game":1}"#);
        assert_eq!(lines[3], r#"{"type":"quit"}"#);
    }

    #[test]
    fn test_write_failure_disables_log() {
        let mut log = EventLog::to_writer(FailingWriter);
        assert!(log.is_enabled());
        log.record(&GameEvent::Quit);
        assert!(!log.is_enabled());
        log.record(&GameEvent::Quit);
    }

    #[test]
    fn test_unopenable_path_is_disabled() {
        let log = EventLog::open("/nonexistent-dir/for/sure/log.jsonl");
        assert!(!log.is_enabled());
        assert!(!EventLog::from_path(None).is_enabled());
    }
}
