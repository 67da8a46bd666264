#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use rustylog::log::ProcessLogger;

/// Console stand-in that records every write and every flush.
#[derive(Clone, Default)]
pub struct Capture {
    bytes: Arc<Mutex<Vec<u8>>>,
    flushes: Arc<Mutex<usize>>,
}

impl Capture {
    pub fn text(&self) -> String {
        String::from_utf8(self.bytes.lock().unwrap().clone()).unwrap()
    }

    pub fn flushes(&self) -> usize {
        *self.flushes.lock().unwrap()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        *self.flushes.lock().unwrap() += 1;
        Ok(())
    }
}

pub fn captured_logger() -> (ProcessLogger, Capture) {
    let cap = Capture::default();
    (ProcessLogger::with_console(Box::new(cap.clone())), cap)
}

/// Splits a rendered line into (timestamp, level, thread, message).
pub fn split_line(line: &str) -> (&str, &str, &str, &str) {
    let rest = line.strip_prefix('[').unwrap();
    let (ts, rest) = rest.split_once("] [").unwrap();
    let (level, rest) = rest.split_once("] [Thread ").unwrap();
    let (thread, msg) = rest.split_once("] ").unwrap();
    (ts, level, thread, msg)
}
