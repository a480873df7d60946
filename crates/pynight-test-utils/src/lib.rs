//! Testing utilities for the pynight workspace
//!
//! Shared fixtures: temp files, readers that fail part-way, a tracker that
//! records when a scoped resource is released, and an in-memory log sink.

#![allow(missing_docs)]

use std::cell::Cell;
use std::io::{self, Read, Write};
use std::path::Path;
use std::rc::Rc;
use std::sync::{Arc, Mutex, PoisonError};
use tempfile::NamedTempFile;
use tracing_subscriber::fmt::MakeWriter;

pub fn temp_file_with(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

pub fn temp_text_file(contents: &str) -> NamedTempFile {
    temp_file_with(contents.as_bytes())
}

/// Hands out `prefix`, then fails every later read
#[derive(Debug)]
pub struct FailingReader {
    prefix: Vec<u8>,
    pos: usize,
}

impl FailingReader {
    pub fn after(prefix: &str) -> Self {
        Self {
            prefix: prefix.as_bytes().to_vec(),
            pos: 0,
        }
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos >= self.prefix.len() {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "truncated source"));
        }
        let n = buf.len().min(self.prefix.len() - self.pos);
        buf[..n].copy_from_slice(&self.prefix[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

/// Counts release-hook invocations
#[derive(Debug, Clone, Default)]
pub struct ReleaseTracker {
    count: Rc<Cell<usize>>,
}

impl ReleaseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hook(&self) -> impl FnOnce(&Path) + 'static {
        let count = Rc::clone(&self.count);
        move |_: &Path| count.set(count.get() + 1)
    }

    pub fn releases(&self) -> usize {
        self.count.get()
    }

    pub fn released(&self) -> bool {
        self.releases() > 0
    }
}

/// In-memory sink for a `tracing_subscriber::fmt` subscriber
#[derive(Debug, Clone, Default)]
pub struct LogCapture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Number of captured lines containing `needle`
    pub fn count(&self, needle: &str) -> usize {
        self.contents().lines().filter(|line| line.contains(needle)).count()
    }
}

impl Write for LogCapture {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
