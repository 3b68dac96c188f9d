//! Shared test utilities for Flake ID tests

use std::collections::HashSet;
use std::io;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::clock::Clock;

/// Clock stuck at a single instant
#[derive(Debug)]
pub struct FixedClock {
    millis: u64,
    parks: AtomicUsize,
}

impl FixedClock {
    pub fn new(millis: u64) -> Self {
        Self {
            millis,
            parks: AtomicUsize::new(0),
        }
    }

    pub fn parks(&self) -> usize {
        self.parks.load(Ordering::SeqCst)
    }
}

impl Clock for FixedClock {
    fn current_millis(&self) -> u64 {
        self.millis
    }

    fn park_until(&self, _deadline: u64) {
        self.parks.fetch_add(1, Ordering::SeqCst);
    }
}

/// Clock replaying a fixed list of readings, one per call; the last one repeats forever.
/// Parking returns immediately, like a spurious wake.
#[derive(Debug)]
pub struct ScriptedClock {
    values: Vec<u64>,
    reads: AtomicUsize,
    parks: AtomicUsize,
}

impl ScriptedClock {
    pub fn new(values: impl IntoIterator<Item = u64>) -> Self {
        let values: Vec<u64> = values.into_iter().collect();
        assert!(!values.is_empty(), "scripted clock needs at least one reading");
        Self {
            values,
            reads: AtomicUsize::new(0),
            parks: AtomicUsize::new(0),
        }
    }

    /// `count` readings of `millis`, then `next` forever
    pub fn repeat_then(millis: u64, count: usize, next: u64) -> Self {
        Self::new(std::iter::repeat_n(millis, count).chain([next]))
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn parks(&self) -> usize {
        self.parks.load(Ordering::SeqCst)
    }
}

impl Clock for ScriptedClock {
    fn current_millis(&self) -> u64 {
        let index = self.reads.fetch_add(1, Ordering::SeqCst);
        self.values[index.min(self.values.len() - 1)]
    }

    fn park_until(&self, _deadline: u64) {
        self.parks.fetch_add(1, Ordering::SeqCst);
    }
}

/// Clock moved by hand; parking jumps straight to the deadline
#[derive(Debug)]
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    pub fn new(millis: u64) -> Self {
        Self {
            now: AtomicU64::new(millis),
        }
    }

    pub fn set(&self, millis: u64) {
        self.now.store(millis, Ordering::SeqCst);
    }

    pub fn advance(&self, millis: u64) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn current_millis(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }

    fn park_until(&self, deadline: u64) {
        self.now.fetch_max(deadline, Ordering::SeqCst);
    }
}

/// Current Unix time in milliseconds, independent of any generator
pub fn wall_clock_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before Unix epoch")
        .as_millis() as u64
}

/// Assert that all IDs in the collection are unique
pub fn assert_unique_ids(ids: &[u64], expected_count: usize) {
    let set: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(
        set.len(),
        expected_count,
        "Expected {} unique IDs, but got {} (duplicates detected)",
        expected_count,
        set.len()
    );
}

/// Assert that IDs are strictly increasing in the order given
pub fn assert_ids_monotonic(ids: &[u64]) {
    for pair in ids.windows(2) {
        assert!(pair[1] > pair[0], "ID {} is not greater than {}", pair[1], pair[0]);
    }
}

/// Assert collection has expected unique count and no ID has the sign bit set
pub fn assert_unique_and_positive(ids: &[u64], expected_count: usize) {
    assert_unique_ids(ids, expected_count);
    assert!(ids.iter().all(|id| (*id as i64) >= 0), "sign bit set on an ID");
}

/// Shared in-memory sink for a `tracing_subscriber::fmt` writer
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` under a DEBUG-level `fmt` subscriber and return its output lines
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    (result, output.lines().map(str::to_owned).collect())
}

/// Lines logged at WARN level
pub fn warn_lines(lines: &[String]) -> Vec<&String> {
    lines.iter().filter(|line| line.contains("WARN")).collect()
}
