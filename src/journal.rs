use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path as FsPath;

use tracing::debug;

/// Buffered, append-only journal of travel events.
#[derive(Debug, Clone)]
pub struct TravelLog<T> {
    entries: Vec<T>,
}

impl<T> Default for TravelLog<T> {
    fn default() -> Self {
        Self { entries: vec![] }
    }
}

impl<T: Display> TravelLog<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: T) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends every buffered entry as a line at the end of the file, creating it if missing.
    /// The buffer is cleared only once all the entries have been written.
    pub fn flush(&mut self, path: impl AsRef<FsPath>) -> std::io::Result<()> {
        let path = path.as_ref();
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut writer = BufWriter::new(file);

        for entry in &self.entries {
            writeln!(writer, "{entry}")?;
        }
        writer.flush()?;

        debug!("Flushed {} journal entries into {path:?}", self.entries.len());
        self.entries.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use test_log::test;

    use super::*;

    #[test]
    fn travel_log_flush_001() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.log");

        let mut log = TravelLog::new();
        log.add("Loaded map");
        log.add("Planned route A -> B");
        assert_eq!(log.len(), 2);

        log.flush(&path).unwrap();
        assert!(log.is_empty());

        log.add("Saved traveler");
        log.flush(&path).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Loaded map\nPlanned route A -> B\nSaved traveler\n"
        );
    }

    #[test]
    fn travel_log_flush_002() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("journal.log");

        let mut log = TravelLog::new();
        log.add(42);
        assert!(log.flush(&path).is_err());
        assert_eq!(log.entries(), [42]);
    }
}
