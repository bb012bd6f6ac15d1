//! Destinations for position/velocity snapshots.

use crate::buffer::NumericBuffer;
use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// How a snapshot treats what the sink already holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Discard previous snapshots first
    Truncate,
    /// Add after previous snapshots
    Append,
}

/// Receives one line of positions and one line of velocities per snapshot.
pub trait SnapshotSink {
    /// Clear both streams, creating them if needed.
    fn reset(&mut self) -> Result<()>;

    /// Record the current state of both buffers.
    fn record(
        &mut self,
        positions: &NumericBuffer,
        velocities: &NumericBuffer,
        mode: WriteMode,
    ) -> Result<()>;
}

/// Writes snapshots to `<prefix>_positions.csv` and `<prefix>_velocities.csv`.
#[derive(Debug, Clone)]
pub struct CsvSink {
    positions_path: PathBuf,
    velocities_path: PathBuf,
}

impl CsvSink {
    pub fn new(prefix: impl AsRef<Path>) -> Self {
        let prefix = prefix.as_ref().as_os_str();
        Self {
            positions_path: Self::suffixed(prefix, "_positions.csv"),
            velocities_path: Self::suffixed(prefix, "_velocities.csv"),
        }
    }

    fn suffixed(prefix: &OsStr, suffix: &str) -> PathBuf {
        let mut path = prefix.to_os_string();
        path.push(suffix);
        PathBuf::from(path)
    }

    pub fn positions_path(&self) -> &Path {
        &self.positions_path
    }

    pub fn velocities_path(&self) -> &Path {
        &self.velocities_path
    }

    fn open(path: &Path, mode: WriteMode) -> Result<File> {
        let mut options = OpenOptions::new();
        options.create(true);
        match mode {
            WriteMode::Truncate => options.write(true).truncate(true),
            WriteMode::Append => options.append(true),
        };
        options.open(path).map_err(|e| Error::io(path, e))
    }

    fn write_line(path: &Path, buffer: &NumericBuffer, mode: WriteMode) -> Result<()> {
        let mut writer = BufWriter::new(Self::open(path, mode)?);
        buffer
            .write_csv(&mut writer)
            .and_then(|()| writer.flush())
            .map_err(|e| Error::io(path, e))
    }
}

impl SnapshotSink for CsvSink {
    fn reset(&mut self) -> Result<()> {
        Self::open(&self.positions_path, WriteMode::Truncate)?;
        Self::open(&self.velocities_path, WriteMode::Truncate)?;
        Ok(())
    }

    fn record(
        &mut self,
        positions: &NumericBuffer,
        velocities: &NumericBuffer,
        mode: WriteMode,
    ) -> Result<()> {
        tracing::debug!(path = %self.positions_path.display(), "export particle positions");
        Self::write_line(&self.positions_path, positions, mode)?;
        tracing::debug!(path = %self.velocities_path.display(), "export particle velocities");
        Self::write_line(&self.velocities_path, velocities, mode)
    }
}

/// Keeps snapshot lines in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub positions: Vec<String>,
    pub velocities: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of snapshots currently held.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl SnapshotSink for MemorySink {
    fn reset(&mut self) -> Result<()> {
        self.positions.clear();
        self.velocities.clear();
        Ok(())
    }

    fn record(
        &mut self,
        positions: &NumericBuffer,
        velocities: &NumericBuffer,
        mode: WriteMode,
    ) -> Result<()> {
        if mode == WriteMode::Truncate {
            self.reset()?;
        }
        self.positions.push(positions.to_csv_line());
        self.velocities.push(velocities.to_csv_line());
        Ok(())
    }
}
