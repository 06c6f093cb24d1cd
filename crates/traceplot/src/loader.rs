// File: crates/traceplot/src/loader.rs
// Summary: Memory-mapped loader for raw little-endian f32 trace files.

use std::fs::File;
use std::path::{Path, PathBuf};

use memmap2::Mmap;
use thiserror::Error;

/// Width of one sample on disk, in bytes.
pub const SAMPLE_SIZE: usize = 4;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open trace file '{}'", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("trace file '{}' is empty", path.display())]
    Empty { path: PathBuf },

    #[error("trace file '{}' is {len} bytes, not a multiple of 4 (truncated sample?)", path.display())]
    TrailingBytes { path: PathBuf, len: u64 },
}

/// A raw trace file, memory-mapped for the duration of the run. The file is
/// never copied into an owned buffer; the map is released when the value
/// drops, on every exit path.
pub struct TraceFile {
    mmap: Mmap,
}

impl TraceFile {
    /// Open a trace file read-only and validate its length: it must be a
    /// positive multiple of the 4-byte sample size.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let open_err = |source| LoadError::Open { path: path.to_path_buf(), source };

        let file = File::open(path).map_err(open_err)?;
        let len = file.metadata().map_err(open_err)?.len();
        if len == 0 {
            return Err(LoadError::Empty { path: path.to_path_buf() });
        }
        if len % SAMPLE_SIZE as u64 != 0 {
            return Err(LoadError::TrailingBytes { path: path.to_path_buf(), len });
        }

        // Safety: mapped read-only; the producer is done writing by the time
        // the plot runs.
        let mmap = unsafe { Mmap::map(&file) }.map_err(open_err)?;
        Ok(Self { mmap })
    }

    pub fn sample_count(&self) -> usize {
        self.mmap.len() / SAMPLE_SIZE
    }

    /// Decode samples in file order: each aligned 4-byte chunk is one
    /// little-endian f32.
    pub fn samples(&self) -> impl Iterator<Item = f32> + '_ {
        self.mmap
            .chunks_exact(SAMPLE_SIZE)
            .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }
}
