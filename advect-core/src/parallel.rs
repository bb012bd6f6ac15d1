//! Fixed-size worker pool for chunked initialization and stepping.

use crate::config::WORKERS;
use crate::engine::UpdateModel;
use crate::error::Result;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// A pool of OS threads that each take one contiguous chunk of the particle
/// buffers per call. Every call returns only after all chunks are done.
pub struct Workers {
    pool: ThreadPool,
    threads: usize,
}

impl Workers {
    pub fn new(threads: usize) -> Result<Self> {
        let threads = threads.max(1);
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("advect-worker-{i}"))
            .build()?;
        Ok(Self { pool, threads })
    }

    /// Pool with [`WORKERS`] threads.
    pub fn with_default_threads() -> Result<Self> {
        Self::new(WORKERS)
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Length of each chunk when `len` particles are split across the pool.
    /// The last chunk may be shorter.
    pub fn chunk_len(&self, len: usize) -> usize {
        len.div_ceil(self.threads).max(1)
    }

    /// Run `f(offset, chunk)` over contiguous chunks of `data`, where
    /// `offset` is the index of the chunk's first element.
    pub fn for_each_chunk<F>(&self, data: &mut [f64], f: F)
    where
        F: Fn(usize, &mut [f64]) + Sync,
    {
        let chunk = self.chunk_len(data.len());
        self.pool.install(|| {
            data.par_chunks_mut(chunk)
                .enumerate()
                .for_each(|(i, part)| f(i * chunk, part));
        });
    }

    /// [`UpdateModel::step`] applied chunk by chunk.
    pub fn step(
        &self,
        model: &UpdateModel,
        positions: &mut [f64],
        velocities: &mut [f64],
        time: f64,
        dt: f64,
    ) {
        debug_assert_eq!(positions.len(), velocities.len());
        let chunk = self.chunk_len(positions.len());
        self.pool.install(|| {
            positions
                .par_chunks_mut(chunk)
                .zip(velocities.par_chunks_mut(chunk))
                .for_each(|(pos, vel)| model.step(pos, vel, time, dt));
        });
    }
}

impl std::fmt::Debug for Workers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workers")
            .field("threads", &self.threads)
            .finish()
    }
}
