//! Background generation worker.
//!
//! One worker thread per world, started at most once. It expands a ring of
//! chunk coordinates around the observation point, builds every coordinate
//! it has not requested before, and pushes the results into the hand-off
//! queue. It owns its requested-coordinate set outright; the world's chunk
//! registry is never touched from this thread, so neither side needs a
//! lock on its own bookkeeping.
//!
//! Shutdown is cooperative: the stop flag is checked every coordinate
//! iteration, and [`GenerationWorker::stop`] joins the thread, so the
//! worker can never outlive the data it references.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use ahash::AHashSet;
use tracing::{debug, info, warn};
use veldt_common::ChunkCoord;

use crate::builder::ChunkBuilder;
use crate::config::GenConfig;
use crate::handoff::HandoffSender;
use crate::observation::ObservationPoint;

/// Handle to the background generation thread.
#[derive(Debug)]
pub struct GenerationWorker {
    handle: Option<JoinHandle<()>>,
    stop: Arc<AtomicBool>,
}

impl GenerationWorker {
    /// Spawns the generation thread.
    #[must_use]
    pub fn spawn(
        config: GenConfig,
        observation: Arc<ObservationPoint>,
        sender: HandoffSender,
    ) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);
        let handle = std::thread::Builder::new()
            .name("veldt-generation".into())
            .spawn(move || generation_loop(&config, &observation, &sender, &thread_stop));
        let handle = match handle {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!("failed to spawn generation thread: {e}");
                None
            },
        };

        Self { handle, stop }
    }

    /// Returns true if the thread has exited (ceiling reached or stopped).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Signals the worker to stop and waits for it to exit.
    ///
    /// After this returns the thread no longer references the observation
    /// point or the queue. Idempotent.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                debug!("generation worker panicked before join");
            }
        }
    }
}

impl Drop for GenerationWorker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Body of the generation thread.
fn generation_loop(
    config: &GenConfig,
    observation: &ObservationPoint,
    sender: &HandoffSender,
    stop: &AtomicBool,
) {
    let builder = ChunkBuilder::from_config(config.clone());
    let mut requested: AHashSet<ChunkCoord> = AHashSet::new();
    let mut produced: usize = 0;
    let radius = config.generation_radius;

    info!(
        radius,
        ceiling = config.chunk_ceiling,
        "generation worker started"
    );

    loop {
        let position = observation.position();
        let center = ChunkCoord::align(
            position.x as i32,
            position.z as i32,
            config.chunk_size,
        );

        let mut produced_this_pass = 0_usize;
        for dx in -radius..=radius {
            for dz in -radius..=radius {
                if stop.load(Ordering::Relaxed) {
                    debug!(produced, "generation worker stopped");
                    return;
                }
                if produced >= config.chunk_ceiling {
                    info!(produced, "chunk ceiling reached, generation worker exiting");
                    return;
                }

                let coord = center.offset(dx, dz, config.chunk_size);
                if !requested.insert(coord) {
                    continue;
                }

                let built = builder.build(coord);
                if !sender.push(built) {
                    // Consumer gone: the world is tearing down.
                    debug!(produced, "hand-off queue closed, generation worker exiting");
                    return;
                }
                produced += 1;
                produced_this_pass += 1;
            }
        }

        if stop.load(Ordering::Relaxed) {
            debug!(produced, "generation worker stopped");
            return;
        }
        // Everything in range is already requested; idle until the
        // observation point moves.
        if produced_this_pass == 0 {
            std::thread::sleep(Duration::from_millis(1));
        }
    }
}
