//! The world: chunk registry, generation lifecycle, and per-frame passes.
//!
//! The world is the sole writer of the chunk registry; the generation
//! worker never sees it. The only bridge between the two threads is the
//! hand-off queue, and at most one queued build is consumed per tick so
//! mesh uploads amortize across frames.

use std::sync::Arc;

use ahash::AHashMap;
use tracing::{debug, info, warn};
use veldt_common::{ChunkCoord, WorldError, WorldResult};

use crate::config::GenConfig;
use crate::handoff::{handoff_queue, HandoffReceiver};
use crate::mesh::Chunk;
use crate::observation::ObservationPoint;
use crate::render::{Drawable, MeshUpload, Updatable};
use crate::worker::GenerationWorker;

/// The authoritative terrain world, generic over the GPU mesh handle type
/// produced by the upload collaborator.
pub struct World<H> {
    config: GenConfig,
    observation: Option<Arc<ObservationPoint>>,
    /// Authoritative chunk registry; written only from the owning thread.
    chunks: AHashMap<ChunkCoord, Chunk<H>>,
    drawables: Vec<Box<dyn Drawable>>,
    updatables: Vec<Box<dyn Updatable>>,
    queue: Option<HandoffReceiver>,
    worker: Option<GenerationWorker>,
}

impl<H> World<H> {
    /// Creates an idle world with the given generation parameters.
    #[must_use]
    pub fn new(config: GenConfig) -> Self {
        Self {
            config,
            observation: None,
            chunks: AHashMap::new(),
            drawables: Vec::new(),
            updatables: Vec::new(),
            queue: None,
            worker: None,
        }
    }

    /// Attaches the observation point generation will center on.
    pub fn set_observation_point(&mut self, point: Arc<ObservationPoint>) {
        self.observation = Some(point);
    }

    /// Starts background generation around the attached observation point.
    ///
    /// No-op if generation is already running (the worker is started once
    /// and never restarted, even after it exits at the chunk ceiling).
    /// Starting without an observation point is rejected with an error,
    /// since the worker would have nothing to recenter on.
    pub fn start_generation(&mut self) -> WorldResult<()> {
        if self.worker.is_some() {
            debug!("generation already started, ignoring");
            return Ok(());
        }
        let Some(observation) = self.observation.clone() else {
            warn!("no observation point attached, refusing to start generation");
            return Err(WorldError::NoObservationPoint);
        };
        if self.updatables.len() > self.config.world_object_ceiling {
            warn!(
                world_objects = self.updatables.len(),
                ceiling = self.config.world_object_ceiling,
                "world object ceiling exceeded, refusing to start generation"
            );
            return Ok(());
        }

        let (sender, receiver) = handoff_queue();
        self.queue = Some(receiver);
        self.worker = Some(GenerationWorker::spawn(
            self.config.clone(),
            observation,
            sender,
        ));
        info!("world generation started");
        Ok(())
    }

    /// Returns true if generation has been started.
    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.worker.is_some()
    }

    /// Returns true if the generation thread has exited (ceiling reached
    /// or stopped). An idle world reports true.
    #[must_use]
    pub fn generation_finished(&self) -> bool {
        self.worker.as_ref().map_or(true, GenerationWorker::is_finished)
    }

    /// Registers an object drawn every tick, after the chunk meshes.
    pub fn add_drawable(&mut self, drawable: Box<dyn Drawable>) {
        self.drawables.push(drawable);
    }

    /// Registers an object updated every tick.
    pub fn add_updatable(&mut self, updatable: Box<dyn Updatable>) {
        self.updatables.push(updatable);
    }

    /// Returns the number of chunks in the registry.
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Returns the chunk at a coordinate, if present.
    #[must_use]
    pub fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk<H>> {
        self.chunks.get(&coord)
    }

    /// Iterates over all registered chunks.
    pub fn chunks(&self) -> impl Iterator<Item = &Chunk<H>> {
        self.chunks.values()
    }

    /// Stops generation and releases everything the world owns.
    ///
    /// The worker is signalled and joined before any owned data is
    /// dropped, so the background thread can never observe freed memory.
    /// Queued builds that were never uploaded are discarded; terrain is
    /// regenerable, so nothing of value is lost. Idempotent; also invoked
    /// on drop.
    pub fn shutdown(&mut self) {
        if let Some(mut worker) = self.worker.take() {
            worker.stop();
        }
        if let Some(queue) = self.queue.take() {
            let mut discarded = 0_usize;
            while queue.try_pop().is_some() {
                discarded += 1;
            }
            if discarded > 0 {
                debug!(discarded, "dropped pending chunk builds during shutdown");
            }
        }
        self.chunks.clear();
        self.drawables.clear();
        self.updatables.clear();
        info!("world shut down");
    }
}

impl<H: Drawable> World<H> {
    /// Advances the world by one frame.
    ///
    /// Consumes at most one completed build from the hand-off queue,
    /// uploading it through `uploader` and registering the resulting
    /// chunk; then updates every updatable and draws every chunk mesh and
    /// every drawable, in insertion order.
    ///
    /// An upload failure propagates to the caller and the payload is
    /// dropped, not re-enqueued: the worker will not rebuild a coordinate
    /// it already produced, so that tile of terrain stays absent for the
    /// lifetime of this worker run.
    pub fn tick<U>(&mut self, delta_time: f32, uploader: &mut U) -> WorldResult<()>
    where
        U: MeshUpload<Handle = H>,
    {
        self.consume_one_build(uploader)?;

        for updatable in &mut self.updatables {
            updatable.update(delta_time);
        }
        for chunk in self.chunks.values_mut() {
            chunk.mesh_mut().draw(delta_time);
        }
        for drawable in &mut self.drawables {
            drawable.draw(delta_time);
        }
        Ok(())
    }

    /// Pops at most one build from the queue and registers it.
    fn consume_one_build<U>(&mut self, uploader: &mut U) -> WorldResult<()>
    where
        U: MeshUpload<Handle = H>,
    {
        let Some(built) = self.queue.as_ref().and_then(HandoffReceiver::try_pop) else {
            return Ok(());
        };

        if self.chunks.len() >= self.config.chunk_ceiling {
            warn!(
                coord = ?built.coord,
                ceiling = self.config.chunk_ceiling,
                "chunk ceiling reached, dropping completed build"
            );
            return Ok(());
        }
        if self.chunks.contains_key(&built.coord) {
            warn!(coord = ?built.coord, "duplicate chunk build, dropping");
            return Ok(());
        }

        let handle = uploader.upload(&built.payload)?;
        // CPU-side mesh buffers (built.payload) drop here; only the height
        // grid and the GPU handle survive in the registry.
        self.chunks
            .insert(built.coord, Chunk::new(built.coord, built.heights, handle));
        Ok(())
    }
}

impl<H> Drop for World<H> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
