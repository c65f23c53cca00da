//! Hand-off queue between the generation worker and the world.
//!
//! A single-producer/single-consumer FIFO: the worker owns the sender
//! half, the world owns the receiver half, and a built chunk moves through
//! it exactly once. The producer never blocks (the queue is unbounded; the
//! memory-versus-backpressure trade-off is deliberate) and the consumer
//! polls without blocking, at most once per frame, so uploads amortize
//! across frames instead of stalling the render loop.

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};

use crate::mesh::BuiltChunk;

/// Creates a connected hand-off queue pair.
#[must_use]
pub fn handoff_queue() -> (HandoffSender, HandoffReceiver) {
    let (tx, rx) = unbounded();
    (HandoffSender { tx }, HandoffReceiver { rx })
}

/// Producer half of the hand-off queue, owned by the generation worker.
#[derive(Debug)]
pub struct HandoffSender {
    tx: Sender<BuiltChunk>,
}

impl HandoffSender {
    /// Pushes a built chunk without blocking.
    ///
    /// Returns `false` if the consumer half has been dropped (the world is
    /// tearing down); the payload is discarded in that case.
    pub fn push(&self, built: BuiltChunk) -> bool {
        self.tx.send(built).is_ok()
    }
}

/// Consumer half of the hand-off queue, owned by the world.
#[derive(Debug)]
pub struct HandoffReceiver {
    rx: Receiver<BuiltChunk>,
}

impl HandoffReceiver {
    /// Pops the oldest pending build, if any, without blocking.
    ///
    /// Ownership of the payload transfers to the caller.
    #[must_use]
    pub fn try_pop(&self) -> Option<BuiltChunk> {
        match self.rx.try_recv() {
            Ok(built) => Some(built),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Returns the number of builds currently queued.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    /// Returns true if no builds are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ChunkBuilder;
    use crate::config::GenConfig;
    use veldt_common::ChunkCoord;

    fn built(x: i32, z: i32) -> BuiltChunk {
        ChunkBuilder::from_config(GenConfig {
            chunk_size: 2,
            ..Default::default()
        })
        .build(ChunkCoord::new(x, z))
    }

    #[test]
    fn test_fifo_order() {
        let (tx, rx) = handoff_queue();
        for x in 0..5 {
            assert!(tx.push(built(x * 2, 0)));
        }
        for x in 0..5 {
            let popped = rx.try_pop().expect("queued build missing");
            assert_eq!(popped.coord, ChunkCoord::new(x * 2, 0));
        }
        assert!(rx.try_pop().is_none());
    }

    #[test]
    fn test_try_pop_empty() {
        let (_tx, rx) = handoff_queue();
        assert!(rx.is_empty());
        assert!(rx.try_pop().is_none());
    }

    #[test]
    fn test_push_after_consumer_dropped() {
        let (tx, rx) = handoff_queue();
        drop(rx);
        assert!(!tx.push(built(0, 0)));
    }

    #[test]
    fn test_fifo_across_threads() {
        let (tx, rx) = handoff_queue();
        let producer = std::thread::spawn(move || {
            for x in 0..32 {
                assert!(tx.push(built(x * 2, 0)));
            }
        });

        let mut seen = Vec::new();
        while seen.len() < 32 {
            if let Some(b) = rx.try_pop() {
                seen.push(b.coord.x);
            } else {
                std::thread::yield_now();
            }
        }
        producer.join().expect("producer thread panicked");

        let expected: Vec<i32> = (0..32).map(|x| x * 2).collect();
        assert_eq!(seen, expected);
    }
}
