//! Bounded, blocking handoff of text lines between file readers and
//! counting workers.
//!
//! The queue is a `crossbeam-channel` bounded channel wrapped in domain
//! endpoints. The channel already provides the contract the workers rely
//! on: capacity is never exceeded, order is FIFO, a full queue blocks the
//! sender, an empty queue blocks the receiver, and every state change
//! wakes the complementary side. Producer liveness is carried by the
//! sender handles themselves: each producer owns one [`LineSender`], and
//! once the last handle drops, `pop` drains whatever is buffered and then
//! reports exhaustion. The empty-queue/no-producers check is therefore a
//! single atomic observation inside the channel, not two independent
//! reads.

use crossbeam_channel::{Receiver, SendError, Sender};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Create a line queue holding at most `capacity` lines.
///
/// The returned sender counts as one live producer; clone it once per
/// producer worker and drop the original before waiting for consumers.
pub fn bounded(capacity: usize) -> (LineSender, LineReceiver) {
    let (tx, rx) = crossbeam_channel::bounded(capacity);
    let active = Arc::new(AtomicUsize::new(1));
    (
        LineSender {
            tx,
            active: Arc::clone(&active),
        },
        LineReceiver { rx, active },
    )
}

/// Producer endpoint. Each live handle represents one active producer.
#[derive(Debug)]
pub struct LineSender {
    tx: Sender<String>,
    active: Arc<AtomicUsize>,
}

impl LineSender {
    /// Append a line, blocking while the queue is at capacity.
    ///
    /// Fails only when every receiver is gone, which means the consumer
    /// pool has been torn down and the producer should stop.
    pub fn push(&self, line: String) -> Result<(), SendError<String>> {
        self.tx.send(line)
    }

    /// Number of producer handles currently alive.
    pub fn active_producers(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }
}

impl Clone for LineSender {
    fn clone(&self) -> Self {
        self.active.fetch_add(1, Ordering::SeqCst);
        Self {
            tx: self.tx.clone(),
            active: Arc::clone(&self.active),
        }
    }
}

impl Drop for LineSender {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Consumer endpoint. Cloneable; every consumer pops from the same FIFO.
#[derive(Debug, Clone)]
pub struct LineReceiver {
    rx: Receiver<String>,
    active: Arc<AtomicUsize>,
}

impl LineReceiver {
    /// Remove the oldest line, blocking while the queue is empty and any
    /// producer is still alive.
    ///
    /// Returns `None` exactly when the queue is empty and no producer
    /// remains, i.e. when all work has been handed out.
    pub fn pop(&self) -> Option<String> {
        self.rx.recv().ok()
    }

    /// Lines currently buffered. Never exceeds the construction capacity.
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }

    /// Number of producer handles currently alive.
    pub fn active_producers(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }
}
