//! Serial completion queue
//!
//! Completion handlers for a client run one at a time, in the order they were
//! queued, on a single worker task.

use std::sync::OnceLock;

use tokio::sync::mpsc;
use tracing::{debug, warn};

type Completion = Box<dyn FnOnce() + Send + 'static>;

/// Ordered delivery channel for completion handlers
///
/// The worker task is spawned on first use, so the queue can be created
/// outside a Tokio runtime. It stops once the queue is dropped and every
/// queued completion has run.
#[derive(Default)]
pub struct CompletionQueue {
    sender: OnceLock<mpsc::UnboundedSender<Completion>>,
}

impl CompletionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a completion
    ///
    /// Must be called from within a Tokio runtime. If the worker is gone the
    /// completion runs inline so it is never dropped.
    pub fn deliver<F>(&self, completion: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let sender = self.sender.get_or_init(spawn_worker);

        if let Err(mpsc::error::SendError(completion)) = sender.send(Box::new(completion)) {
            warn!("completion worker stopped; running completion inline");
            completion();
        }
    }
}

fn spawn_worker() -> mpsc::UnboundedSender<Completion> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<Completion>();

    tokio::spawn(async move {
        while let Some(completion) = receiver.recv().await {
            completion();
        }
        debug!("completion queue closed");
    });

    sender
}
