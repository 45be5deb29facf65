//! Runs a [`BoardSession`] behind an event queue.
//!
//! Events are applied one at a time in arrival order on a single task, and
//! each resulting snapshot is published on a watch channel for renderers.

use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::domain::Board;
use crate::drag::DragItem;
use crate::error::{DragboardError, Result};
use crate::session::{BoardEvent, BoardSession};

pub struct SessionHandle {
    events: mpsc::UnboundedSender<BoardEvent>,
    snapshots: watch::Receiver<Arc<Board>>,
    overlay: watch::Receiver<Option<DragItem>>,
    worker: JoinHandle<BoardSession>,
}

/// Moves the session onto a tokio task. Must be called from within a runtime.
pub fn spawn_session(session: BoardSession) -> SessionHandle {
    let (events, mut inbox) = mpsc::unbounded_channel::<BoardEvent>();
    let (snapshot_tx, snapshots) = watch::channel(session.snapshot());
    let (overlay_tx, overlay) = watch::channel(session.active_item());

    let worker = tokio::spawn(async move {
        let mut session = session;
        while let Some(event) = inbox.recv().await {
            let snapshot = session.dispatch(event);
            snapshot_tx.send_if_modified(|current| {
                if Arc::ptr_eq(current, &snapshot) {
                    return false;
                }
                *current = snapshot;
                true
            });

            let active = session.active_item();
            overlay_tx.send_if_modified(|current| {
                if *current == active {
                    return false;
                }
                *current = active;
                true
            });
        }
        debug!("board session event queue closed");
        session
    });

    SessionHandle {
        events,
        snapshots,
        overlay,
        worker,
    }
}

impl SessionHandle {
    /// Queues an event for the session
    pub fn send(&self, event: impl Into<BoardEvent>) -> Result<()> {
        self.events
            .send(event.into())
            .map_err(|_| DragboardError::SessionClosed)
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> Arc<Board> {
        self.snapshots.borrow().clone()
    }

    pub fn active_item(&self) -> Option<DragItem> {
        self.overlay.borrow().clone()
    }

    /// A receiver notified on every board change
    pub fn subscribe(&self) -> watch::Receiver<Arc<Board>> {
        self.snapshots.clone()
    }

    /// A receiver notified whenever the dragged item changes
    pub fn subscribe_overlay(&self) -> watch::Receiver<Option<DragItem>> {
        self.overlay.clone()
    }

    /// Closes the queue, waits for pending events to drain and hands the
    /// session back
    pub async fn shutdown(self) -> Result<BoardSession> {
        drop(self.events);
        self.worker.await.map_err(|_| DragboardError::SessionClosed)
    }
}
