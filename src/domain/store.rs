use std::sync::Arc;

use crate::domain::board::Board;

/// Owns the current board snapshot.
///
/// Snapshots are shared as `Arc<Board>` and never mutated; publishing swaps
/// in a new one, so readers holding an older snapshot keep seeing it.
#[derive(Debug, Default)]
pub struct BoardStore {
    current: Arc<Board>,
}

impl BoardStore {
    pub fn new(board: Board) -> Self {
        Self {
            current: Arc::new(board),
        }
    }

    pub fn current(&self) -> &Board {
        &self.current
    }

    pub fn snapshot(&self) -> Arc<Board> {
        Arc::clone(&self.current)
    }

    /// Replaces the snapshot. Returns false when `board` equals the current one.
    pub fn publish(&mut self, board: Board) -> bool {
        if board == *self.current {
            return false;
        }
        self.current = Arc::new(board);
        true
    }

    /// Applies a board operation and publishes its result
    pub fn apply(&mut self, operation: impl FnOnce(&Board) -> Board) -> bool {
        let next = operation(&self.current);
        self.publish(next)
    }

    /// Drops every column and task, keeping the naming templates
    pub fn reset(&mut self) {
        let naming = self.current.naming.clone();
        self.current = Arc::new(Board::with_naming(naming));
    }
}
