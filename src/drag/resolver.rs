use tracing::{debug, trace, warn};

use crate::domain::{Board, Column, MoveTarget, Task};
use crate::drag::event::{DragEvent, DragItem, DropTarget, ItemRef};

/// Drag gesture state
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    DraggingColumn(Column),
    DraggingTask(Task),
}

impl DragState {
    fn active_ref(&self) -> Option<ItemRef> {
        match self {
            Self::Idle => None,
            Self::DraggingColumn(column) => Some(ItemRef::Column(column.id)),
            Self::DraggingTask(task) => Some(ItemRef::Task(task.id)),
        }
    }
}

/// Turns drag lifecycle events into board operations.
///
/// Tasks are moved live on every hover so the board always shows where the
/// card would land. Columns are only reordered on drop.
#[derive(Debug, Default)]
pub struct DragResolver {
    state: DragState,
}

impl DragResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state != DragState::Idle
    }

    /// The item picked up by the current gesture, for overlay rendering
    pub fn active_item(&self) -> Option<DragItem> {
        match &self.state {
            DragState::Idle => None,
            DragState::DraggingColumn(column) => Some(DragItem::Column(column.clone())),
            DragState::DraggingTask(task) => Some(DragItem::Task(task.clone())),
        }
    }

    /// Feeds one event through the state machine. Returns the new board when
    /// the event changed it.
    pub fn handle(&mut self, board: &Board, event: DragEvent) -> Option<Board> {
        match event {
            DragEvent::Start { item } => {
                self.drag_start(item);
                None
            }
            DragEvent::Over { active, over } => self.drag_over(board, active, over),
            DragEvent::End { active, over } => self.drag_end(board, active, over),
        }
    }

    pub fn drag_start(&mut self, item: DragItem) {
        if let Some(previous) = self.state.active_ref() {
            warn!(%previous, next = %item.item_ref(), "drag started before previous gesture ended");
        }

        debug!(item = %item.item_ref(), "drag started");
        self.state = match item {
            DragItem::Column(column) => DragState::DraggingColumn(column),
            DragItem::Task(task) => DragState::DraggingTask(task),
        };
    }

    pub fn drag_over(
        &mut self,
        board: &Board,
        active: ItemRef,
        over: Option<DropTarget>,
    ) -> Option<Board> {
        if !self.owns(active) {
            trace!(%active, "ignoring drag over from stale gesture");
            return None;
        }

        let over = over.filter(|target| !target.is_item(active))?;

        // Columns only move on drop.
        let ItemRef::Task(task_id) = active else {
            return None;
        };

        let target = match over {
            DropTarget::Task(over_id) => MoveTarget::Task(over_id),
            DropTarget::Column(column_id) => {
                if board.column(column_id).is_none() {
                    trace!(column = %column_id, "ignoring hover over unknown column");
                    return None;
                }
                MoveTarget::Column(column_id)
            }
            DropTarget::Other => return None,
        };

        let next = board.move_task(task_id, target);
        if next == *board {
            return None;
        }

        debug!(task = %task_id, ?target, "task moved during drag");
        Some(next)
    }

    pub fn drag_end(
        &mut self,
        board: &Board,
        active: ItemRef,
        over: Option<DropTarget>,
    ) -> Option<Board> {
        if !self.owns(active) {
            trace!(%active, "ignoring drag end from stale gesture");
            return None;
        }

        let state = std::mem::take(&mut self.state);
        debug!(%active, ?over, "drag ended");

        let DragState::DraggingColumn(column) = state else {
            // Task moves were already applied while hovering.
            return None;
        };

        match over {
            Some(DropTarget::Column(target)) if target != column.id => {
                let next = board.reorder_columns(column.id, target);
                if next == *board {
                    return None;
                }
                debug!(column = %column.id, %target, "columns reordered");
                Some(next)
            }
            _ => None,
        }
    }

    fn owns(&self, active: ItemRef) -> bool {
        self.state.active_ref() == Some(active)
    }
}
