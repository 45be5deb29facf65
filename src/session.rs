//! The board session ties the snapshot store to the drag resolver and is the
//! single entry point for user intents coming from the presentation layer.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, trace};

use crate::config::Config;
use crate::domain::{Board, BoardStore, ColumnId, TaskId};
use crate::drag::{ActivationSensor, DragEvent, DragItem, DragResolver, DropTarget, ItemRef, Point};

/// Every intent the presentation layer can forward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum BoardEvent {
    CreateColumn,
    DeleteColumn { id: ColumnId },
    RenameColumn { id: ColumnId, title: String },
    CreateTask { column_id: ColumnId },
    DeleteTask { id: TaskId },
    RenameTask { id: TaskId, content: String },
    Drag(DragEvent),
}

impl From<DragEvent> for BoardEvent {
    fn from(event: DragEvent) -> Self {
        Self::Drag(event)
    }
}

#[derive(Debug)]
pub struct BoardSession {
    store: BoardStore,
    resolver: DragResolver,
    sensor: ActivationSensor,
}

impl BoardSession {
    /// Starts a session on an empty board
    pub fn new(config: &Config) -> Self {
        Self {
            store: BoardStore::new(Board::with_naming(config.naming.clone())),
            resolver: DragResolver::new(),
            sensor: ActivationSensor::new(&config.drag),
        }
    }

    pub fn snapshot(&self) -> Arc<Board> {
        self.store.snapshot()
    }

    pub fn active_item(&self) -> Option<DragItem> {
        self.resolver.active_item()
    }

    pub fn is_dragging(&self) -> bool {
        self.resolver.is_dragging()
    }

    /// Processes one event to completion and returns the resulting snapshot
    pub fn dispatch(&mut self, event: BoardEvent) -> Arc<Board> {
        let changed = match event {
            BoardEvent::CreateColumn => self.store.apply(Board::create_column),
            BoardEvent::DeleteColumn { id } => self.store.apply(|board| board.delete_column(id)),
            BoardEvent::RenameColumn { id, title } => {
                self.store.apply(|board| board.rename_column(id, title))
            }
            BoardEvent::CreateTask { column_id } => {
                if self.store.current().column(column_id).is_none() {
                    trace!(column = %column_id, "ignoring task creation for unknown column");
                    false
                } else {
                    self.store.apply(|board| board.create_task(column_id))
                }
            }
            BoardEvent::DeleteTask { id } => self.store.apply(|board| board.delete_task(id)),
            BoardEvent::RenameTask { id, content } => {
                self.store.apply(|board| board.rename_task(id, content))
            }
            BoardEvent::Drag(event) => match self.resolver.handle(self.store.current(), event) {
                Some(next) => self.store.publish(next),
                None => false,
            },
        };

        if changed {
            let board = self.store.current();
            debug!(
                columns = board.columns.len(),
                tasks = board.tasks.len(),
                "board updated"
            );
        }
        self.store.snapshot()
    }

    /// Starts tracking a press on a column or task. Unknown items are ignored.
    pub fn pointer_down(&mut self, item: ItemRef, at: Point, editing: bool) {
        let board = self.store.current();
        let item = match item {
            ItemRef::Column(id) => board.column(id).cloned().map(DragItem::Column),
            ItemRef::Task(id) => board.task(id).cloned().map(DragItem::Task),
        };

        if let Some(item) = item {
            self.sensor.pointer_down(item, at, editing);
        }
    }

    pub fn pointer_move(&mut self, at: Point, over: Option<DropTarget>) -> Arc<Board> {
        for event in self.sensor.pointer_move(at, over) {
            self.dispatch(event.into());
        }
        self.store.snapshot()
    }

    pub fn pointer_up(&mut self, over: Option<DropTarget>) -> Arc<Board> {
        match self.sensor.pointer_up(over) {
            Some(event) => self.dispatch(event.into()),
            None => self.store.snapshot(),
        }
    }
}

impl Default for BoardSession {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
