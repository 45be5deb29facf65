use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{Column, ColumnId, Task, TaskId};

/// Payload captured when a drag gesture starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "item")]
pub enum DragItem {
    Column(Column),
    Task(Task),
}

impl DragItem {
    pub fn item_ref(&self) -> ItemRef {
        match self {
            Self::Column(column) => ItemRef::Column(column.id),
            Self::Task(task) => ItemRef::Task(task.id),
        }
    }
}

/// Identity and kind of the item being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id")]
pub enum ItemRef {
    Column(ColumnId),
    Task(TaskId),
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column(id) => write!(f, "column {}", id),
            Self::Task(id) => write!(f, "task {}", id),
        }
    }
}

/// What the pointer is currently hovering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id")]
pub enum DropTarget {
    Column(ColumnId),
    Task(TaskId),
    /// A droppable that is neither a column nor a task
    Other,
}

impl DropTarget {
    /// True when the target is the dragged item itself
    pub fn is_item(&self, item: ItemRef) -> bool {
        *self == Self::from(item)
    }
}

impl From<ItemRef> for DropTarget {
    fn from(item: ItemRef) -> Self {
        match item {
            ItemRef::Column(id) => Self::Column(id),
            ItemRef::Task(id) => Self::Task(id),
        }
    }
}

/// Drag lifecycle event forwarded by the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DragEvent {
    Start {
        item: DragItem,
    },
    Over {
        active: ItemRef,
        over: Option<DropTarget>,
    },
    End {
        active: ItemRef,
        over: Option<DropTarget>,
    },
}
