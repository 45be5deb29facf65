//! Render-facing projections of a board snapshot.

use serde::Serialize;

use crate::domain::{Board, Column, Task};
use crate::drag::DragItem;
use crate::error::Result;

/// A column together with its tasks, top to bottom
#[derive(Debug, Clone, Serialize)]
pub struct ColumnView<'a> {
    #[serde(flatten)]
    pub column: &'a Column,
    pub tasks: Vec<&'a Task>,
}

impl<'a> ColumnView<'a> {
    pub fn new(board: &'a Board, column: &'a Column) -> Self {
        Self {
            column,
            tasks: board.tasks_in_column(column.id),
        }
    }
}

/// Columns left to right, each with its tasks
#[derive(Debug, Clone, Serialize)]
pub struct BoardView<'a> {
    pub columns: Vec<ColumnView<'a>>,
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            columns: board
                .columns
                .iter()
                .map(|column| ColumnView::new(board, column))
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// What to draw under the pointer while dragging
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "item")]
pub enum DragOverlay<'a> {
    Column(ColumnView<'a>),
    Task(&'a Task),
}

impl<'a> DragOverlay<'a> {
    /// A dragged column is drawn with its current tasks; a dragged task is
    /// drawn as it was picked up.
    pub fn new(board: &'a Board, item: &'a DragItem) -> Self {
        match item {
            DragItem::Column(column) => Self::Column(ColumnView::new(board, column)),
            DragItem::Task(task) => Self::Task(task),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
