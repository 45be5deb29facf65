use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::id::{ColumnId, TaskId};

/// A task card. The owning column is referenced by id; `column_id` is the
/// only source of truth for membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub column_id: ColumnId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with a fresh ID in the given column
    pub fn new(column_id: ColumnId, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: TaskId::new(),
            column_id,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the content
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }

    /// Reassigns the task to another column
    pub fn move_to_column(&mut self, column_id: ColumnId) {
        if self.column_id != column_id {
            self.column_id = column_id;
            self.updated_at = Utc::now();
        }
    }
}
