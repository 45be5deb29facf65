use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::id::ColumnId;

/// A board column. Columns do not hold their tasks; tasks point at them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Column {
    pub fn new(title: String) -> Self {
        let now = Utc::now();
        Self {
            id: ColumnId::new(),
            title,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }
}
