use serde::{Deserialize, Serialize};

use crate::config::Naming;
use crate::domain::column::Column;
use crate::domain::id::{ColumnId, TaskId};
use crate::domain::reorder::array_move;
use crate::domain::task::Task;

/// Where a dragged task should land
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    /// Take the hovered task's column and its slot in the task order
    Task(TaskId),
    /// Join the column, keeping the task's current slot in the task order
    Column(ColumnId),
}

/// Kanban board snapshot.
///
/// Every operation returns a new snapshot and leaves `self` untouched.
/// Operations referencing unknown ids return an unchanged copy instead of
/// failing, since drag event streams routinely carry stale ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    pub columns: Vec<Column>,
    pub tasks: Vec<Task>,
    #[serde(skip)]
    pub naming: Naming,
}

/// Boards are equal when their columns and tasks are. Naming is
/// configuration, not board state.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns && self.tasks == other.tasks
    }
}

impl Board {
    /// Creates an empty board using the default naming templates
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_naming(naming: Naming) -> Self {
        Self {
            naming,
            ..Self::default()
        }
    }

    /// Appends a column titled after the current column count
    #[must_use]
    pub fn create_column(&self) -> Self {
        let mut next = self.clone();
        let title = self.naming.column_title(self.columns.len() + 1);
        next.columns.push(Column::new(title));
        next
    }

    /// Removes a column together with every task it owns
    #[must_use]
    pub fn delete_column(&self, id: ColumnId) -> Self {
        if self.column(id).is_none() {
            return self.clone();
        }

        let mut next = self.clone();
        next.columns.retain(|col| col.id != id);
        next.tasks.retain(|task| task.column_id != id);
        next
    }

    #[must_use]
    pub fn rename_column(&self, id: ColumnId, title: impl Into<String>) -> Self {
        let mut next = self.clone();
        if let Some(column) = next.columns.iter_mut().find(|col| col.id == id) {
            column.set_title(title.into());
        }
        next
    }

    /// Appends a task to the given column.
    ///
    /// The column is not validated here; a task created for an unknown
    /// column is an orphan until the caller fixes it.
    #[must_use]
    pub fn create_task(&self, column_id: ColumnId) -> Self {
        let mut next = self.clone();
        let content = self.naming.task_content(self.tasks.len() + 1);
        next.tasks.push(Task::new(column_id, content));
        next
    }

    #[must_use]
    pub fn delete_task(&self, id: TaskId) -> Self {
        let mut next = self.clone();
        next.tasks.retain(|task| task.id != id);
        next
    }

    #[must_use]
    pub fn rename_task(&self, id: TaskId, content: impl Into<String>) -> Self {
        let mut next = self.clone();
        if let Some(task) = next.tasks.iter_mut().find(|task| task.id == id) {
            task.set_content(content.into());
        }
        next
    }

    /// Moves `source` into the slot currently held by `target`
    #[must_use]
    pub fn reorder_columns(&self, source: ColumnId, target: ColumnId) -> Self {
        let mut next = self.clone();
        if source == target {
            return next;
        }

        if let (Some(from), Some(to)) = (self.column_index(source), self.column_index(target)) {
            array_move(&mut next.columns, from, to);
        }
        next
    }

    /// Moves a task relative to a hovered task or column.
    ///
    /// Over a task, the moved task adopts that task's column and is
    /// reinserted at its index. Over a column, only the column changes and
    /// the task keeps its index in the global order.
    #[must_use]
    pub fn move_task(&self, task_id: TaskId, target: MoveTarget) -> Self {
        let mut next = self.clone();
        let Some(from) = self.task_index(task_id) else {
            return next;
        };

        match target {
            MoveTarget::Task(over_id) => {
                if over_id == task_id {
                    return next;
                }
                let Some(to) = self.task_index(over_id) else {
                    return next;
                };
                let column_id = self.tasks[to].column_id;
                next.tasks[from].move_to_column(column_id);
                array_move(&mut next.tasks, from, to);
            }
            MoveTarget::Column(column_id) => {
                next.tasks[from].move_to_column(column_id);
            }
        }
        next
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|col| col.id == id)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn column_index(&self, id: ColumnId) -> Option<usize> {
        self.columns.iter().position(|col| col.id == id)
    }

    pub fn task_index(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    /// Column ids in display order
    pub fn column_ids(&self) -> Vec<ColumnId> {
        self.columns.iter().map(|col| col.id).collect()
    }

    /// Tasks of one column, top to bottom
    pub fn tasks_in_column(&self, column_id: ColumnId) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.column_id == column_id)
            .collect()
    }

    /// Tasks whose column no longer exists
    pub fn orphan_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| self.column(task.column_id).is_none())
            .collect()
    }

    /// Case-insensitive substring search over task content
    pub fn search_tasks(&self, query: &str) -> Vec<&Task> {
        let query_lower = query.to_lowercase();
        self.tasks
            .iter()
            .filter(|task| task.content.to_lowercase().contains(&query_lower))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_columns(count: usize) -> Board {
        (0..count).fold(Board::new(), |board, _| board.create_column())
    }

    fn column_order(board: &Board) -> Vec<ColumnId> {
        board.column_ids()
    }

    fn task_order(board: &Board) -> Vec<TaskId> {
        board.tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_board_creation() {
        let board = Board::new();
        assert!(board.columns.is_empty());
        assert!(board.tasks.is_empty());
    }

    #[test]
    fn test_create_column_default_titles() {
        let board = board_with_columns(3);
        let titles: Vec<&str> = board.columns.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Column 1", "Column 2", "Column 3"]);
    }

    #[test]
    fn test_operations_do_not_touch_original_snapshot() {
        let board = board_with_columns(1);
        let column_id = board.columns[0].id;

        let next = board.create_task(column_id).rename_column(column_id, "Renamed");

        assert!(board.tasks.is_empty());
        assert_eq!(board.columns[0].title, "Column 1");
        assert_eq!(next.tasks.len(), 1);
        assert_eq!(next.columns[0].title, "Renamed");
    }

    #[test]
    fn test_custom_naming() {
        let naming = Naming {
            column_title: "Lane {n}".to_string(),
            task_content: "Card #{n}".to_string(),
        };
        let board = Board::with_naming(naming).create_column();
        let board = board.create_task(board.columns[0].id);

        assert_eq!(board.columns[0].title, "Lane 1");
        assert_eq!(board.tasks[0].content, "Card #1");
    }

    #[test]
    fn test_task_numbering_uses_global_count() {
        let board = board_with_columns(2);
        let (c1, c2) = (board.columns[0].id, board.columns[1].id);

        let board = board.create_task(c1).create_task(c2).create_task(c1);
        let contents: Vec<&str> = board.tasks.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["Task 1", "Task 2", "Task 3"]);
    }

    #[test]
    fn test_delete_column_cascades() {
        let board = board_with_columns(2);
        let (c1, c2) = (board.columns[0].id, board.columns[1].id);
        let board = board.create_task(c1).create_task(c2).create_task(c2);

        let board = board.delete_column(c2);

        assert_eq!(column_order(&board), vec![c1]);
        assert!(board.tasks.iter().all(|t| t.column_id != c2));
        assert_eq!(board.tasks.len(), 1);
        assert!(board.orphan_tasks().is_empty());
    }

    #[test]
    fn test_delete_absent_column_is_noop() {
        let board = board_with_columns(2);
        let board = board.create_task(board.columns[0].id);

        assert_eq!(board.delete_column(ColumnId::new()), board);
    }

    #[test]
    fn test_rename_absent_ids_is_noop() {
        let board = board_with_columns(1);
        let board = board.create_task(board.columns[0].id);

        assert_eq!(board.rename_column(ColumnId::new(), "X"), board);
        assert_eq!(board.rename_task(TaskId::new(), "X"), board);
        assert_eq!(board.delete_task(TaskId::new()), board);
    }

    #[test]
    fn test_rename_task_idempotent() {
        let board = board_with_columns(1);
        let board = board.create_task(board.columns[0].id);
        let task_id = board.tasks[0].id;

        let board = board.rename_task(task_id, "X").rename_task(task_id, "X");

        assert_eq!(board.tasks.len(), 1);
        assert_eq!(board.task(task_id).unwrap().content, "X");
    }

    #[test]
    fn test_delete_task_preserves_order() {
        let board = board_with_columns(1);
        let column_id = board.columns[0].id;
        let board = board.create_task(column_id).create_task(column_id).create_task(column_id);
        let ids = task_order(&board);

        let board = board.delete_task(ids[1]);
        assert_eq!(task_order(&board), vec![ids[0], ids[2]]);
    }

    #[test]
    fn test_create_task_for_unknown_column_is_orphan() {
        let board = board_with_columns(1).create_task(ColumnId::new());
        assert_eq!(board.orphan_tasks().len(), 1);
    }

    #[test]
    fn test_reorder_columns_moves_into_target_slot() {
        let board = board_with_columns(4);
        let ids = column_order(&board);

        let moved = board.reorder_columns(ids[0], ids[2]);
        assert_eq!(column_order(&moved), vec![ids[1], ids[2], ids[0], ids[3]]);

        let moved = board.reorder_columns(ids[3], ids[1]);
        assert_eq!(column_order(&moved), vec![ids[0], ids[3], ids[1], ids[2]]);
    }

    #[test]
    fn test_reorder_columns_preserves_columns() {
        let board = board_with_columns(5);
        let ids = column_order(&board);

        let moved = board.reorder_columns(ids[4], ids[0]);
        let mut before = board.columns.clone();
        let mut after = moved.columns.clone();
        before.sort_by_key(|c| c.id.to_string());
        after.sort_by_key(|c| c.id.to_string());
        assert_eq!(before, after);
        assert_eq!(moved.tasks, board.tasks);
    }

    #[test]
    fn test_reorder_adjacent_columns_twice_restores_order() {
        let board = board_with_columns(3);
        let ids = column_order(&board);

        let round_trip = board
            .reorder_columns(ids[1], ids[2])
            .reorder_columns(ids[2], ids[1]);
        assert_eq!(round_trip, board);
    }

    #[test]
    fn test_reorder_columns_noops() {
        let board = board_with_columns(3);
        let ids = column_order(&board);

        assert_eq!(board.reorder_columns(ids[1], ids[1]), board);
        assert_eq!(board.reorder_columns(ColumnId::new(), ids[1]), board);
        assert_eq!(board.reorder_columns(ids[1], ColumnId::new()), board);
    }

    #[test]
    fn test_move_task_over_task_in_same_column() {
        let board = board_with_columns(1);
        let c1 = board.columns[0].id;
        let board = board.create_task(c1).create_task(c1);
        let (t1, t2) = (board.tasks[0].id, board.tasks[1].id);

        let moved = board.move_task(t2, MoveTarget::Task(t1));

        assert_eq!(task_order(&moved), vec![t2, t1]);
        assert!(moved.tasks.iter().all(|t| t.column_id == c1));
    }

    #[test]
    fn test_move_task_over_task_in_other_column() {
        let board = board_with_columns(2);
        let (c1, c2) = (board.columns[0].id, board.columns[1].id);
        let board = board.create_task(c2).create_task(c2).create_task(c1);
        let ids = task_order(&board);

        // third task (in c1) hovers the second task (in c2)
        let moved = board.move_task(ids[2], MoveTarget::Task(ids[1]));

        assert_eq!(moved.task(ids[2]).unwrap().column_id, c2);
        assert_eq!(moved.task_index(ids[2]), Some(1));
        assert_eq!(task_order(&moved), vec![ids[0], ids[2], ids[1]]);
        let c2_ids: Vec<TaskId> = moved.tasks_in_column(c2).iter().map(|t| t.id).collect();
        assert_eq!(c2_ids, vec![ids[0], ids[2], ids[1]]);
    }

    #[test]
    fn test_move_task_over_column_keeps_index() {
        let board = board_with_columns(2);
        let (c1, c2) = (board.columns[0].id, board.columns[1].id);
        let board = board.create_task(c1).create_task(c2).create_task(c1);
        let ids = task_order(&board);

        let moved = board.move_task(ids[0], MoveTarget::Column(c2));

        assert_eq!(task_order(&moved), ids);
        assert_eq!(moved.task(ids[0]).unwrap().column_id, c2);
        let c2_ids: Vec<TaskId> = moved.tasks_in_column(c2).iter().map(|t| t.id).collect();
        assert_eq!(c2_ids, vec![ids[0], ids[1]]);
    }

    #[test]
    fn test_move_task_noops() {
        let board = board_with_columns(1);
        let c1 = board.columns[0].id;
        let board = board.create_task(c1).create_task(c1);
        let t1 = board.tasks[0].id;

        assert_eq!(board.move_task(t1, MoveTarget::Task(t1)), board);
        assert_eq!(board.move_task(t1, MoveTarget::Task(TaskId::new())), board);
        assert_eq!(board.move_task(TaskId::new(), MoveTarget::Column(c1)), board);
        assert_eq!(board.move_task(t1, MoveTarget::Column(c1)), board);
    }

    #[test]
    fn test_search_tasks_case_insensitive() {
        let board = board_with_columns(1);
        let c1 = board.columns[0].id;
        let board = board.create_task(c1).create_task(c1);
        let board = board.rename_task(board.tasks[0].id, "Write Release Notes");

        assert_eq!(board.search_tasks("release").len(), 1);
        assert_eq!(board.search_tasks("TASK").len(), 1);
        assert!(board.search_tasks("nothing").is_empty());
    }

    #[test]
    fn test_board_serialization() {
        let board = board_with_columns(2);
        let board = board.create_task(board.columns[1].id);

        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, board);
        assert!(!json.contains("naming"));
    }

    #[test]
    fn test_equality_ignores_naming() {
        let naming = Naming {
            column_title: "Lane {n}".to_string(),
            task_content: "Card {n}".to_string(),
        };
        let board = Board::with_naming(naming).create_column();
        let board = board.create_task(board.columns[0].id);

        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.naming, Naming::default());
        assert_eq!(restored, board);
        assert_ne!(restored, board.create_column());
    }
}
