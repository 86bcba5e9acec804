//! Board state: four ordered columns of tasks.
//!
//! A task id lives in at most one column at any time. The mutation methods on
//! [`Board`] are the only way to change the columns, and each of them touches
//! at most one task. Operations on ids that are not on the board are no-ops
//! and report that through their return value rather than an error.

use std::collections::HashSet;

use serde::Serialize;

use super::column::Column;
use super::drag::DragEvent;
use super::task::{Task, TaskId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    incomplete: Vec<Task>,
    completed: Vec<Task>,
    in_review: Vec<Task>,
    backlog: Vec<Task>,
}

/// Result of a move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { task: Task, from: Column, to: Column },
    SameColumn,
    NoDestination,
    NotFound,
}

impl MoveOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveOutcome::Moved { .. } => "moved",
            MoveOutcome::SameColumn => "same_column",
            MoveOutcome::NoDestination => "no_destination",
            MoveOutcome::NotFound => "not_found",
        }
    }
}

/// Owned copy of the four columns, in render order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    pub incomplete: Vec<Task>,
    pub completed: Vec<Task>,
    pub in_review: Vec<Task>,
    pub backlog: Vec<Task>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column(&self, column: Column) -> &[Task] {
        match column {
            Column::Incomplete => &self.incomplete,
            Column::Completed => &self.completed,
            Column::InReview => &self.in_review,
            Column::Backlog => &self.backlog,
        }
    }

    fn column_mut(&mut self, column: Column) -> &mut Vec<Task> {
        match column {
            Column::Incomplete => &mut self.incomplete,
            Column::Completed => &mut self.completed,
            Column::InReview => &mut self.in_review,
            Column::Backlog => &mut self.backlog,
        }
    }

    /// Finds a task, searching the columns in render order.
    pub fn find(&self, id: TaskId) -> Option<(Column, &Task)> {
        Column::all().iter().find_map(|&column| {
            self.column(column)
                .iter()
                .find(|task| task.id == id)
                .map(|task| (column, task))
        })
    }

    fn position_of(&self, id: TaskId) -> Option<(Column, usize)> {
        Column::all().iter().find_map(|&column| {
            self.column(column)
                .iter()
                .position(|task| task.id == id)
                .map(|index| (column, index))
        })
    }

    pub fn len(&self) -> usize {
        Column::all().iter().map(|&c| self.column(c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replaces the incomplete and completed columns from a full task list.
    ///
    /// In review and backlog keep their contents. Seed records whose id is
    /// already held there are skipped, as are repeated ids within the seed
    /// (first occurrence wins).
    pub fn load_seed(&mut self, tasks: impl IntoIterator<Item = Task>) {
        let mut seen: HashSet<TaskId> = self
            .in_review
            .iter()
            .chain(self.backlog.iter())
            .map(|task| task.id)
            .collect();

        let mut incomplete = Vec::new();
        let mut completed = Vec::new();

        for task in tasks {
            if !seen.insert(task.id) {
                tracing::debug!(task_id = task.id, "Skipping seed task already on the board");
                continue;
            }
            if task.completed {
                completed.push(task);
            } else {
                incomplete.push(task);
            }
        }

        self.incomplete = incomplete;
        self.completed = completed;
    }

    /// Removes the task from every column. Returns whether anything was removed.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let mut removed = false;
        for &column in Column::all() {
            let tasks = self.column_mut(column);
            let before = tasks.len();
            tasks.retain(|task| task.id != id);
            removed |= tasks.len() != before;
        }

        if !removed {
            tracing::debug!(task_id = id, "Delete ignored: task not found");
        }
        removed
    }

    /// Replaces the title of a task in place, keeping its position, id and
    /// completed flag. Returns whether a task was edited.
    pub fn edit_task(&mut self, id: TaskId, title: &str) -> bool {
        let Some((_, found)) = self.find(id) else {
            tracing::debug!(task_id = id, "Edit ignored: task not found");
            return false;
        };
        let edited = found.with_title(title);

        for &column in Column::all() {
            for task in self.column_mut(column).iter_mut().filter(|t| t.id == id) {
                *task = edited.clone();
            }
        }
        true
    }

    /// Moves a task to the end of `destination`, recomputing its completed
    /// flag from the destination column.
    ///
    /// The task is looked up before anything is removed. When it is held by a
    /// column other than `source`, it is taken from the column that actually
    /// holds it so it can never end up in two columns.
    pub fn move_task(
        &mut self,
        source: Column,
        destination: Option<Column>,
        id: TaskId,
    ) -> MoveOutcome {
        let Some(destination) = destination else {
            return MoveOutcome::NoDestination;
        };
        if source == destination {
            tracing::debug!(task_id = id, column = %source, "Dropped in the same column");
            return MoveOutcome::SameColumn;
        }

        let Some((holder, index)) = self.position_of(id) else {
            tracing::debug!(task_id = id, "Move ignored: task not found");
            return MoveOutcome::NotFound;
        };
        if holder != source {
            tracing::debug!(
                task_id = id,
                declared = %source,
                actual = %holder,
                "Move source is stale, using the column holding the task"
            );
        }
        if holder == destination {
            return MoveOutcome::SameColumn;
        }

        let task = self
            .column_mut(holder)
            .remove(index)
            .with_completed(destination.marks_completed());
        self.column_mut(destination).push(task.clone());

        MoveOutcome::Moved {
            task,
            from: holder,
            to: destination,
        }
    }

    /// Applies a drag gesture from the frontend.
    pub fn apply_drag(&mut self, event: &DragEvent) -> MoveOutcome {
        match event.narrow() {
            Ok(drag) => self.move_task(drag.source, drag.destination, drag.task_id),
            Err(rejection) => {
                tracing::debug!(%rejection, "Drag event ignored");
                if event.destination.is_none() {
                    MoveOutcome::NoDestination
                } else {
                    MoveOutcome::NotFound
                }
            }
        }
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            incomplete: self.incomplete.clone(),
            completed: self.completed.clone(),
            in_review: self.in_review.clone(),
            backlog: self.backlog.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Board {
        let mut board = Board::new();
        board.load_seed(vec![
            Task::new(1, "one", false),
            Task::new(2, "two", true),
            Task::new(3, "three", false),
            Task::new(4, "four", true),
        ]);
        board
    }

    fn ids(board: &Board, column: Column) -> Vec<TaskId> {
        board.column(column).iter().map(|t| t.id).collect()
    }

    fn assert_unique(board: &Board) {
        let mut seen = HashSet::new();
        for &column in Column::all() {
            for task in board.column(column) {
                assert!(seen.insert(task.id), "task {} appears twice", task.id);
            }
        }
    }

    #[test]
    fn test_seed_partitions_by_completed_flag() {
        let mut board = Board::new();
        board.load_seed(vec![Task::new(1, "a", true), Task::new(2, "b", false)]);

        assert_eq!(board.column(Column::Completed), &[Task::new(1, "a", true)]);
        assert_eq!(board.column(Column::Incomplete), &[Task::new(2, "b", false)]);
        assert!(board.column(Column::InReview).is_empty());
        assert!(board.column(Column::Backlog).is_empty());
    }

    #[test]
    fn test_seed_empty_list_yields_empty_board() {
        let mut board = seeded();
        board.load_seed(Vec::new());
        assert!(board.is_empty());
    }

    #[test]
    fn test_seed_replaces_instead_of_merging() {
        let mut board = seeded();
        board.load_seed(vec![Task::new(10, "ten", false)]);
        assert_eq!(ids(&board, Column::Incomplete), vec![10]);
        assert!(board.column(Column::Completed).is_empty());
    }

    #[test]
    fn test_seed_keeps_review_and_backlog_and_skips_their_ids() {
        let mut board = seeded();
        board.move_task(Column::Incomplete, Some(Column::InReview), 1);
        board.move_task(Column::Completed, Some(Column::Backlog), 2);

        board.load_seed(vec![
            Task::new(1, "one", false),
            Task::new(2, "two", true),
            Task::new(5, "five", false),
            Task::new(5, "five again", true),
        ]);

        assert_eq!(ids(&board, Column::InReview), vec![1]);
        assert_eq!(ids(&board, Column::Backlog), vec![2]);
        assert_eq!(ids(&board, Column::Incomplete), vec![5]);
        assert!(board.column(Column::Completed).is_empty());
        assert_unique(&board);
    }

    #[test]
    fn test_move_relocates_and_recomputes_completed() {
        let mut board = seeded();

        let outcome = board.move_task(Column::Incomplete, Some(Column::Completed), 1);
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                task: Task::new(1, "one", true),
                from: Column::Incomplete,
                to: Column::Completed,
            }
        );
        assert_eq!(ids(&board, Column::Incomplete), vec![3]);
        assert_eq!(ids(&board, Column::Completed), vec![2, 4, 1]);

        board.move_task(Column::Completed, Some(Column::Backlog), 2);
        assert_eq!(board.column(Column::Backlog), &[Task::new(2, "two", false)]);
        assert_unique(&board);
    }

    #[test]
    fn test_move_into_every_column_sets_flag_from_destination() {
        for &destination in Column::all() {
            let mut board = Board::new();
            board.load_seed(vec![Task::new(1, "x", false), Task::new(2, "y", true)]);
            let source = if destination == Column::Incomplete {
                Column::Completed
            } else {
                Column::Incomplete
            };
            let id = if source == Column::Completed { 2 } else { 1 };

            assert!(board.move_task(source, Some(destination), id).is_applied());
            let (holder, task) = board.find(id).unwrap();
            assert_eq!(holder, destination);
            assert_eq!(task.completed, destination == Column::Completed);
            assert_eq!(board.column(destination).iter().filter(|t| t.id == id).count(), 1);
        }
    }

    #[test]
    fn test_move_out_of_review_and_backlog() {
        let mut board = seeded();
        let steps = [
            (Column::Incomplete, Column::InReview),
            (Column::InReview, Column::Backlog),
            (Column::Backlog, Column::Completed),
        ];

        for (source, destination) in steps {
            let outcome = board.move_task(source, Some(destination), 1);
            assert_eq!(
                outcome,
                MoveOutcome::Moved {
                    task: Task::new(1, "one", destination == Column::Completed),
                    from: source,
                    to: destination,
                }
            );
            assert!(!ids(&board, source).contains(&1));
            assert_eq!(ids(&board, destination).iter().filter(|&&id| id == 1).count(), 1);
            let (holder, task) = board.find(1).unwrap();
            assert_eq!(holder, destination);
            assert_eq!(task.completed, destination == Column::Completed);
            assert_unique(&board);
        }

        assert!(board.column(Column::InReview).is_empty());
        assert!(board.column(Column::Backlog).is_empty());
        assert_eq!(ids(&board, Column::Completed), vec![2, 4, 1]);
    }

    #[test]
    fn test_move_same_column_is_noop() {
        let mut board = seeded();
        let before = board.clone();
        assert_eq!(
            board.move_task(Column::Incomplete, Some(Column::Incomplete), 1),
            MoveOutcome::SameColumn
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_without_destination_is_noop() {
        let mut board = seeded();
        let before = board.clone();
        assert_eq!(
            board.move_task(Column::Incomplete, None, 1),
            MoveOutcome::NoDestination
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_missing_id_is_noop() {
        let mut board = seeded();
        let before = board.clone();
        assert_eq!(
            board.move_task(Column::Incomplete, Some(Column::InReview), 99),
            MoveOutcome::NotFound
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_with_stale_source_never_duplicates() {
        let mut board = seeded();
        // Task 2 lives in completed, but the event claims it came from incomplete.
        let outcome = board.move_task(Column::Incomplete, Some(Column::InReview), 2);
        assert!(outcome.is_applied());
        assert_eq!(ids(&board, Column::Completed), vec![4]);
        assert_eq!(ids(&board, Column::InReview), vec![2]);
        assert_eq!(ids(&board, Column::Incomplete), vec![1, 3]);
        assert_unique(&board);

        // Already in the destination: nothing to do.
        let before = board.clone();
        assert_eq!(
            board.move_task(Column::Backlog, Some(Column::InReview), 2),
            MoveOutcome::SameColumn
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_delete_removes_from_any_column() {
        let mut board = seeded();
        board.move_task(Column::Incomplete, Some(Column::Backlog), 3);

        assert!(board.delete_task(3));
        assert!(board.find(3).is_none());
        assert!(board.delete_task(2));
        assert!(board.find(2).is_none());
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let mut board = seeded();
        let before = board.clone();
        assert!(!board.delete_task(99));
        assert_eq!(board, before);
    }

    #[test]
    fn test_edit_changes_only_title_in_place() {
        let mut board = seeded();
        assert!(board.edit_task(2, "renamed"));

        assert_eq!(
            board.column(Column::Completed),
            &[Task::new(2, "renamed", true), Task::new(4, "four", true)]
        );
        assert_eq!(ids(&board, Column::Incomplete), vec![1, 3]);
    }

    #[test]
    fn test_edit_missing_id_is_noop() {
        let mut board = seeded();
        let before = board.clone();
        assert!(!board.edit_task(99, "ghost"));
        assert_eq!(board, before);
        assert!(board.find(99).is_none());
    }

    #[test]
    fn test_apply_drag_dispatches_narrowed_event() {
        let mut board = seeded();
        assert!(board
            .apply_drag(&DragEvent::new("1", Some("3"), "1"))
            .is_applied());
        assert_eq!(ids(&board, Column::InReview), vec![1]);

        let before = board.clone();
        assert_eq!(
            board.apply_drag(&DragEvent::new("1", None, "3")),
            MoveOutcome::NoDestination
        );
        assert_eq!(
            board.apply_drag(&DragEvent::new("1", Some("2"), "not-a-number")),
            MoveOutcome::NotFound
        );
        assert_eq!(
            board.apply_drag(&DragEvent::new("3", Some("3"), "1")),
            MoveOutcome::SameColumn
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut board = Board::new();
        board.load_seed(vec![Task::new(5, "A", false)]);
        assert_eq!(board.column(Column::Incomplete), &[Task::new(5, "A", false)]);

        board.move_task(Column::Incomplete, Some(Column::InReview), 5);
        assert!(board.column(Column::Incomplete).is_empty());
        assert_eq!(board.column(Column::InReview), &[Task::new(5, "A", false)]);

        board.edit_task(5, "B");
        assert_eq!(board.column(Column::InReview), &[Task::new(5, "B", false)]);

        board.delete_task(5);
        assert!(board.is_empty());
        assert_eq!(board.snapshot(), BoardSnapshot::default());
    }
}
