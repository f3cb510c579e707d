//! Board logic for the four-column task workflow. The transition graph is
//! deliberately complete: a card may be dropped on any column, there is no
//! forward-only enforcement. Dropping a card on its current column is a
//! no-op, not an error.

use crate::models::{Task, TaskStatus};

pub struct Column {
    pub status: TaskStatus,
    pub title: &'static str,
    pub icon: &'static str,
    pub class: &'static str,
}

pub const COLUMNS: [Column; 4] = [
    Column { status: TaskStatus::Todo, title: "To Do", icon: "○", class: "col-todo" },
    Column {
        status: TaskStatus::InProgress,
        title: "In Progress",
        icon: "◔",
        class: "col-progress",
    },
    Column {
        status: TaskStatus::InReview,
        title: "In Review",
        icon: "◎",
        class: "col-review",
    },
    Column {
        status: TaskStatus::Completed,
        title: "Completed",
        icon: "●",
        class: "col-done",
    },
];

/// Decide what a drop should do. `None` means leave the task alone and issue
/// no update; `Some(status)` is the new status to persist. A task whose
/// status failed to decode can still be dropped into any column.
pub fn plan_drop(current: Option<TaskStatus>, target: TaskStatus) -> Option<TaskStatus> {
    if current == Some(target) {
        None
    } else {
        Some(target)
    }
}

pub fn tasks_in_column(tasks: &[Task], status: TaskStatus) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| t.status == Some(status))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u64, status: Option<TaskStatus>) -> Task {
        Task {
            id,
            title: format!("Task {id}"),
            description: String::new(),
            project_id: 1,
            assignee_id: 1,
            priority: None,
            status,
            due_date: None,
            created_by: 1,
            created_at: None,
        }
    }

    #[test]
    fn drop_on_current_column_is_a_no_op() {
        assert_eq!(plan_drop(Some(TaskStatus::InProgress), TaskStatus::InProgress), None);
    }

    #[test]
    fn any_column_is_reachable_from_any_other() {
        for from in TaskStatus::ALL {
            for to in TaskStatus::ALL {
                if from == to {
                    assert_eq!(plan_drop(Some(from), to), None);
                } else {
                    assert_eq!(plan_drop(Some(from), to), Some(to));
                }
            }
        }
    }

    #[test]
    fn todo_drops_straight_to_completed() {
        assert_eq!(
            plan_drop(Some(TaskStatus::Todo), TaskStatus::Completed),
            Some(TaskStatus::Completed)
        );
    }

    #[test]
    fn grouping_places_each_task_in_exactly_one_column() {
        let tasks = vec![
            task(1, Some(TaskStatus::Todo)),
            task(2, Some(TaskStatus::InProgress)),
            task(3, Some(TaskStatus::Completed)),
        ];
        assert_eq!(tasks_in_column(&tasks, TaskStatus::Todo).len(), 1);
        assert_eq!(tasks_in_column(&tasks, TaskStatus::InProgress).len(), 1);
        assert_eq!(tasks_in_column(&tasks, TaskStatus::InReview).len(), 0);
        assert_eq!(tasks_in_column(&tasks, TaskStatus::Completed).len(), 1);
        let total: usize = TaskStatus::ALL
            .iter()
            .map(|s| tasks_in_column(&tasks, *s).len())
            .sum();
        assert_eq!(total, tasks.len());
    }

    #[test]
    fn unknown_status_lands_in_no_column() {
        let tasks = vec![task(1, None)];
        for status in TaskStatus::ALL {
            assert!(tasks_in_column(&tasks, status).is_empty());
        }
    }
}
