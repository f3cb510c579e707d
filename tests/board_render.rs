//! Headless render test for the board. Building the tree stamps out one drop
//! handler per column from a single shared callback; a full rebuild proves
//! that wiring holds together.

use std::sync::Arc;

use dioxus::prelude::*;

use taskflow::components::kanban_board::KanbanBoard;
use taskflow::models::{Task, TaskStatus};
use taskflow::services::Services;
use taskflow::state::{FlashKind, FlashState};
use taskflow::store::MemoryStore;

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

#[component]
fn BoardHarness() -> Element {
    use_context_provider(|| Services::new(Arc::new(MemoryStore::with_demo_data())));
    let msg = use_signal(|| Option::<(FlashKind, String)>::None);
    use_context_provider(|| FlashState { msg });

    let tasks = vec![
        task(1, Some(TaskStatus::Todo)),
        task(2, Some(TaskStatus::InProgress)),
        task(3, Some(TaskStatus::InReview)),
        task(4, Some(TaskStatus::Completed)),
        task(5, None),
    ];
    rsx! {
        KanbanBoard {
            tasks,
            users: vec![],
            projects: vec![],
            on_task_click: move |_| {},
            on_task_update: move |_| {},
        }
    }
}

#[test]
fn board_rebuild_wires_a_drop_handler_per_column() {
    let mut dom = VirtualDom::new(BoardHarness);
    dom.rebuild_in_place();
}
