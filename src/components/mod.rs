pub mod activity_feed;
pub mod avatar;
pub mod badges;
pub mod create_project_modal;
pub mod create_task_modal;
pub mod kanban_board;
pub mod modal;
pub mod project_card;
pub mod search_bar;
pub mod sidebar;
pub mod stat_card;
pub mod task_card;
pub mod task_detail_modal;
pub mod ui;
