pub mod dashboard;
pub mod login;
pub mod project_detail;
pub mod projects;
pub mod tasks;
pub mod users;

pub use dashboard::Dashboard;
pub use login::Login;
pub use project_detail::ProjectDetail;
pub use projects::Projects;
pub use tasks::Tasks;
pub use users::Users;
