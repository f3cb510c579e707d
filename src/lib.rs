pub mod app;
pub mod components;
pub mod error;
pub mod kanban;
pub mod models;
pub mod pages;
pub mod services;
pub mod session;
pub mod state;
pub mod store;
pub mod visibility;

pub use app::App;
pub use app::Route;
