pub mod aggregate;
pub mod app;
pub mod calendar;
pub mod dashboard;
pub mod errors;
pub mod handlers;
pub mod leaderboard;
pub mod models;
pub mod pacing;
pub mod state;
pub mod storage;
pub mod store;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_data, resolve_data_dir};
