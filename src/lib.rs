// Library surface so integration tests and the binary share one crate.

pub mod config;
pub mod dashboard;
pub mod errors;
pub mod models;
pub mod services;
pub mod session;
pub mod ui;

pub use crate::config::{Config, LatencyConfig};
pub use dashboard::Dashboard;
pub use errors::{AppError, AppResult};
pub use models::{SessionUser, Task, TaskStats};
pub use services::LocalStore;
pub use session::SessionStore;
