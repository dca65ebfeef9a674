mod user;
mod task;

pub use user::SessionUser;
pub use task::{Task, TaskStats};
