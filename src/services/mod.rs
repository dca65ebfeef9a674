mod local_store;

pub use local_store::{LocalStore, TASKS_KEY, USER_KEY};
