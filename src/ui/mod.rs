pub mod app;
pub mod render;

pub use app::{ChatApp, EXIT_COMMAND};
