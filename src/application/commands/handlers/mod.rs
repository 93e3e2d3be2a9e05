//! Command Handlers 实现

mod editor_handlers;

pub use editor_handlers::*;
