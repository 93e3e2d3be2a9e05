//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：打开编辑会话（提交由会话自身完成）

mod editor_commands;

pub mod handlers;

pub use editor_commands::*;
