//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：编辑器选择控件所需的只读目录

mod catalog_queries;

pub mod handlers;

pub use catalog_queries::*;
