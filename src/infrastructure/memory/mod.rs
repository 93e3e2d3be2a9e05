//! Memory Layer - In-Memory Adapters
//!
//! 模拟的文章存储、只读目录和导航记录器，代替真实的持久化 API 与宿主界面

mod catalog;
mod navigator;
mod post_store;

pub use catalog::InMemoryCatalog;
pub use navigator::{Navigation, RecordingNavigator};
pub use post_store::InMemoryPostStore;
