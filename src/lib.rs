//! Postdesk - 博客后台文章编辑核心
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Post Context: 文章草稿（内容双视图、标签、封面媒体、SEO）
//!
//! 应用层 (application/):
//! - Ports: 端口定义（PostStore, Catalogs, Navigator）
//! - Commands: 打开编辑会话
//! - Queries: 分类 / 媒体 / 标签目录
//! - Session: 编辑会话与提交状态机
//!
//! 基础设施层 (infrastructure/):
//! - Memory: 模拟的文章存储、目录与导航器

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
