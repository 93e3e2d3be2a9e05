//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（PostStore、Catalogs、Navigator）
//! - commands: 打开编辑会话
//! - queries: 只读目录查询
//! - session: 编辑会话与提交状态机
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
pub mod session;

// Re-exports
pub use commands::{handlers::OpenEditorHandler, OpenEditor};

pub use error::ApplicationError;

pub use ports::{
    CategoryCatalogPort, CategoryRecord, MediaCatalogPort, MediaRecord, NavigatorPort,
    PostPayload, PostRecord, PostStorePort, RepositoryError, SeoRecord, TagCatalogPort,
};

pub use queries::{
    handlers::{ListCategoriesHandler, ListMediaHandler, ListTagsHandler},
    ListCategories, ListMedia, ListTags,
};

pub use session::{
    EditorSession, SessionConfig, SessionError, SubmissionState, SubmitOutcome, SubmitStart,
};
