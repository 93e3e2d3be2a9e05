//! Catalog Ports - 只读目录
//!
//! 分类、媒体、标签目录只用于填充选择控件，编辑会话不缓存也不校验。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::RepositoryError;

/// 分类条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: String,
    pub name: String,
}

/// 媒体条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRecord {
    pub id: String,
    pub url: String,
    pub name: String,
    #[serde(rename = "type")]
    pub media_type: String,
    /// 字节数
    pub size: u64,
}

#[async_trait]
pub trait CategoryCatalogPort: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, RepositoryError>;
}

#[async_trait]
pub trait MediaCatalogPort: Send + Sync {
    async fn list_media(&self) -> Result<Vec<MediaRecord>, RepositoryError>;
}

/// 可选标签目录（复选框来源）
#[async_trait]
pub trait TagCatalogPort: Send + Sync {
    async fn list_tags(&self) -> Result<Vec<String>, RepositoryError>;
}
