//! Post Store Port - 文章实体存储
//!
//! 编辑会话只关心两个操作：按 ID 获取实体、提交草稿快照。
//! 具体实现在 infrastructure 层（当前为内存模拟实现）。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::post::{DraftSnapshot, MediaRef, PostId, PostStatus, SeoMeta};

/// Repository 错误
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Commit rejected: {0}")]
    Rejected(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// 嵌套的 SEO 记录（存储侧形状）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoRecord {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

/// 文章实体（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub status: PostStatus,
    pub seo: SeoRecord,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 提交载荷：扁平化的草稿字段 + content + tags + featuredMedia
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPayload {
    pub id: Option<Uuid>,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub status: PostStatus,
    pub seo_title: String,
    pub seo_description: String,
    pub seo_keywords: String,
    pub content: String,
    pub tags: Vec<String>,
    pub featured_media: Option<String>,
}

impl From<DraftSnapshot> for PostPayload {
    fn from(snapshot: DraftSnapshot) -> Self {
        Self {
            id: snapshot.id.map(|id| *id.as_uuid()),
            title: snapshot.title,
            excerpt: snapshot.excerpt,
            category: snapshot.category,
            status: snapshot.status,
            seo_title: snapshot.seo.title,
            seo_description: snapshot.seo.description,
            seo_keywords: snapshot.seo.keywords,
            content: snapshot.content,
            tags: snapshot.tags,
            featured_media: snapshot.featured_media.map(String::from),
        }
    }
}

impl From<PostRecord> for DraftSnapshot {
    fn from(record: PostRecord) -> Self {
        Self {
            id: Some(PostId::from_uuid(record.id)),
            title: record.title,
            excerpt: record.excerpt,
            content: record.content,
            category: record.category,
            status: record.status,
            // 空 URL 视为未设置封面
            featured_media: record.featured_image.and_then(|url| MediaRef::new(url).ok()),
            tags: record.tags,
            seo: SeoMeta {
                title: record.seo.title,
                description: record.seo.description,
                keywords: record.seo.keywords,
            },
        }
    }
}

/// Post Store Port
#[async_trait]
pub trait PostStorePort: Send + Sync {
    /// 根据 ID 获取文章
    async fn fetch_post(&self, id: Uuid) -> Result<Option<PostRecord>, RepositoryError>;

    /// 提交草稿，返回存储确认后的实体
    async fn commit_post(&self, payload: &PostPayload) -> Result<PostRecord, RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::Draft;

    fn record() -> PostRecord {
        let now = Utc::now();
        PostRecord {
            id: Uuid::new_v4(),
            title: "Getting Started with Next.js".to_string(),
            excerpt: "Learn".to_string(),
            content: "<p>x</p>".to_string(),
            featured_image: Some(String::new()),
            category: "development".to_string(),
            tags: vec!["react".to_string(), "nextjs".to_string()],
            status: PostStatus::Published,
            seo: SeoRecord {
                title: "SEO title".to_string(),
                description: "SEO description".to_string(),
                keywords: "nextjs, react".to_string(),
            },
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_record_flattens_into_payload() {
        let record = record();
        let id = record.id;
        let payload = PostPayload::from(Draft::restore(record.into()).snapshot());

        assert_eq!(payload.id, Some(id));
        assert_eq!(payload.seo_title, "SEO title");
        assert_eq!(payload.seo_description, "SEO description");
        assert_eq!(payload.seo_keywords, "nextjs, react");
        assert_eq!(payload.featured_media, None);
        assert_eq!(payload.tags, vec!["nextjs".to_string(), "react".to_string()]);
    }

    #[test]
    fn test_payload_json_shape() {
        let mut draft = Draft::new_default();
        draft.set_title("Hello");
        let value = serde_json::to_value(PostPayload::from(draft.snapshot())).unwrap();

        assert_eq!(value["title"], "Hello");
        assert_eq!(value["status"], "draft");
        assert!(value["featuredMedia"].is_null());
        assert_eq!(value["tags"], serde_json::json!([]));
        assert_eq!(value["seoTitle"], "");
    }
}
