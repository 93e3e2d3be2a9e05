//! In-Memory Post Store Implementation

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::application::ports::{
    PostPayload, PostRecord, PostStorePort, RepositoryError, SeoRecord,
};
use crate::domain::post::PostStatus;

/// 内存文章存储
pub struct InMemoryPostStore {
    posts: DashMap<Uuid, PostRecord>,
    /// 收到的提交次数（含失败）
    commit_count: AtomicUsize,
    /// 下一次提交注入的错误
    fail_next: Mutex<Option<RepositoryError>>,
    last_payload: Mutex<Option<PostPayload>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: DashMap::new(),
            commit_count: AtomicUsize::new(0),
            fail_next: Mutex::new(None),
            last_payload: Mutex::new(None),
        }
    }

    /// 带一篇示例文章的存储，返回示例文章 ID
    pub fn with_demo_data() -> (Self, Uuid) {
        let store = Self::new();
        let now = Utc::now();
        let id = Uuid::new_v4();
        store.insert(PostRecord {
            id,
            title: "Getting Started with Next.js".to_string(),
            excerpt: "Learn how to get started with Next.js, the React framework for production."
                .to_string(),
            content: concat!(
                "<p>This is a sample post content with ",
                "<strong>rich text</strong> formatting.</p>"
            )
            .to_string(),
            featured_image: Some("/placeholder.svg".to_string()),
            category: "development".to_string(),
            tags: vec!["nextjs".to_string(), "react".to_string(), "tutorial".to_string()],
            status: PostStatus::Published,
            seo: SeoRecord {
                title: "Getting Started with Next.js - Blog".to_string(),
                description:
                    "Learn how to get started with Next.js, the React framework for production."
                        .to_string(),
                keywords: "nextjs, react, tutorial".to_string(),
            },
            created_at: now,
            updated_at: now,
        });
        (store, id)
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn insert(&self, record: PostRecord) {
        self.posts.insert(record.id, record);
    }

    pub fn get(&self, id: Uuid) -> Option<PostRecord> {
        self.posts.get(&id).map(|r| r.clone())
    }

    /// 让下一次提交失败
    pub fn fail_next_commit(&self, error: RepositoryError) {
        *lock(&self.fail_next) = Some(error);
    }

    pub fn commit_count(&self) -> usize {
        self.commit_count.load(Ordering::SeqCst)
    }

    pub fn last_payload(&self) -> Option<PostPayload> {
        lock(&self.last_payload).clone()
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl PostStorePort for InMemoryPostStore {
    async fn fetch_post(&self, id: Uuid) -> Result<Option<PostRecord>, RepositoryError> {
        Ok(self.get(id))
    }

    async fn commit_post(&self, payload: &PostPayload) -> Result<PostRecord, RepositoryError> {
        self.commit_count.fetch_add(1, Ordering::SeqCst);
        *lock(&self.last_payload) = Some(payload.clone());

        if let Some(error) = lock(&self.fail_next).take() {
            tracing::debug!(error = %error, "Injected commit failure");
            return Err(error);
        }

        let now = Utc::now();
        let (id, created_at) = match payload.id {
            Some(id) => {
                let existing = self
                    .posts
                    .get(&id)
                    .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
                (id, existing.created_at)
            }
            None => (Uuid::new_v4(), now),
        };

        let record = PostRecord {
            id,
            title: payload.title.clone(),
            excerpt: payload.excerpt.clone(),
            content: payload.content.clone(),
            featured_image: payload.featured_media.clone(),
            category: payload.category.clone(),
            tags: payload.tags.clone(),
            status: payload.status,
            seo: SeoRecord {
                title: payload.seo_title.clone(),
                description: payload.seo_description.clone(),
                keywords: payload.seo_keywords.clone(),
            },
            created_at,
            updated_at: now,
        };
        self.posts.insert(id, record.clone());

        tracing::debug!(post_id = %id, "Post stored");
        Ok(record)
    }
}
