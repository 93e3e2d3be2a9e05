//! In-Memory Catalog Implementation
//!
//! 分类、媒体、标签三个只读目录共用一个内存实现

use async_trait::async_trait;

use crate::application::ports::{
    CategoryCatalogPort, CategoryRecord, MediaCatalogPort, MediaRecord, RepositoryError,
    TagCatalogPort,
};

/// 内存目录
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    categories: Vec<CategoryRecord>,
    media: Vec<MediaRecord>,
    tags: Vec<String>,
}

impl InMemoryCatalog {
    pub fn new(
        categories: Vec<CategoryRecord>,
        media: Vec<MediaRecord>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            categories,
            media,
            tags,
        }
    }

    /// 管理后台的示例数据
    pub fn demo() -> Self {
        let categories = [
            ("development", "Development"),
            ("design", "Design"),
            ("marketing", "Marketing"),
            ("business", "Business"),
        ]
        .into_iter()
        .map(|(id, name)| CategoryRecord {
            id: id.to_string(),
            name: name.to_string(),
        })
        .collect();

        let media = [
            ("1", "Image 1", "image/jpeg", 1024 * 1024),
            ("2", "Image 2", "image/png", 512 * 1024),
            ("3", "Image 3", "image/jpeg", 2048 * 1024),
            ("4", "Image 4", "image/png", 768 * 1024),
        ]
        .into_iter()
        .map(|(id, name, media_type, size)| MediaRecord {
            id: id.to_string(),
            url: "/placeholder.svg".to_string(),
            name: name.to_string(),
            media_type: media_type.to_string(),
            size,
        })
        .collect();

        let tags = [
            "nextjs",
            "react",
            "javascript",
            "typescript",
            "tutorial",
            "design",
            "css",
            "tailwind",
            "performance",
            "seo",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        Self::new(categories, media, tags)
    }
}

#[async_trait]
impl CategoryCatalogPort for InMemoryCatalog {
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, RepositoryError> {
        Ok(self.categories.clone())
    }
}

#[async_trait]
impl MediaCatalogPort for InMemoryCatalog {
    async fn list_media(&self) -> Result<Vec<MediaRecord>, RepositoryError> {
        Ok(self.media.clone())
    }
}

#[async_trait]
impl TagCatalogPort for InMemoryCatalog {
    async fn list_tags(&self) -> Result<Vec<String>, RepositoryError> {
        Ok(self.tags.clone())
    }
}
