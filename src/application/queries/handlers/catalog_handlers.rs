//! Catalog Query Handlers
//!
//! 直接透传目录结果，不缓存、不校验

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    CategoryCatalogPort, CategoryRecord, MediaCatalogPort, MediaRecord, TagCatalogPort,
};
use crate::application::queries::{ListCategories, ListMedia, ListTags};

pub struct ListCategoriesHandler {
    catalog: Arc<dyn CategoryCatalogPort>,
}

impl ListCategoriesHandler {
    pub fn new(catalog: Arc<dyn CategoryCatalogPort>) -> Self {
        Self { catalog }
    }

    pub async fn handle(
        &self,
        _query: ListCategories,
    ) -> Result<Vec<CategoryRecord>, ApplicationError> {
        Ok(self.catalog.list_categories().await?)
    }
}

pub struct ListMediaHandler {
    catalog: Arc<dyn MediaCatalogPort>,
}

impl ListMediaHandler {
    pub fn new(catalog: Arc<dyn MediaCatalogPort>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, _query: ListMedia) -> Result<Vec<MediaRecord>, ApplicationError> {
        Ok(self.catalog.list_media().await?)
    }
}

pub struct ListTagsHandler {
    catalog: Arc<dyn TagCatalogPort>,
}

impl ListTagsHandler {
    pub fn new(catalog: Arc<dyn TagCatalogPort>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, _query: ListTags) -> Result<Vec<String>, ApplicationError> {
        Ok(self.catalog.list_tags().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryCatalog;

    #[tokio::test]
    async fn test_demo_catalog_queries() {
        let catalog = Arc::new(InMemoryCatalog::demo());

        let categories = ListCategoriesHandler::new(catalog.clone())
            .handle(ListCategories)
            .await
            .unwrap();
        assert_eq!(categories.len(), 4);
        assert_eq!(categories[1].id, "design");

        let media = ListMediaHandler::new(catalog.clone())
            .handle(ListMedia)
            .await
            .unwrap();
        assert_eq!(media.len(), 4);
        assert_eq!(media[1].media_type, "image/png");

        let tags = ListTagsHandler::new(catalog).handle(ListTags).await.unwrap();
        assert_eq!(tags.len(), 10);
        assert!(tags.iter().any(|t| t == "tailwind"));
    }
}
