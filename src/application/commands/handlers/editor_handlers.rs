//! Editor Command Handlers

use std::sync::Arc;

use crate::application::commands::OpenEditor;
use crate::application::error::ApplicationError;
use crate::application::ports::{NavigatorPort, PostStorePort};
use crate::application::session::{EditorSession, SessionConfig};
use crate::domain::post::Draft;

/// OpenEditor Handler
///
/// 加载（或创建默认）草稿并交给新的编辑会话。草稿要么完整恢复、要么不创建会话，
/// 加载失败对会话是致命的。
pub struct OpenEditorHandler {
    store: Arc<dyn PostStorePort>,
    navigator: Arc<dyn NavigatorPort>,
    config: SessionConfig,
}

impl OpenEditorHandler {
    pub fn new(
        store: Arc<dyn PostStorePort>,
        navigator: Arc<dyn NavigatorPort>,
        config: SessionConfig,
    ) -> Self {
        Self {
            store,
            navigator,
            config,
        }
    }

    pub async fn handle(&self, command: OpenEditor) -> Result<EditorSession, ApplicationError> {
        let draft = match command.post_id {
            Some(post_id) => {
                let record = self
                    .store
                    .fetch_post(post_id)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("Post", post_id))?;

                tracing::info!(
                    post_id = %post_id,
                    title = %record.title,
                    "Editor opened for existing post"
                );
                Draft::restore(record.into())
            }
            None => {
                tracing::info!("Editor opened for new post");
                Draft::new_default()
            }
        };

        Ok(EditorSession::new(
            draft,
            self.store.clone(),
            self.navigator.clone(),
            self.config.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{PostPayload, PostRecord, RepositoryError};
    use crate::domain::post::PostStatus;
    use crate::infrastructure::memory::{InMemoryPostStore, RecordingNavigator};
    use async_trait::async_trait;
    use uuid::Uuid;

    struct UnreachableStore;

    #[async_trait]
    impl PostStorePort for UnreachableStore {
        async fn fetch_post(&self, _id: Uuid) -> Result<Option<PostRecord>, RepositoryError> {
            Err(RepositoryError::Unavailable("connection refused".to_string()))
        }

        async fn commit_post(&self, _payload: &PostPayload) -> Result<PostRecord, RepositoryError> {
            Err(RepositoryError::Unavailable("connection refused".to_string()))
        }
    }

    fn handler(store: Arc<dyn PostStorePort>) -> OpenEditorHandler {
        OpenEditorHandler::new(
            store,
            Arc::new(RecordingNavigator::new("/dashboard/posts")),
            SessionConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_open_new_post_uses_defaults() {
        let session = handler(InMemoryPostStore::new().arc())
            .handle(OpenEditor::new_post())
            .await
            .unwrap();

        assert!(session.draft().is_new());
        assert_eq!(session.draft().status(), PostStatus::Draft);
        assert_eq!(session.submit_label(), "Create Post");
    }

    #[tokio::test]
    async fn test_open_existing_post_hydrates_every_field() {
        let (store, id) = InMemoryPostStore::with_demo_data();
        let record = store.get(id).unwrap();
        let session = handler(store.arc()).handle(OpenEditor::edit(id)).await.unwrap();

        let draft = session.draft();
        assert_eq!(draft.id().map(|id| *id.as_uuid()), Some(id));
        assert_eq!(draft.title(), record.title);
        assert_eq!(draft.content().as_str(), record.content);
        assert_eq!(draft.category(), "development");
        assert_eq!(draft.status(), PostStatus::Published);
        assert_eq!(draft.featured_media().preview_url(), Some("/placeholder.svg"));
        assert!(draft.tags().contains("tutorial"));
        assert_eq!(draft.seo().keywords, "nextjs, react, tutorial");
        assert_eq!(session.submit_label(), "Update Post");
    }

    #[tokio::test]
    async fn test_open_missing_post_is_fatal() {
        let missing = Uuid::new_v4();
        let result = handler(InMemoryPostStore::new().arc())
            .handle(OpenEditor::edit(missing))
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::NotFound { resource_type: "Post", id }) if id == missing
        ));
    }

    #[tokio::test]
    async fn test_open_with_unreachable_store_is_fatal() {
        let result = handler(Arc::new(UnreachableStore))
            .handle(OpenEditor::edit(Uuid::new_v4()))
            .await;

        assert!(matches!(result, Err(ApplicationError::RepositoryError(_))));
    }
}
