//! Postdesk - 文章编辑会话演示
//!
//! 使用内存存储走一遍完整流程:
//! 新建草稿并保存 → 编辑已有文章，首次提交失败后重试

use std::sync::Arc;

use postdesk::application::ports::RepositoryError;
use postdesk::application::{
    ListCategories, ListCategoriesHandler, ListMedia, ListMediaHandler, ListTags,
    ListTagsHandler, OpenEditor, OpenEditorHandler, PostPayload, SubmitOutcome,
};
use postdesk::config::{load_config, print_config};
use postdesk::domain::post::{EditorView, FormatCommand};
use postdesk::infrastructure::memory::{InMemoryCatalog, InMemoryPostStore, RecordingNavigator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!("{},postdesk={}", config.log.level, config.log.level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Postdesk - 文章编辑会话演示");
    print_config(&config);

    let (store, sample_id) = if config.catalog.seed_demo_data {
        let (store, id) = InMemoryPostStore::with_demo_data();
        (store.arc(), Some(id))
    } else {
        (InMemoryPostStore::new().arc(), None)
    };
    let catalog = Arc::new(if config.catalog.seed_demo_data {
        InMemoryCatalog::demo()
    } else {
        InMemoryCatalog::default()
    });
    let navigator = Arc::new(RecordingNavigator::new(&config.editor.listing_path));

    let categories = ListCategoriesHandler::new(catalog.clone())
        .handle(ListCategories)
        .await?;
    let media = ListMediaHandler::new(catalog.clone()).handle(ListMedia).await?;
    let tags = ListTagsHandler::new(catalog).handle(ListTags).await?;
    tracing::info!(
        categories = categories.len(),
        media = media.len(),
        tags = tags.len(),
        "Catalogs loaded"
    );

    let handler = OpenEditorHandler::new(
        store.clone(),
        navigator.clone(),
        config.editor.session_config(),
    );

    // 新建文章
    let mut session = handler.handle(OpenEditor::new_post()).await?;
    {
        let draft = session.draft_mut()?;
        draft.set_title("Hello");
        if let Some(category) = categories.iter().find(|c| c.id == "design") {
            draft.set_category(category.id.clone());
        }
        draft.apply_command(FormatCommand::Bold);
        draft.apply_command(FormatCommand::Bold);
        if let Some(tag) = tags.first() {
            draft.toggle_tag(tag);
        }
        if let Some(item) = media.first() {
            draft.select_media_url(&item.url);
        }
    }
    report(session.submit().await?, store.last_payload());

    // 编辑已有文章
    if let Some(id) = sample_id {
        let mut session = handler.handle(OpenEditor::edit(id)).await?;
        {
            let draft = session.draft_mut()?;
            draft.switch_view(EditorView::Source);
            draft.edit_source("<p>Rewritten in the source view.</p>");
            draft.toggle_tag("react");
            draft.toggle_tag("performance");
            draft.clear_media();
        }

        store.fail_next_commit(RepositoryError::Unavailable("network".to_string()));
        report(session.submit().await?, store.last_payload());
        if let Some(reason) = session.last_failure() {
            tracing::warn!(reason = %reason, "Retrying after failure");
        }
        session.dismiss_failure();
        report(session.submit().await?, store.last_payload());
    }

    tracing::info!(
        commits = store.commit_count(),
        navigations = ?navigator.history(),
        "Demo complete"
    );

    Ok(())
}

fn report(outcome: SubmitOutcome, payload: Option<PostPayload>) {
    match outcome {
        SubmitOutcome::Succeeded(record) => {
            tracing::info!(post_id = %record.id, title = %record.title, "Saved");
        }
        SubmitOutcome::Failed { reason } => {
            tracing::warn!(reason = %reason, "Save failed, draft kept");
        }
        SubmitOutcome::AlreadySubmitting => {
            tracing::debug!("Save already in progress");
        }
    }

    if let Some(payload) = payload {
        match serde_json::to_string_pretty(&payload) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::error!(error = %e, "Failed to render payload"),
        }
    }
}
