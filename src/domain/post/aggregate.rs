//! Post Context - Aggregate Root

use serde::Serialize;

use super::{
    ContentBody, DraftField, EditorView, FeaturedMedia, FieldError, FormatCommand, MediaRef,
    PostId, PostStatus, SeoMeta, TagSet,
};

/// Draft 聚合根
///
/// 不变量:
/// - 规范内容 `content` 只有一份，两个编辑视图都读写它
/// - `tags` 无重复
/// - `featured_media` 为空或恰好一个引用
/// - `id` 存在表示编辑已持久化的文章，不存在表示新文章
///
/// 一个编辑会话独占一个 Draft，所有修改都经由 `&mut self`。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    id: Option<PostId>,
    title: String,
    excerpt: String,
    content: ContentBody,
    category: String,
    status: PostStatus,
    featured_media: FeaturedMedia,
    tags: TagSet,
    seo: SeoMeta,
}

/// Draft 的不可变快照，提交时一次性读取
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftSnapshot {
    pub id: Option<PostId>,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub status: PostStatus,
    pub featured_media: Option<MediaRef>,
    pub tags: Vec<String>,
    pub seo: SeoMeta,
}

impl Draft {
    /// 新文章的默认草稿：status = draft，空字符串，空标签，无封面
    pub fn new_default() -> Self {
        Self::default()
    }

    /// 从已获取的实体一次性整体恢复
    pub fn restore(snapshot: DraftSnapshot) -> Self {
        Self {
            id: snapshot.id,
            title: snapshot.title,
            excerpt: snapshot.excerpt,
            content: ContentBody::new(snapshot.content),
            category: snapshot.category,
            status: snapshot.status,
            featured_media: FeaturedMedia::new(snapshot.featured_media),
            tags: snapshot.tags.into_iter().collect(),
            seo: snapshot.seo,
        }
    }

    /// 读取当前完整状态
    pub fn snapshot(&self) -> DraftSnapshot {
        DraftSnapshot {
            id: self.id,
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            content: self.content.as_str().to_string(),
            category: self.category.clone(),
            status: self.status,
            featured_media: self.featured_media.current().cloned(),
            tags: self.tags.to_vec(),
            seo: self.seo.clone(),
        }
    }

    /// 校验提交必填字段
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push(FieldError::required(DraftField::Title));
        }
        if self.category.trim().is_empty() {
            errors.push(FieldError::required(DraftField::Category));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    // Scalar fields
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_excerpt(&mut self, excerpt: impl Into<String>) {
        self.excerpt = excerpt.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_status(&mut self, status: PostStatus) {
        self.status = status;
    }

    pub fn set_seo_title(&mut self, title: impl Into<String>) {
        self.seo.title = title.into();
    }

    pub fn set_seo_description(&mut self, description: impl Into<String>) {
        self.seo.description = description.into();
    }

    pub fn set_seo_keywords(&mut self, keywords: impl Into<String>) {
        self.seo.keywords = keywords.into();
    }

    // Content
    pub fn edit_structured(&mut self, markup: impl Into<String>) {
        self.content.edit_structured(markup);
    }

    pub fn edit_source(&mut self, markup: impl Into<String>) {
        self.content.edit_source(markup);
    }

    pub fn apply_command(&mut self, command: FormatCommand) -> &str {
        self.content.apply_command(command)
    }

    pub fn switch_view(&mut self, view: EditorView) {
        self.content.switch_view(view);
    }

    // Tags
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        self.tags.toggle(tag)
    }

    // Featured media
    pub fn select_media(&mut self, reference: MediaRef) {
        self.featured_media.select(reference);
    }

    pub fn select_media_url(&mut self, url: &str) {
        self.featured_media.select_url(url);
    }

    pub fn clear_media(&mut self) {
        self.featured_media.clear();
    }

    // Getters
    pub fn id(&self) -> Option<&PostId> {
        self.id.as_ref()
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }

    pub fn content(&self) -> &ContentBody {
        &self.content
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn status(&self) -> PostStatus {
        self.status
    }

    pub fn featured_media(&self) -> &FeaturedMedia {
        &self.featured_media
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn seo(&self) -> &SeoMeta {
        &self.seo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> DraftSnapshot {
        DraftSnapshot {
            id: Some(PostId::new()),
            title: "Getting Started".to_string(),
            excerpt: "Intro".to_string(),
            content: "<p>body</p>".to_string(),
            category: "development".to_string(),
            status: PostStatus::Published,
            featured_media: Some(MediaRef::new("/placeholder.svg").unwrap()),
            tags: vec!["a".to_string(), "b".to_string()],
            seo: SeoMeta {
                title: "SEO".to_string(),
                description: "desc".to_string(),
                keywords: "a, b".to_string(),
            },
        }
    }

    #[test]
    fn test_default_draft() {
        let draft = Draft::new_default();
        assert!(draft.is_new());
        assert_eq!(draft.status(), PostStatus::Draft);
        assert!(draft.content().is_empty());
        assert!(draft.tags().is_empty());
        assert!(!draft.featured_media().is_set());
        assert_eq!(draft.seo(), &SeoMeta::default());
    }

    #[test]
    fn test_restore_then_snapshot_is_identity() {
        let snapshot = sample_snapshot();
        let draft = Draft::restore(snapshot.clone());
        assert!(!draft.is_new());
        assert_eq!(draft.snapshot(), snapshot);
    }

    #[test]
    fn test_snapshot_reflects_every_slice() {
        let mut draft = Draft::restore(sample_snapshot());
        draft.set_title("New title");
        draft.edit_source("<p>src</p>");
        draft.apply_command(FormatCommand::Italic);
        draft.toggle_tag("b");
        draft.toggle_tag("c");
        draft.clear_media();
        draft.set_seo_keywords("k");

        let snapshot = draft.snapshot();
        assert_eq!(snapshot.title, "New title");
        assert_eq!(snapshot.content, "<p>src</p><em>Italic text</em>");
        assert_eq!(snapshot.tags, vec!["a".to_string(), "c".to_string()]);
        assert_eq!(snapshot.featured_media, None);
        assert_eq!(snapshot.seo.keywords, "k");
    }

    #[test]
    fn test_validate_reports_each_missing_field() {
        let mut draft = Draft::new_default();
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.iter().map(|e| e.field).collect::<Vec<_>>(),
            vec![DraftField::Title, DraftField::Category]
        );

        draft.set_title("Hello");
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors, vec![FieldError::required(DraftField::Category)]);

        draft.set_category("design");
        assert!(draft.validate().is_ok());
    }
}
