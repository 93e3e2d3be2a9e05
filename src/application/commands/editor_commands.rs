//! Editor Commands

use uuid::Uuid;

/// 打开编辑器命令
///
/// `post_id` 为 None 时新建文章，否则加载已有文章
#[derive(Debug, Clone, Default)]
pub struct OpenEditor {
    pub post_id: Option<Uuid>,
}

impl OpenEditor {
    pub fn new_post() -> Self {
        Self { post_id: None }
    }

    pub fn edit(post_id: Uuid) -> Self {
        Self {
            post_id: Some(post_id),
        }
    }
}
