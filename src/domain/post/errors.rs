//! Post Context - Errors

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("媒体引用不能为空")]
    EmptyMediaRef,

    #[error("未知的格式命令: {0}")]
    UnknownCommand(String),

    #[error("未知的文章状态: {0}")]
    UnknownStatus(String),
}

/// 需要校验的草稿字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    Title,
    Category,
}

impl DraftField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Category => "category",
        }
    }
}

impl std::fmt::Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 字段级校验错误（仅用于在表单上标注，不改变草稿状态）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: DraftField,
    pub message: &'static str,
}

impl FieldError {
    pub fn required(field: DraftField) -> Self {
        let message = match field {
            DraftField::Title => "Title is required",
            DraftField::Category => "Category is required",
        };
        Self { field, message }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
