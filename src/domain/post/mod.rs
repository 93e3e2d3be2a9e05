//! Post Context - 文章草稿限界上下文
//!
//! 职责:
//! - Draft 聚合根（一次编辑会话内唯一的可变实体）
//! - 正文内容的双视图管理（结构化视图 / 源码视图）
//! - 标签集合与封面媒体引用
//! - 提交前的字段校验

mod aggregate;
mod content;
mod errors;
mod media;
mod tags;
mod value_objects;

pub use aggregate::{Draft, DraftSnapshot};
pub use content::{ContentBody, EditorView, FormatCommand};
pub use errors::{DraftError, DraftField, FieldError};
pub use media::FeaturedMedia;
pub use tags::TagSet;
pub use value_objects::{MediaRef, PostId, PostStatus, SeoMeta};
