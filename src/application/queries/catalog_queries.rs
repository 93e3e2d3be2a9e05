//! Catalog Queries

/// 列出所有分类
#[derive(Debug, Clone, Default)]
pub struct ListCategories;

/// 列出媒体库
#[derive(Debug, Clone, Default)]
pub struct ListMedia;

/// 列出可选标签
#[derive(Debug, Clone, Default)]
pub struct ListTags;
