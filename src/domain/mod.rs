//! Domain Layer - 领域层
//!
//! 只包含一个限界上下文:
//! - Post Context: 文章草稿编辑（草稿聚合、内容双视图、标签、封面媒体、SEO）

pub mod post;
