//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod catalogs;
mod navigator;
mod post_store;

pub use catalogs::{
    CategoryCatalogPort, CategoryRecord, MediaCatalogPort, MediaRecord, TagCatalogPort,
};
pub use navigator::NavigatorPort;
pub use post_store::{PostPayload, PostRecord, PostStorePort, RepositoryError, SeoRecord};
