//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::time::Duration;

use crate::application::session::SessionConfig;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 编辑器配置
    #[serde(default)]
    pub editor: EditorConfig,

    /// 目录配置
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 编辑器配置
#[derive(Debug, Clone, Deserialize)]
pub struct EditorConfig {
    /// 本地提交超时（秒），0 表示不限制
    #[serde(default)]
    pub commit_timeout_secs: u64,

    /// 保存成功后跳转的列表路径
    #[serde(default = "default_listing_path")]
    pub listing_path: String,
}

fn default_listing_path() -> String {
    "/dashboard/posts".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            commit_timeout_secs: 0,
            listing_path: default_listing_path(),
        }
    }
}

impl EditorConfig {
    /// 转换为会话配置
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            commit_timeout: (self.commit_timeout_secs > 0)
                .then(|| Duration::from_secs(self.commit_timeout_secs)),
        }
    }
}

/// 目录配置
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// 是否加载示例数据
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
}

fn default_seed_demo_data() -> bool {
    true
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: default_seed_demo_data(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否输出 JSON 格式日志
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.editor.commit_timeout_secs, 0);
        assert_eq!(config.editor.listing_path, "/dashboard/posts");
        assert!(config.catalog.seed_demo_data);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_session_config_timeout() {
        let mut config = EditorConfig::default();
        assert_eq!(config.session_config().commit_timeout, None);

        config.commit_timeout_secs = 30;
        assert_eq!(
            config.session_config().commit_timeout,
            Some(Duration::from_secs(30))
        );
    }
}
