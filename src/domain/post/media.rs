//! Post Context - 封面媒体引用

use super::MediaRef;

/// 封面媒体持有者
///
/// 只持有引用，不拥有也不拉取媒体资源。要么为空，要么恰好一个引用。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeaturedMedia(Option<MediaRef>);

impl FeaturedMedia {
    pub fn new(reference: Option<MediaRef>) -> Self {
        Self(reference)
    }

    /// 设置或替换当前引用
    pub fn select(&mut self, reference: MediaRef) {
        self.0 = Some(reference);
    }

    /// 按 URL 选择；空 URL 等同于移除
    pub fn select_url(&mut self, url: &str) {
        match MediaRef::new(url) {
            Ok(reference) => self.select(reference),
            Err(_) => self.clear(),
        }
    }

    /// 移除引用，幂等
    pub fn clear(&mut self) {
        self.0 = None;
    }

    pub fn current(&self) -> Option<&MediaRef> {
        self.0.as_ref()
    }

    /// 预览地址，直接透传目录返回的 URL
    pub fn preview_url(&self) -> Option<&str> {
        self.0.as_ref().map(MediaRef::as_str)
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_selection_wins() {
        let mut media = FeaturedMedia::default();
        media.select(MediaRef::new("/1.png").unwrap());
        media.select(MediaRef::new("/2.png").unwrap());
        assert_eq!(media.preview_url(), Some("/2.png"));

        media.clear();
        media.clear();
        assert!(!media.is_set());

        media.select(MediaRef::new("/3.png").unwrap());
        assert_eq!(media.current().map(MediaRef::as_str), Some("/3.png"));
    }

    #[test]
    fn test_empty_url_clears() {
        let mut media = FeaturedMedia::new(Some(MediaRef::new("/1.png").unwrap()));
        media.select_url("");
        assert_eq!(media.current(), None);
    }
}
