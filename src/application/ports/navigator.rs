//! Navigator Port - 编辑器之外的页面跳转

/// Navigator Port
///
/// 同步调用，由宿主界面实现
pub trait NavigatorPort: Send + Sync {
    /// 跳转到文章列表（保存成功后调用且仅调用一次）
    fn navigate_to_listing(&self);

    /// 返回上一页（取消编辑）
    fn navigate_back(&self);
}
