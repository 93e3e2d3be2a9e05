//! Post Context - 标签集合

use std::collections::BTreeSet;

/// 草稿关联的标签集合
///
/// 不变量:
/// - 不含重复标签
/// - 不校验标签是否存在于标签目录中
/// - 顺序无业务含义（内部有序只为输出稳定）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 不存在则添加，存在则移除；返回操作后是否包含该标签
    pub fn toggle(&mut self, tag: &str) -> bool {
        if self.0.remove(tag) {
            false
        } else {
            self.0.insert(tag.to_string());
            true
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_toggle_twice_is_identity(
            initial in prop::collection::vec("[a-z]{0,6}", 0..10),
            tag in "[a-z]{0,6}",
        ) {
            let original: TagSet = initial.into_iter().collect();
            let mut tags = original.clone();

            let added = tags.toggle(&tag);
            prop_assert_eq!(added, !original.contains(&tag));
            prop_assert_eq!(tags.contains(&tag), added);

            tags.toggle(&tag);
            prop_assert_eq!(tags, original);
        }
    }

    #[test]
    fn test_toggle_twice_restores() {
        let original: TagSet = ["a", "b"].into_iter().collect();
        for tag in ["a", "b", "c", ""] {
            let mut tags = original.clone();
            tags.toggle(tag);
            tags.toggle(tag);
            assert_eq!(tags, original);
        }
    }

    #[test]
    fn test_toggle_membership() {
        let mut tags: TagSet = ["a", "b"].into_iter().collect();
        assert!(!tags.toggle("b"));
        assert!(tags.toggle("c"));
        assert_eq!(tags.to_vec(), vec!["a".to_string(), "c".to_string()]);
        assert!(tags.contains("c"));
        assert!(!tags.contains("b"));
    }

    #[test]
    fn test_collect_dedups() {
        let tags: TagSet = ["x", "x", "y"].into_iter().collect();
        assert_eq!(tags.len(), 2);
    }
}
