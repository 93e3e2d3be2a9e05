//! Post Context - 正文内容
//!
//! 一份规范标记字符串，两个编辑视图:
//! - 结构化视图: 在渲染结果上直接编辑，失焦时回写完整标记
//! - 源码视图: 直接编辑原始标记
//!
//! 两个视图都读写同一个字段，切换视图不会转换内容。

use serde::{Deserialize, Serialize};

use super::DraftError;

/// 当前激活的编辑视图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorView {
    /// 可视化（结构化）视图
    #[default]
    Structured,
    /// HTML 源码视图
    Source,
}

/// 工具栏格式命令
///
/// 每个命令对应一段固定的标记片段，执行时追加到内容末尾。
/// 命令不是开关，重复执行会重复追加。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatCommand {
    Bold,
    Italic,
    BulletList,
    OrderedList,
    Link,
    Image,
    AlignLeft,
    AlignCenter,
    AlignRight,
}

impl FormatCommand {
    pub const ALL: [FormatCommand; 9] = [
        FormatCommand::Bold,
        FormatCommand::Italic,
        FormatCommand::BulletList,
        FormatCommand::OrderedList,
        FormatCommand::Link,
        FormatCommand::Image,
        FormatCommand::AlignLeft,
        FormatCommand::AlignCenter,
        FormatCommand::AlignRight,
    ];

    /// 工具栏上的命令名
    pub fn name(&self) -> &'static str {
        match self {
            FormatCommand::Bold => "bold",
            FormatCommand::Italic => "italic",
            FormatCommand::BulletList => "bulletList",
            FormatCommand::OrderedList => "orderedList",
            FormatCommand::Link => "link",
            FormatCommand::Image => "image",
            FormatCommand::AlignLeft => "alignLeft",
            FormatCommand::AlignCenter => "alignCenter",
            FormatCommand::AlignRight => "alignRight",
        }
    }

    /// 命令追加的标记片段
    pub fn fragment(&self) -> &'static str {
        match self {
            FormatCommand::Bold => "<strong>Bold text</strong>",
            FormatCommand::Italic => "<em>Italic text</em>",
            FormatCommand::BulletList => "<ul><li>List item</li></ul>",
            FormatCommand::OrderedList => "<ol><li>List item</li></ol>",
            FormatCommand::Link => r##"<a href="#">Link text</a>"##,
            FormatCommand::Image => r#"<img src="/placeholder.svg" alt="Image" />"#,
            FormatCommand::AlignLeft => {
                r#"<div style="text-align: left;">Left aligned text</div>"#
            }
            FormatCommand::AlignCenter => {
                r#"<div style="text-align: center;">Center aligned text</div>"#
            }
            FormatCommand::AlignRight => {
                r#"<div style="text-align: right;">Right aligned text</div>"#
            }
        }
    }
}

impl std::str::FromStr for FormatCommand {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatCommand::ALL
            .into_iter()
            .find(|command| command.name() == s)
            .ok_or_else(|| DraftError::UnknownCommand(s.to_string()))
    }
}

/// 正文内容管理器
///
/// 不变量:
/// - 任意时刻只存在一份规范内容 `markup`
/// - 任意时刻只有一个激活视图
/// - 每次编辑同步生效（无防抖、无异步解析）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentBody {
    markup: String,
    active_view: EditorView,
}

impl ContentBody {
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            active_view: EditorView::default(),
        }
    }

    /// 结构化视图编辑：用渲染区域回写的完整标记替换内容
    pub fn edit_structured(&mut self, markup: impl Into<String>) {
        self.markup = markup.into();
    }

    /// 源码视图编辑：用输入的完整标记替换内容
    pub fn edit_source(&mut self, markup: impl Into<String>) {
        self.markup = markup.into();
    }

    /// 追加命令片段，返回更新后的内容
    pub fn apply_command(&mut self, command: FormatCommand) -> &str {
        self.markup.push_str(command.fragment());
        &self.markup
    }

    /// 切换视图，不改变内容
    pub fn switch_view(&mut self, view: EditorView) {
        self.active_view = view;
    }

    pub fn active_view(&self) -> EditorView {
        self.active_view
    }

    /// 工具栏只在结构化视图下展示
    pub fn commands_available(&self) -> bool {
        self.active_view == EditorView::Structured
    }

    pub fn as_str(&self) -> &str {
        &self.markup
    }

    pub fn is_empty(&self) -> bool {
        self.markup.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn edit_strategy() -> impl Strategy<Value = (EditorView, String)> {
        (
            prop_oneof![Just(EditorView::Structured), Just(EditorView::Source)],
            ".{0,40}",
        )
    }

    proptest! {
        #[test]
        fn prop_content_equals_last_write(
            initial in ".{0,40}",
            edits in prop::collection::vec(edit_strategy(), 1..20),
        ) {
            let mut body = ContentBody::new(initial);
            for (view, markup) in &edits {
                body.switch_view(*view);
                match view {
                    EditorView::Structured => body.edit_structured(markup.clone()),
                    EditorView::Source => body.edit_source(markup.clone()),
                }
                prop_assert_eq!(body.as_str(), markup.as_str());
            }

            // 切换视图不改变内容
            let last = edits.last().map(|(_, m)| m.clone()).unwrap_or_default();
            body.switch_view(EditorView::Source);
            body.switch_view(EditorView::Structured);
            prop_assert_eq!(body.as_str(), last.as_str());
        }
    }

    #[test]
    fn test_last_write_wins_across_views() {
        let mut body = ContentBody::default();
        let edits = [
            (EditorView::Structured, "<p>a</p>"),
            (EditorView::Source, "<p>b</p>"),
            (EditorView::Source, ""),
            (EditorView::Structured, "<p>c</p>"),
        ];

        for (view, markup) in edits {
            body.switch_view(view);
            match view {
                EditorView::Structured => body.edit_structured(markup),
                EditorView::Source => body.edit_source(markup),
            }
            assert_eq!(body.as_str(), markup);
        }
    }

    #[test]
    fn test_switch_view_keeps_content() {
        let mut body = ContentBody::new("<p>hello</p>");
        body.switch_view(EditorView::Source);
        assert_eq!(body.as_str(), "<p>hello</p>");
        assert!(!body.commands_available());
        body.switch_view(EditorView::Structured);
        assert_eq!(body.as_str(), "<p>hello</p>");
        assert!(body.commands_available());
    }

    #[test]
    fn test_commands_append_repeatedly() {
        let mut body = ContentBody::new("<p>x</p>");
        body.apply_command(FormatCommand::Bold);
        let updated = body.apply_command(FormatCommand::Bold).to_string();
        assert_eq!(
            updated,
            "<p>x</p><strong>Bold text</strong><strong>Bold text</strong>"
        );
    }

    #[test]
    fn test_command_names_parse() {
        for command in FormatCommand::ALL {
            assert_eq!(command.name().parse::<FormatCommand>().unwrap(), command);
        }
        assert_eq!(
            "underline".parse::<FormatCommand>(),
            Err(DraftError::UnknownCommand("underline".to_string()))
        );
    }
}
