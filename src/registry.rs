//! 元素类型注册表

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// 未知标签回退时使用的通用容器标签
pub const FALLBACK_TAG: &str = "div";

/// 内置元素标签集合
static BUILTIN_TAGS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "div", "span", "p", "a", "img", "button", "input", "textarea", "select",
        "option", "label", "form", "ul", "ol", "li", "table", "tr", "td", "th",
        "h1", "h2", "h3", "h4", "h5", "h6", "strong", "em", "pre", "code",
        "section", "article", "header", "footer", "nav", "main", "br", "hr",
    ]
    .into_iter()
    .collect()
});

pub fn is_builtin_tag(tag: &str) -> bool {
    BUILTIN_TAGS.contains(tag)
}

/// 已知元素类型注册表
///
/// 内置 HTML 标签之外，宿主可以注册自定义元素类型。
#[derive(Debug, Clone, Default)]
pub struct Registry {
    custom: HashSet<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册自定义元素类型
    pub fn register(&mut self, tag: &str) {
        self.custom.insert(tag.to_string());
    }

    pub fn contains(&self, tag: &str) -> bool {
        is_builtin_tag(tag) || self.custom.contains(tag)
    }
}
