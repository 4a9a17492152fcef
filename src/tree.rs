//! 声明式树描述
//!
//! `Tree` 是工厂的输入形态：描述符 + 属性包 + 有序子项。
//! 构建一次、消费一次，工厂不持有它。

use crate::dom::{PropertyBag, Value};
use crate::error::RenderError;
use crate::factory::{ComponentProps, ElementDescriptor};

/// 树的子项 - 子树或文本
#[derive(Debug, Clone, PartialEq)]
pub enum TreeChild {
    Tree(Tree),
    Text(String),
}

/// 声明式树
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    pub descriptor: ElementDescriptor,
    pub props: Option<PropertyBag>,
    pub children: Vec<TreeChild>,
}

impl Tree {
    pub fn new(descriptor: ElementDescriptor) -> Self {
        Self {
            descriptor,
            props: None,
            children: Vec::new(),
        }
    }

    /// 标签元素
    pub fn element(tag: &str) -> Self {
        Self::new(ElementDescriptor::tag(tag))
    }

    /// 组件元素
    pub fn component(
        f: impl Fn(ComponentProps) -> Result<Value, RenderError> + 'static,
    ) -> Self {
        Self::new(ElementDescriptor::component(f))
    }

    /// 链式设置属性
    pub fn prop(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.props
            .get_or_insert_with(PropertyBag::new)
            .insert(key, value);
        self
    }

    /// 链式追加子项
    pub fn child(mut self, child: impl Into<TreeChild>) -> Self {
        self.children.push(child.into());
        self
    }

    /// 链式追加文本子项
    pub fn text(self, content: &str) -> Self {
        self.child(content)
    }
}

impl From<Tree> for TreeChild {
    fn from(tree: Tree) -> Self {
        Self::Tree(tree)
    }
}

impl From<&str> for TreeChild {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for TreeChild {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}
