//! 构建入口：子节点归一化、节点构建、组件解析、分发

use crate::dom::{Node, PropertyBag, Value};
use crate::error::RenderError;
use crate::factory::descriptor::{Component, ComponentProps, ElementDescriptor};
use crate::registry::{Registry, FALLBACK_TAG};
use crate::tree::{Tree, TreeChild};

/// 未知标签处理策略
///
/// 默认拒绝（整棵树构建失败）；`Fallback` 用通用容器替代，
/// 代价是拼写错误的标签会被静默吞掉。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownTagPolicy {
    #[default]
    Reject,
    Fallback,
}

/// 子节点条目 - 文本或已构建好的节点，顺序有意义
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Node(Node),
    Text(String),
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// 树工厂
///
/// 唯一的递归入口：按描述符分发到组件解析或节点构建，
/// 嵌套子树通过再次调用工厂完成。构建是单线程同步的，
/// 失败直接沿调用栈向上传播，没有部分结果。
#[derive(Debug, Clone, Default)]
pub struct TreeFactory {
    registry: Registry,
    policy: UnknownTagPolicy,
}

impl TreeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: UnknownTagPolicy) -> Self {
        Self {
            registry: Registry::new(),
            policy,
        }
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// 构建一个元素
    ///
    /// 组件路径：先归一化子节点，再调用组件，组件的返回值
    /// 就是结果，本层不额外包一层节点。
    /// 标签路径：交给节点构建器，内部归一化后挂接子节点。
    pub fn create_element(
        &self,
        descriptor: &ElementDescriptor,
        props: Option<PropertyBag>,
        children: Vec<Child>,
    ) -> Result<Node, RenderError> {
        let bag = props.unwrap_or_default();
        match descriptor {
            ElementDescriptor::Component(component) => {
                let normalized = Self::normalize_children(children);
                self.resolve_component(component, bag, normalized)
            }
            ElementDescriptor::Tag(tag) => self.build_node(tag, &bag, children),
        }
    }

    /// 渲染声明式树：子树递归经过 create_element，前序求值
    pub fn render(&self, tree: &Tree) -> Result<Node, RenderError> {
        let mut children = Vec::with_capacity(tree.children.len());
        for child in &tree.children {
            match child {
                TreeChild::Text(text) => children.push(Child::Text(text.clone())),
                TreeChild::Tree(sub) => children.push(Child::Node(self.render(sub)?)),
            }
        }
        self.create_element(&tree.descriptor, tree.props.clone(), children)
    }

    /// 子节点归一化：文本换成文本节点，节点原样通过，顺序保持
    fn normalize_children(children: Vec<Child>) -> Vec<Node> {
        children
            .into_iter()
            .map(|child| match child {
                Child::Text(text) => Node::new_text(&text),
                Child::Node(node) => node,
            })
            .collect()
    }

    /// 节点构建器：查注册表、建节点、逐键拷贝属性、按序挂接子节点
    fn build_node(
        &self,
        tag: &str,
        bag: &PropertyBag,
        children: Vec<Child>,
    ) -> Result<Node, RenderError> {
        let tag = if self.registry.contains(tag) {
            tag
        } else {
            match self.policy {
                UnknownTagPolicy::Reject => return Err(RenderError::unknown_tag(tag)),
                UnknownTagPolicy::Fallback => FALLBACK_TAG,
            }
        };

        let mut node = Node::new_element(tag);
        node.assign_props(bag);
        for child in Self::normalize_children(children) {
            node.append_child(child);
        }
        Ok(node)
    }

    /// 组件解析器：组件返回节点直接采用，返回树则再走一遍工厂，
    /// 其余返回值是契约违反；组件自身的错误原样上抛
    fn resolve_component(
        &self,
        component: &Component,
        bag: PropertyBag,
        children: Vec<Node>,
    ) -> Result<Node, RenderError> {
        let output = (**component)(ComponentProps { bag, children })?;
        match output {
            Value::Node(node) => Ok(*node),
            Value::Tree(tree) => self.render(&tree),
            other => Err(RenderError::ContractViolation {
                returned: other.kind_name(),
            }),
        }
    }
}
