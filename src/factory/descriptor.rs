//! 元素描述符和组件定义

use crate::dom::{Node, PropertyBag, Value};
use crate::error::RenderError;
use std::fmt;
use std::rc::Rc;

/// 组件函数
///
/// 接收属性包与归一化后的子节点，返回动态值。
/// 合法的返回值只有 [`Value::Node`] 和 [`Value::Tree`]，
/// 其余一律按契约违反处理。
pub type Component = Rc<dyn Fn(ComponentProps) -> Result<Value, RenderError>>;

/// 组件调用参数 - 属性包并入 children 列表
#[derive(Debug, Clone)]
pub struct ComponentProps {
    pub bag: PropertyBag,
    pub children: Vec<Node>,
}

impl ComponentProps {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.bag.get(key)
    }
}

/// 元素描述符 - 标签名或组件引用，二选一
#[derive(Clone)]
pub enum ElementDescriptor {
    Tag(String),
    Component(Component),
}

impl ElementDescriptor {
    pub fn tag(name: &str) -> Self {
        Self::Tag(name.to_string())
    }

    pub fn component(f: impl Fn(ComponentProps) -> Result<Value, RenderError> + 'static) -> Self {
        Self::Component(Rc::new(f))
    }

    pub fn is_component(&self) -> bool {
        matches!(self, Self::Component(_))
    }
}

impl fmt::Debug for ElementDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(name) => f.debug_tuple("Tag").field(name).finish(),
            Self::Component(_) => write!(f, "Component(..)"),
        }
    }
}

impl PartialEq for ElementDescriptor {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Tag(a), Self::Tag(b)) => a == b,
            // 组件按引用身份比较
            (Self::Component(a), Self::Component(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for ElementDescriptor {
    fn from(tag: &str) -> Self {
        Self::tag(tag)
    }
}
