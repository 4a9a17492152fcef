//! Mini DOM Engine - 声明式 UI 树到 DOM 树的渲染器
//! 支持标签元素、函数组件、属性包、事件处理

mod error;
pub use error::RenderError;

// DOM 节点模型
pub mod dom;
pub use dom::{EventHandler, Node, NodeKind, PropertyBag, Value};

// 事件系统
pub mod event;
pub use event::Event;

// 元素类型注册表
pub mod registry;
pub use registry::{Registry, FALLBACK_TAG};

// 树工厂
pub mod factory;
pub use factory::{Child, Component, ComponentProps, ElementDescriptor, TreeFactory, UnknownTagPolicy};

// 声明式树
pub mod tree;
pub use tree::{Tree, TreeChild};

// 单元测试
#[cfg(test)]
mod tests;
