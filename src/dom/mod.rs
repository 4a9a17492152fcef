//! DOM 节点和属性值

pub mod node;
pub mod value;

pub use node::{Node, NodeKind};
pub use value::{EventHandler, PropertyBag, Value};
