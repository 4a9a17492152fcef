//! 树工厂 - 声明式描述到 DOM 树的递归构建

mod build;
mod descriptor;

pub use build::{Child, TreeFactory, UnknownTagPolicy};
pub use descriptor::{Component, ComponentProps, ElementDescriptor};
