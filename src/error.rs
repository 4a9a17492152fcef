//! 渲染错误定义

use std::error::Error;
use std::fmt;

/// 渲染失败类型
///
/// 构建过程不做任何重试或局部恢复：返回 `Err` 即表示整棵树不可用。
#[derive(Debug)]
pub enum RenderError {
    /// 标签名不在已知元素类型注册表中
    UnknownElementKind { tag: String },
    /// 组件函数返回了既不是节点也不是树的值
    ContractViolation { returned: &'static str },
    /// 组件函数自身的业务错误，原样向上传递
    Component(Box<dyn Error + Send + Sync>),
}

impl RenderError {
    pub fn unknown_tag(tag: &str) -> Self {
        Self::UnknownElementKind { tag: tag.to_string() }
    }

    /// 包装组件内部错误（字符串或任意 Error 类型）
    pub fn component(err: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self::Component(err.into())
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownElementKind { tag } => {
                write!(f, "unknown element kind: {}", tag)
            }
            Self::ContractViolation { returned } => {
                write!(f, "component returned {}, expected a node or a tree", returned)
            }
            Self::Component(err) => write!(f, "component failed: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Component(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
