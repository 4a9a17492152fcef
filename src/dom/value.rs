//! 动态属性值和属性包

use crate::dom::node::Node;
use crate::event::Event;
use crate::tree::Tree;
use serde_json::Value as JsonValue;
use std::fmt;
use std::rc::Rc;

/// 事件处理函数，以 Rc 共享，克隆只复制引用
pub type EventHandler = Rc<dyn Fn(&Event)>;

/// 属性值
///
/// 属性包和组件返回值共用同一个动态值类型：
/// 属性侧常见的是标量和处理函数，组件返回侧只有
/// [`Value::Node`] 和 [`Value::Tree`] 是合法的。
#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    List(Vec<Value>),
    Handler(EventHandler),
    Node(Box<Node>),
    Tree(Box<Tree>),
}

impl Value {
    pub fn handler(f: impl Fn(&Event) + 'static) -> Self {
        Self::Handler(Rc::new(f))
    }

    /// 值类型名，用于错误信息
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::List(_) => "list",
            Self::Handler(_) => "handler",
            Self::Node(_) => "node",
            Self::Tree(_) => "tree",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// 从 JSON 值转换（对象转为字符串键的列表不支持，交给 PropertyBag::from_json）
    pub fn from_json(json: &JsonValue) -> Self {
        match json {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(*b),
            JsonValue::Number(n) => Self::Number(n.as_f64().unwrap_or(0.0)),
            JsonValue::String(s) => Self::Str(s.clone()),
            JsonValue::Array(items) => {
                Self::List(items.iter().map(Self::from_json).collect())
            }
            // 嵌套对象按其 JSON 文本保留
            JsonValue::Object(_) => Self::Str(json.to_string()),
        }
    }

    /// 转为 JSON 快照，处理函数等不可序列化的值用占位符表示
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Null => JsonValue::Null,
            Self::Bool(b) => JsonValue::Bool(*b),
            Self::Number(n) => serde_json::json!(n),
            Self::Str(s) => JsonValue::String(s.clone()),
            Self::List(items) => {
                JsonValue::Array(items.iter().map(Value::to_json).collect())
            }
            Self::Handler(_) => JsonValue::String("[handler]".to_string()),
            Self::Node(node) => node.to_json(),
            Self::Tree(_) => JsonValue::String("[tree]".to_string()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "Null"),
            Self::Bool(b) => write!(f, "Bool({})", b),
            Self::Number(n) => write!(f, "Number({})", n),
            Self::Str(s) => write!(f, "Str({:?})", s),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Handler(_) => write!(f, "Handler(..)"),
            Self::Node(node) => f.debug_tuple("Node").field(node).finish(),
            Self::Tree(tree) => f.debug_tuple("Tree").field(tree).finish(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            // 处理函数按引用身份比较
            (Self::Handler(a), Self::Handler(b)) => Rc::ptr_eq(a, b),
            (Self::Node(a), Self::Node(b)) => a == b,
            (Self::Tree(a), Self::Tree(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Number(v as f64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Node> for Value {
    fn from(v: Node) -> Self {
        Self::Node(Box::new(v))
    }
}

impl From<Tree> for Value {
    fn from(v: Tree) -> Self {
        Self::Tree(Box::new(v))
    }
}

/// 属性包 - 保持插入顺序的键值映射
///
/// 重复键采用后写覆盖（last-write-wins），位置保持首次插入处。
#[derive(Clone, Default, PartialEq)]
pub struct PropertyBag {
    entries: Vec<(String, Value)>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key.to_string(), value));
        }
    }

    /// 链式构造
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 从 JSON 对象构建属性包，键序保持 JSON 中的书写顺序
    pub fn from_json(json: &JsonValue) -> Option<Self> {
        let obj = json.as_object()?;
        let mut bag = Self::new();
        for (key, value) in obj {
            bag.insert(key, Value::from_json(value));
        }
        Some(bag)
    }

    pub fn to_json(&self) -> JsonValue {
        let mut map = serde_json::Map::new();
        for (key, value) in &self.entries {
            map.insert(key.clone(), value.to_json());
        }
        JsonValue::Object(map)
    }
}

impl fmt::Debug for PropertyBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}
