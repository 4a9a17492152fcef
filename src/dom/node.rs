//! DOM 节点模型

use crate::dom::value::{PropertyBag, Value};
use crate::event::Event;
use serde_json::Value as JsonValue;

/// 节点类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
}

/// DOM 节点
///
/// 元素节点携带标签名、属性包和有序子节点列表；
/// 文本节点只携带文本内容。子节点由父节点独占持有。
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    tag: String,
    properties: PropertyBag,
    children: Vec<Node>,
    text: String,
}

impl Node {
    pub fn new_element(tag: &str) -> Self {
        Self {
            kind: NodeKind::Element,
            tag: tag.to_string(),
            properties: PropertyBag::new(),
            children: Vec::new(),
            text: String::new(),
        }
    }

    pub fn new_text(content: &str) -> Self {
        Self {
            kind: NodeKind::Text,
            tag: String::new(),
            properties: PropertyBag::new(),
            children: Vec::new(),
            text: content.to_string(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_text(&self) -> bool {
        self.kind == NodeKind::Text
    }

    /// 元素标签名，文本节点为空串
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn properties(&self) -> &PropertyBag {
        &self.properties
    }

    pub fn get_prop(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// 设置单个属性，后写覆盖
    pub fn set_prop(&mut self, key: &str, value: impl Into<Value>) {
        self.properties.insert(key, value);
    }

    /// 把属性包逐键拷贝到节点上
    pub fn assign_props(&mut self, bag: &PropertyBag) {
        for (key, value) in bag.iter() {
            self.properties.insert(key, value.clone());
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// 追加子节点，所有权移入父节点
    pub fn append_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// 分发事件：查找 `on<type>` 属性，若是处理函数则调用
    ///
    /// 返回事件是否被消费。不做冒泡，挂载与交互循环不在本层。
    pub fn dispatch_event(&self, event: &Event) -> bool {
        match self.get_prop(&event.handler_key()) {
            Some(Value::Handler(handler)) => {
                handler(event);
                true
            }
            _ => false,
        }
    }

    /// JSON 快照，用于检查和测试
    pub fn to_json(&self) -> JsonValue {
        match self.kind {
            NodeKind::Text => serde_json::json!({ "text": self.text }),
            NodeKind::Element => serde_json::json!({
                "tag": self.tag,
                "properties": self.properties.to_json(),
                "children": self.children.iter().map(Node::to_json).collect::<Vec<_>>(),
            }),
        }
    }

    /// 序列化为 HTML 文本
    ///
    /// 只输出标量属性，处理函数和节点值属性跳过。
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        if self.kind == NodeKind::Text {
            out.push_str(&escape_text(&self.text));
            return;
        }

        out.push('<');
        out.push_str(&self.tag);
        for (key, value) in self.properties.iter() {
            let rendered = match value {
                Value::Str(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            };
            if let Some(v) = rendered {
                out.push(' ');
                out.push_str(key);
                out.push_str("=\"");
                out.push_str(&escape_attr(&v));
                out.push('"');
            }
        }
        out.push('>');

        for child in &self.children {
            child.write_html(out);
        }

        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
