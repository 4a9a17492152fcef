//! 事件系统 - 节点上的事件分发

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// 事件
///
/// `event_type` 是不带 `on` 前缀的事件名（如 `click`），
/// `detail` 携带任意 JSON 负载。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub event_type: String,
    pub detail: JsonValue,
}

impl Event {
    pub fn new(event_type: &str) -> Self {
        Self {
            event_type: event_type.to_string(),
            detail: JsonValue::Null,
        }
    }

    pub fn with_detail(event_type: &str, detail: JsonValue) -> Self {
        Self {
            event_type: event_type.to_string(),
            detail,
        }
    }

    /// 对应的属性键，如 `click` -> `onclick`
    pub fn handler_key(&self) -> String {
        format!("on{}", self.event_type)
    }
}
