use serde::Serialize;

use super::message::MsgType;

/// markdown 消息
#[derive(Serialize, Clone, Debug, Default)]
pub struct MarkdownMessage {
    /// markdown 内容，最长不超过 4096 个字节，必须是 utf8 编码
    pub content: String,
}

impl MarkdownMessage {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub const fn msg_type(&self) -> MsgType {
        MsgType::Markdown
    }
}
