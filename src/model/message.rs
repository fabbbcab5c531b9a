use serde::{Serialize, Serializer, ser::SerializeMap};

use super::{
    FileMessage, ImageMessage, MarkdownMessage, NewsMessage, NewsNoticeCard, TemplateCard,
    TextMessage, TextNoticeCard,
};

/// 消息类型，即报文顶层的 `msgtype` 字段
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MsgType {
    Text,
    Markdown,
    Image,
    News,
    File,
    TemplateCard,
}

impl MsgType {
    pub const fn as_str(self) -> &'static str {
        match self {
            MsgType::Text => "text",
            MsgType::Markdown => "markdown",
            MsgType::Image => "image",
            MsgType::News => "news",
            MsgType::File => "file",
            MsgType::TemplateCard => "template_card",
        }
    }
}

impl std::fmt::Display for MsgType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 机器人支持的全部消息种类
///
/// 序列化结果即接口要求的报文：顶层 `msgtype` 字段加上一个以消息类型命名的内容字段，
/// 例如 `{"msgtype":"markdown","markdown":{"content":"..."}}`。
#[derive(Clone, Debug)]
pub enum Message {
    Text(TextMessage),
    Markdown(MarkdownMessage),
    Image(ImageMessage),
    News(NewsMessage),
    File(FileMessage),
    TemplateCard(TemplateCard),
}

impl Message {
    /// 该消息固定的 `msgtype`
    pub const fn msg_type(&self) -> MsgType {
        match self {
            Message::Text(_) => MsgType::Text,
            Message::Markdown(_) => MsgType::Markdown,
            Message::Image(_) => MsgType::Image,
            Message::News(_) => MsgType::News,
            Message::File(_) => MsgType::File,
            Message::TemplateCard(_) => MsgType::TemplateCard,
        }
    }

    /// 转成嵌套的键值结构，结构与序列化后的 JSON 报文一致
    pub fn to_message_map(&self) -> serde_json::Map<String, serde_json::Value> {
        let value =
            serde_json::to_value(self).expect("well-typed message always serializes to json");
        match value {
            serde_json::Value::Object(map) => map,
            _ => unreachable!("message serializes to a json object"),
        }
    }
}

impl Serialize for Message {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("msgtype", &self.msg_type())?;
        match self {
            Message::Text(body) => map.serialize_entry("text", body)?,
            Message::Markdown(body) => map.serialize_entry("markdown", body)?,
            Message::Image(body) => map.serialize_entry("image", body)?,
            Message::News(body) => map.serialize_entry("news", body)?,
            Message::File(body) => map.serialize_entry("file", body)?,
            Message::TemplateCard(card) => map.serialize_entry("template_card", card)?,
        }
        map.end()
    }
}

impl From<TextMessage> for Message {
    fn from(message: TextMessage) -> Self {
        Message::Text(message)
    }
}

impl From<MarkdownMessage> for Message {
    fn from(message: MarkdownMessage) -> Self {
        Message::Markdown(message)
    }
}

impl From<ImageMessage> for Message {
    fn from(message: ImageMessage) -> Self {
        Message::Image(message)
    }
}

impl From<NewsMessage> for Message {
    fn from(message: NewsMessage) -> Self {
        Message::News(message)
    }
}

impl From<FileMessage> for Message {
    fn from(message: FileMessage) -> Self {
        Message::File(message)
    }
}

impl From<TemplateCard> for Message {
    fn from(card: TemplateCard) -> Self {
        Message::TemplateCard(card)
    }
}

impl From<TextNoticeCard> for Message {
    fn from(card: TextNoticeCard) -> Self {
        Message::TemplateCard(TemplateCard::TextNotice(card))
    }
}

impl From<NewsNoticeCard> for Message {
    fn from(card: NewsNoticeCard) -> Self {
        Message::TemplateCard(TemplateCard::NewsNotice(card))
    }
}
