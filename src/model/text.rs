use serde::Serialize;

use super::message::MsgType;

/// 提醒所有人的特殊 userid
pub const MENTION_ALL: &str = "@all";

/// 文本消息
#[derive(Serialize, Clone, Debug, Default)]
pub struct TextMessage {
    /// 文本内容，最长不超过 2048 个字节，必须是 utf8 编码
    pub content: String,
    /// userid 的列表，提醒群中的指定成员(@某个成员)，[`MENTION_ALL`] 表示提醒所有人
    #[serde(rename = "mentioned_list")]
    pub user_ids: Vec<String>,
    /// 手机号列表，提醒手机号对应的群成员(@某个成员)
    #[serde(rename = "mentioned_mobile_list")]
    pub mobiles: Vec<String>,
}

impl TextMessage {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            user_ids: Vec::new(),
            mobiles: Vec::new(),
        }
    }

    /// 创建一条提醒所有人的文本消息
    pub fn new_at_all(content: impl Into<String>) -> Self {
        Self::new(content).set_user_ids([MENTION_ALL])
    }

    pub const fn msg_type(&self) -> MsgType {
        MsgType::Text
    }

    /// 替换整个 userid 列表
    pub fn set_user_ids<I, S>(mut self, user_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.user_ids = user_ids.into_iter().map(Into::into).collect();
        self
    }

    /// 向 userid 列表追加
    pub fn add_user_ids<I, S>(mut self, user_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.user_ids.extend(user_ids.into_iter().map(Into::into));
        self
    }

    /// 替换整个手机号列表
    pub fn set_mobiles<I, S>(mut self, mobiles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mobiles = mobiles.into_iter().map(Into::into).collect();
        self
    }

    /// 向手机号列表追加
    pub fn add_mobiles<I, S>(mut self, mobiles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mobiles.extend(mobiles.into_iter().map(Into::into));
        self
    }
}
