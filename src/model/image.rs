use serde::Serialize;

use super::message::MsgType;

/// 图片消息
///
/// 库本身不校验图片内容，原图大小、格式等限制由接口侧检查。
#[derive(Serialize, Clone, Debug, Default)]
pub struct ImageMessage {
    /// 图片内容的 base64 编码
    pub base64: String,
    /// 图片内容（base64 编码前）的 md5 值
    pub md5: String,
}

impl ImageMessage {
    pub fn new(base64: impl Into<String>, md5: impl Into<String>) -> Self {
        Self {
            base64: base64.into(),
            md5: md5.into(),
        }
    }

    pub const fn msg_type(&self) -> MsgType {
        MsgType::Image
    }
}
