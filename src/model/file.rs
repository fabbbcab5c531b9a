use serde::Serialize;

use super::message::MsgType;

/// 文件消息
#[derive(Serialize, Clone, Debug, Default)]
pub struct FileMessage {
    /// 文件 id，通过素材上传接口获取
    pub media_id: String,
}

impl FileMessage {
    pub fn new(media_id: impl Into<String>) -> Self {
        Self {
            media_id: media_id.into(),
        }
    }

    pub const fn msg_type(&self) -> MsgType {
        MsgType::File
    }
}
