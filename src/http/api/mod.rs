use std::fmt::Display;

use serde::Deserialize;

/// webhook 接口的应答报文
///
/// 报文送达后接口仍可能拒绝推送（例如消息超长、频率超限），
/// 这类失败不是传输错误，错误码由这里携带。
#[derive(Deserialize, Debug, Clone)]
pub struct WebhookResponse {
    /// 错误码，0 表示接口已接受本次推送
    pub errcode: i64,
    /// 对错误码的文字说明
    pub errmsg: String,
}

impl WebhookResponse {
    /// 本次推送是否被接口接受
    pub const fn is_success(&self) -> bool {
        self.errcode == 0
    }
}

impl Display for WebhookResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]{}", self.errcode, self.errmsg)
    }
}
